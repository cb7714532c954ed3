pub mod app;
pub mod apps;
pub mod command;
pub mod element;
pub mod overlay;
pub mod renderer;
pub mod runtime;
pub mod screen_renderer;
pub mod shell;
pub mod state;
pub mod subscription;
pub mod widgets;

pub use app::App;
pub use command::{Command, DispatchTarget};
pub use element::{Alignment, Element, FocusId, Layer, LayoutConstraint};
pub use overlay::{FloatingNavOverlay, OverlayMsg};
pub use renderer::{FocusRegistry, InteractionRegistry, Renderer};
pub use runtime::{AppRuntime, Effect, Runtime};
pub use screen_renderer::ScreenRenderer;
pub use shell::Shell;
pub use state::{Keybinds, ModalState, RuntimeConfig, Theme, ThemeVariant};
pub use subscription::{KeyBinding, ParseKeyBindingError, Subscription};
pub use widgets::{ListState, TextInputState};
