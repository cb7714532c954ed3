pub mod button;
pub mod layout;
pub mod list;
pub mod panel;
pub mod primitives;
pub mod progress_bar;
pub mod stack;
pub mod text_input;

pub use button::render_button;
pub use layout::{render_column, render_container, render_row};
pub use list::{ListProps, render_list};
pub use panel::render_panel;
pub use progress_bar::render_progress_bar;
pub use stack::render_stack;
pub use text_input::{TextInputProps, render_text_input};
