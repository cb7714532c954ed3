//! Screen navigation: the closed set of screens, their display order, the
//! logged-in session, and the controller that owns the current screen.

pub mod controller;
pub mod registry;
pub mod session;

pub use controller::{NavigationController, NavigationState};
pub use registry::{ParseScreenIdError, RegistryEntry, ScreenId, ScreenRegistry};
pub use session::{Role, Session};
