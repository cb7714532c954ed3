pub mod config;
pub mod screens;
pub mod tui;

pub use config::config_command;
pub use screens::screens_command;
pub use tui::run_command;
