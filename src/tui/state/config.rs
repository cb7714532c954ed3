use crate::config::Config;
use crate::tui::{KeyBinding, Theme};
use crossterm::event::KeyCode;
use std::time::Duration;

/// Resolved key bindings for the shell-level actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinds {
    pub overlay: KeyBinding,
    pub help: KeyBinding,
    pub quit: KeyBinding,
}

impl Default for Keybinds {
    fn default() -> Self {
        Self {
            overlay: KeyBinding::ctrl(KeyCode::Char('n')),
            help: KeyBinding::new(KeyCode::F(1)),
            quit: KeyBinding::ctrl(KeyCode::Char('q')),
        }
    }
}

/// Settings the running TUI reads every frame
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub theme: Theme,
    pub mouse: bool,
    pub frame: Duration,
    pub keybinds: Keybinds,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            mouse: true,
            frame: Duration::from_millis(16),
            keybinds: Keybinds::default(),
        }
    }
}

fn parse_binding(name: &str, raw: &str, fallback: KeyBinding) -> KeyBinding {
    match raw.parse() {
        Ok(binding) => binding,
        Err(e) => {
            log::warn!("{} keybind: {}, using {}", name, e, fallback);
            fallback
        }
    }
}

impl RuntimeConfig {
    /// Build from user config; unparseable key bindings keep their defaults
    pub fn from_config(config: &Config) -> Self {
        let defaults = Keybinds::default();
        let keybinds = Keybinds {
            overlay: parse_binding("overlay", &config.keybinds.overlay, defaults.overlay),
            help: parse_binding("help", &config.keybinds.help, defaults.help),
            quit: parse_binding("quit", &config.keybinds.quit, defaults.quit),
        };

        Self {
            theme: Theme::new(config.theme),
            mouse: config.mouse,
            frame: Duration::from_millis(config.frame_ms.max(1)),
            keybinds,
        }
    }
}
