use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::nav::ScreenId;
use crate::tui::ThemeVariant;

/// User preferences read from `config.toml`.
///
/// Every field has a default, so a missing file and an empty file behave
/// the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeVariant,
    pub mouse: bool,
    /// Screen key to open on launch; unknown keys fall back to the intro
    pub start_screen: Option<String>,
    /// Target frame time for the render loop
    pub frame_ms: u64,
    pub keybinds: KeybindSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindSettings {
    pub overlay: String,
    pub help: String,
    pub quit: String,
}

impl Default for KeybindSettings {
    fn default() -> Self {
        Self {
            overlay: "Ctrl+N".to_string(),
            help: "F1".to_string(),
            quit: "Ctrl+Q".to_string(),
        }
    }
}

fn default_frame_ms() -> u64 {
    16
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            mouse: true,
            start_screen: None,
            frame_ms: default_frame_ms(),
            keybinds: KeybindSettings::default(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("smartjob");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", path);

        if !path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config to TOML")
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", path);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
                info!("Created config directory: {:?}", parent);
            }
        }

        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        info!("Config saved to {:?}", path);
        Ok(())
    }

    /// The configured start screen, defaulting to the introduction
    pub fn start_screen(&self) -> ScreenId {
        self.start_screen
            .as_deref()
            .map(ScreenId::resolve)
            .unwrap_or(ScreenId::Intro)
    }
}
