use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use std::path::Path;

use smartjob::config::Config;

#[derive(Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommands,
}

#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Print where the config file lives
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn config_command(args: ConfigCommands, path: &Path) -> Result<()> {
    match args.command {
        ConfigSubcommands::Path => {
            println!("{}", path.display());
            if !path.exists() {
                println!("{}", "(file does not exist yet; defaults are in effect)".dimmed());
            }
        }
        ConfigSubcommands::Show => {
            let config = Config::load_from(path)?;
            println!("{} {}", "#".dimmed(), path.display().to_string().dimmed());
            print!("{}", config.to_toml()?);
        }
        ConfigSubcommands::Init { force } => {
            init_config(path, force)?;
            println!("{} {}", "✓ Wrote default config to".green(), path.display());
        }
    }
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}; pass --force to overwrite it",
            path.display()
        );
    }
    Config::default().save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        init_config(&path, false).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_keeps_existing_file_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"latte\"\n").unwrap();

        assert!(init_config(&path, false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "theme = \"latte\"\n");

        init_config(&path, true).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
