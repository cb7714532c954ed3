use super::commands::config::ConfigCommands;
use super::commands::tui::RunArgs;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smartjob")]
#[command(version)]
#[command(about = "Walk through the Smart Job Aggregator career platform in your terminal")]
pub struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive demo (default)
    Run(RunArgs),
    /// List every screen in navigation order
    Screens,
    /// Inspect the configuration file
    Config(ConfigCommands),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::config::ConfigSubcommands;
    use clap::CommandFactory;
    use smartjob::tui::ThemeVariant;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_run() {
        let cli = Cli::try_parse_from(["smartjob"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_run_flags() {
        let cli = Cli::try_parse_from([
            "smartjob", "run", "--start", "skillGap", "--theme", "latte", "--no-mouse",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.start.as_deref(), Some("skillGap"));
                assert_eq!(args.theme, Some(ThemeVariant::Latte));
                assert!(args.no_mouse);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::try_parse_from(["smartjob", "--config", "/tmp/x.toml", "config", "path"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommands { command: ConfigSubcommands::Path }))
        ));
    }

    #[test]
    fn test_config_init_force_flag() {
        let cli = Cli::try_parse_from(["smartjob", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommands { command: ConfigSubcommands::Init { force: true } }))
        ));
    }

    #[test]
    fn test_bad_theme_rejected() {
        assert!(Cli::try_parse_from(["smartjob", "run", "--theme", "neon"]).is_err());
    }
}
