use anyhow::Result;
use clap::Parser;
use log::info;

mod cli;

use cli::commands::tui::RunArgs;
use cli::{Cli, Commands};
use smartjob::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // The TUI owns the terminal, so logs go to a file truncated on each run
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("smartjob.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting smartjob");

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::get_config_path()?,
    };

    match cli.command {
        Some(Commands::Screens) => cli::commands::screens_command(),
        Some(Commands::Config(args)) => cli::commands::config_command(args, &config_path),
        Some(Commands::Run(args)) => {
            let config = Config::load_from(&config_path)?;
            cli::commands::run_command(args, &config).await
        }
        None => {
            let config = Config::load_from(&config_path)?;
            cli::commands::run_command(RunArgs::default(), &config).await
        }
    }
}
