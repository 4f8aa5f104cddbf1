use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use uiforge_cli::{Cli, Command, commands, log_level};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = uiforge_cli::VERSION, "uiforge-cli starting");

    match &cli.command {
        Command::New(args) => commands::new_document(args),
        Command::Add(args) => commands::add_element(args),
        Command::Remove(args) => commands::remove_element(args),
        Command::Generate(args) => commands::generate(args),
        Command::Info(args) => commands::info(args),
        Command::Types => {
            commands::types();
            Ok(())
        }
        Command::Project(cmd) => commands::project(&cli.data, cmd).await,
    }
}
