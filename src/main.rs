use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use sciprag::cli::{Cli, Commands};
use sciprag::config::Config;
use sciprag::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Load configuration (if available, otherwise use defaults)
    let config = Config::load(&root).unwrap_or_default();

    // The guard MUST be held until program exit to ensure logs are flushed
    let _logging_guard = init_logging(&config.logging, &root)?;

    tracing::info!("sciprag starting up");

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            sciprag::commands::init::run(force).await?;
        }
        Commands::Index { project, overwrite } => {
            sciprag::commands::index::run(project, overwrite).await?;
        }
        Commands::Extract { project, index } => {
            sciprag::commands::extract::run(project, index).await?;
        }
        Commands::Files { project } => {
            sciprag::commands::files::run(project).await?;
        }
        Commands::Run { project, overwrite } => {
            sciprag::commands::run::run(project, overwrite).await?;
        }
    }

    Ok(())
}
