//! Application entry point: logging setup and command dispatch.

use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_info_command, handle_model_command, handle_recommend_command, handle_train_command,
};
use anyhow::Result;
use clap::Parser;

/// The main entry point for the `langpick` application.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train { paths } => handle_train_command(paths),
        Commands::Recommend {
            industry,
            career_goal,
            priority,
            top,
            format,
            paths,
        } => handle_recommend_command(industry, career_goal, priority, top, format, paths),
        Commands::Info {
            language,
            industry,
            format,
        } => handle_info_command(language, industry, format),
        Commands::Model { format, paths } => handle_model_command(paths, format),
    }
}
