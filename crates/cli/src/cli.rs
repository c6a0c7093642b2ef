use clap::{Args, Parser, Subcommand, ValueEnum};
use langpick_intelligence::{Industry, Language};
use std::path::PathBuf;

/// Output format for command results.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Command-line interface for the `langpick` application.
#[derive(Debug, Parser)]
#[command(
    name = "langpick",
    version,
    about = "Recommends a first programming language from industry, career goal, and priority"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Dataset and model locations (override `LANGPICK_DATASET` / `LANGPICK_MODEL`).
#[derive(Debug, Clone, Default, Args)]
pub struct PathArgs {
    /// Labeled dataset CSV.
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,
    /// Trained model bundle (JSON).
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,
}

/// Available `langpick` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Trains the probability scorer from the dataset and saves the bundle.
    Train {
        #[command(flatten)]
        paths: PathArgs,
    },
    /// Ranks candidate languages for a learner profile.
    Recommend {
        /// Industry interest (e.g. "Web Development").
        #[arg(long)]
        industry: String,
        /// Career goal (e.g. "Kerja cepat").
        #[arg(long)]
        career_goal: String,
        /// Learning priority (e.g. "Mudah dipelajari").
        #[arg(long)]
        priority: String,
        /// Number of ranked languages to show.
        #[arg(long, default_value_t = 3)]
        top: usize,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[command(flatten)]
        paths: PathArgs,
    },
    /// Shows descriptive information about a language.
    Info {
        /// Language name (e.g. "Python", "C#").
        language: Language,
        /// Industry to highlight a specific use case for.
        #[arg(long)]
        industry: Option<Industry>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Describes the trained model, training it first if needed.
    Model {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[command(flatten)]
        paths: PathArgs,
    },
}
