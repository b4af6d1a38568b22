//! CLI command definitions.

pub mod learners;

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::DEFAULT_BASE_URL;

/// CLI client for rollbook API.
#[derive(Debug, Parser)]
#[command(name = "rollbook-client")]
#[command(about = "CLI client for rollbook API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "ROLLBOOK_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Learner management.
    Learners(learners::LearnersCommand),
    /// Server health report.
    Health,
}
