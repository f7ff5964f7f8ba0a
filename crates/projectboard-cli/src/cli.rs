//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};

/// Projectboard - Terminal project tracking board
#[derive(Parser, Debug)]
#[command(name = "projectboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a project to the board
    Add {
        /// Project title (at least 2 characters)
        #[arg(required = true)]
        title: String,

        /// Project description (at least 5 characters)
        #[arg(required = true)]
        description: String,

        /// Number of people assigned (1-5)
        #[arg(required = true)]
        people: String,

        /// Output format (table, json, brief)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Open the interactive board
    Board,
}

/// Output format for board listings
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Brief,
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
