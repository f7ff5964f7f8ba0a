//! Projectboard CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use projectboard_cli::cli::{Cli, Commands};
use projectboard_cli::{commands, tui};
use projectboard_store::ProjectStore;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    let store = ProjectStore::new();

    // Handle command or open the board
    let result = match cli.command {
        Some(Commands::Board) | None => tui::run(&store),
        Some(cmd) => commands::execute(cmd, &store),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
