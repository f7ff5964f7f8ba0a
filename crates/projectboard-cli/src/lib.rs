//! Command-line interface and terminal UI for the project board.

pub mod cli;
pub mod commands;
pub mod tui;
