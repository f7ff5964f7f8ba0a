//! Terminal User Interface for the project board.
//!
//! Provides a single-screen TUI with:
//! - Header bar
//! - Input fields for title, description, and team size
//! - Active and finished project lists
//! - Footer with keybindings
//! - A blocking alert overlay when a submission is rejected

mod app;
mod events;
mod ui;

pub use app::{App, FormField};
pub use events::run;
