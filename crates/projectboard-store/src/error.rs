//! Error types for store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Lock poisoned (a thread panicked while holding it).
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
