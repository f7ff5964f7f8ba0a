//! Error types for form intake.

use std::fmt;

use projectboard_store::StoreError;
use thiserror::Error;

/// A form field, as named in rejection errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The title input.
    Title,
    /// The description input.
    Description,
    /// The team-size input.
    People,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::People => "people",
        };
        write!(f, "{}", name)
    }
}

/// Errors produced while screening a submission.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// A field failed validation.
    #[error("invalid {0}")]
    Invalid(Field),

    /// The team-size field does not contain a whole number.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// The store rejected the addition.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for intake operations.
pub type Result<T> = std::result::Result<T, IntakeError>;
