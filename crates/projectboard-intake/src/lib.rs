//! Form intake boundary for Projectboard.
//!
//! Screens raw field text against the board's fixed rules and feeds
//! accepted submissions into the project store: title (required, at
//! least 2 characters), description (required, at least 5 characters),
//! people (required whole number between 1 and 5).
//!
//! Rejection is all-or-nothing: on any failure the store is untouched
//! and the caller surfaces [`REJECTION_MESSAGE`] to the user.

pub mod draft;
pub mod error;
pub mod submit;

pub use draft::ProjectDraft;
pub use error::{Field, IntakeError, Result};
pub use submit::{
    submit, validate_draft, DESCRIPTION_MIN_LENGTH, PEOPLE_MAX, PEOPLE_MIN, REJECTION_MESSAGE,
    TITLE_MIN_LENGTH,
};
