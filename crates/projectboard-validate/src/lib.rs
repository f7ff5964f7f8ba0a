//! Declarative field validation for Projectboard.
//!
//! A [`ValidationRule`] pairs one field's value with the constraints that
//! apply to it; [`validate`] answers pass/fail. Rules are transient:
//! built per submission, checked once, discarded.
//!
//! # Example
//!
//! ```
//! use projectboard_validate::{validate, ValidationRule};
//!
//! let rule = ValidationRule::text("Rewrite parser")
//!     .with_required()
//!     .with_min_length(2);
//! assert!(validate(&rule));
//!
//! let rule = ValidationRule::number(6.0).with_min(1.0).with_max(5.0);
//! assert!(!validate(&rule));
//! ```

pub mod rule;

pub use rule::{validate, FieldValue, ValidationRule};
