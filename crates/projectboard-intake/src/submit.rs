//! Validation and submission of project drafts.

use projectboard_models::ProjectId;
use projectboard_store::ProjectStore;
use projectboard_validate::ValidationRule;
use tracing::info;

use crate::draft::ProjectDraft;
use crate::error::{Field, IntakeError, Result};

/// Minimum length of the title field, in characters.
pub const TITLE_MIN_LENGTH: usize = 2;

/// Minimum length of the description field, in characters.
pub const DESCRIPTION_MIN_LENGTH: usize = 5;

/// Smallest accepted team size.
pub const PEOPLE_MIN: f64 = 1.0;

/// Largest accepted team size.
pub const PEOPLE_MAX: f64 = 5.0;

/// Message shown to the user when a submission is rejected.
pub const REJECTION_MESSAGE: &str = "please enter valid data";

fn parse_people(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| IntakeError::NotANumber(raw.to_string()))
}

/// Screens a draft and returns the typed field values.
///
/// Checks run in form order and stop at the first failure: title,
/// description, then team size. The team-size text must parse as a
/// whole number before its range is checked, and a parse failure is
/// reported as [`IntakeError::NotANumber`] rather than a validation
/// failure.
pub fn validate_draft(draft: &ProjectDraft) -> Result<(String, String, u32)> {
    let title_rule = ValidationRule::text(draft.title.clone())
        .with_required()
        .with_min_length(TITLE_MIN_LENGTH);
    if !title_rule.is_valid() {
        return Err(IntakeError::Invalid(Field::Title));
    }

    let description_rule = ValidationRule::text(draft.description.clone())
        .with_required()
        .with_min_length(DESCRIPTION_MIN_LENGTH);
    if !description_rule.is_valid() {
        return Err(IntakeError::Invalid(Field::Description));
    }

    let people = parse_people(&draft.people)?;
    let people_rule = ValidationRule::number(f64::from(people))
        .with_required()
        .with_min(PEOPLE_MIN)
        .with_max(PEOPLE_MAX);
    if !people_rule.is_valid() {
        return Err(IntakeError::Invalid(Field::People));
    }

    Ok((draft.title.clone(), draft.description.clone(), people))
}

/// Validates a draft and, on success, adds it to the store.
///
/// On failure the store is left untouched and the draft's text is
/// preserved by the caller.
pub fn submit(store: &ProjectStore, draft: &ProjectDraft) -> Result<ProjectId> {
    let (title, description, people) = validate_draft(draft)?;

    info!(title = %title, description = %description, people, "submission accepted");

    let id = store.add_project(title, description, people)?;
    Ok(id)
}
