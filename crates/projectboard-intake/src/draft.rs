//! Raw form input prior to validation.

/// The raw text of a project submission form.
///
/// Fields hold whatever the user typed, unparsed. [`validate_draft`]
/// screens a draft and converts it into typed values.
///
/// [`validate_draft`]: crate::validate_draft
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    /// Contents of the title input.
    pub title: String,
    /// Contents of the description input.
    pub description: String,
    /// Contents of the team-size input, still a string.
    pub people: String,
}

impl ProjectDraft {
    /// Creates a draft from the three field strings.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }
}
