//! Project types for Projectboard.
//!
//! A project is one accepted form submission: a title, a description,
//! and the number of people assigned to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ProjectId;

/// Status of a project on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Project is active on the board.
    #[default]
    Active,
    /// Project has been finished.
    Finished,
}

/// A project on the board.
///
/// Immutable once created apart from `status`; the store owns the only
/// live copy and hands out clones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: ProjectId,

    /// Title of the project.
    pub title: String,

    /// Longer description of the work.
    pub description: String,

    /// Number of people assigned.
    pub people: u32,

    /// Current status of the project.
    pub status: ProjectStatus,

    /// When the project was created.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new active project with a fresh identifier.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: ProjectId::new(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// Returns true if the project sits in the active column.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}
