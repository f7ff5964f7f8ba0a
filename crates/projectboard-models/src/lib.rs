//! Core data models for Projectboard.
//!
//! This crate provides the fundamental data types used throughout the
//! board: projects, their status, and type-safe identifiers.

pub mod ids;
pub mod project;

// Re-export main types
pub use ids::ProjectId;
pub use project::{Project, ProjectStatus};
