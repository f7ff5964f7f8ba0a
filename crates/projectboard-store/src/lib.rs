//! Observable in-memory project store for Projectboard.
//!
//! This crate provides the `ProjectStore`: an ordered, append-only list
//! of projects with listener notification on every mutation. One store
//! is constructed at process start and passed to every component that
//! needs it.
//!
//! # Example
//!
//! ```
//! use projectboard_store::ProjectStore;
//!
//! let store = ProjectStore::new();
//!
//! // Watch the board
//! let updates = store.subscribe_channel();
//!
//! // Add a project; every subscriber receives the new snapshot
//! store.add_project("Rewrite parser", "Split lexing from parsing", 3).unwrap();
//! let snapshot = updates.recv().unwrap();
//! assert_eq!(snapshot.len(), 1);
//! ```

pub mod error;
pub mod store;

pub use error::{Result, StoreError};
pub use store::{Listener, ProjectStore};
