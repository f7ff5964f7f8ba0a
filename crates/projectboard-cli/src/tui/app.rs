//! TUI application state and logic.

use std::sync::mpsc::Receiver;

use projectboard_intake::{ProjectDraft, REJECTION_MESSAGE};
use projectboard_models::Project;
use projectboard_store::ProjectStore;
use tracing::debug;

/// Which form input currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// The title input
    #[default]
    Title,
    /// The description input
    Description,
    /// The team-size input
    People,
}

impl FormField {
    /// The field after this one, wrapping around.
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::People,
            FormField::People => FormField::Title,
        }
    }

    /// The field before this one, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::People,
            FormField::Description => FormField::Title,
            FormField::People => FormField::Description,
        }
    }
}

/// TUI application state.
pub struct App<'a> {
    /// The project store backing the board
    pub store: &'a ProjectStore,
    /// Channel of board updates from the store
    updates: Receiver<Vec<Project>>,
    /// Last known board contents
    pub projects: Vec<Project>,

    /// Current title input text
    pub title: String,
    /// Current description input text
    pub description: String,
    /// Current team-size input text
    pub people: String,
    /// Field that has focus
    pub focus: FormField,
    /// Cursor position in the focused field, in characters
    pub cursor_pos: usize,

    /// Alert message blocking the form, if any
    pub alert: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create a new App instance subscribed to the given store.
    pub fn new(store: &'a ProjectStore) -> Self {
        let updates = store.subscribe_channel();
        let projects = store.snapshot();

        Self {
            store,
            updates,
            projects,

            title: String::new(),
            description: String::new(),
            people: String::new(),
            focus: FormField::default(),
            cursor_pos: 0,

            alert: None,
            should_quit: false,
        }
    }

    /// Apply any board updates that arrived since the last tick.
    pub fn drain_updates(&mut self) {
        while let Ok(projects) = self.updates.try_recv() {
            self.projects = projects;
        }
    }

    /// Text of the focused field.
    pub fn field(&self) -> &str {
        match self.focus {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    /// Byte offset of the cursor within the focused field.
    fn byte_index(&self) -> usize {
        let value = self.field();
        value
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_pos)
            .unwrap_or(value.len())
    }

    /// Handle character input.
    pub fn enter_char(&mut self, c: char) {
        let index = self.byte_index();
        self.field_mut().insert(index, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor.
    pub fn delete_char(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        self.cursor_pos -= 1;
        let index = self.byte_index();
        self.field_mut().remove(index);
    }

    /// Move cursor left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
        }
    }

    /// Move cursor right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.field().chars().count() {
            self.cursor_pos += 1;
        }
    }

    /// Move cursor to the start of the field.
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to the end of the field.
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.field().chars().count();
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.cursor_pos = self.field().chars().count();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.cursor_pos = self.field().chars().count();
    }

    /// Clear all form fields.
    pub fn clear_form(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
        self.focus = FormField::Title;
        self.cursor_pos = 0;
    }

    /// Submit the current form contents.
    ///
    /// On success the form is cleared. On rejection the fields are
    /// left untouched and an alert blocks further input until
    /// dismissed.
    pub fn submit(&mut self) {
        let draft = ProjectDraft::new(
            self.title.clone(),
            self.description.clone(),
            self.people.clone(),
        );

        match projectboard_intake::submit(self.store, &draft) {
            Ok(_) => self.clear_form(),
            Err(err) => {
                debug!(error = %err, "submission rejected");
                self.alert = Some(REJECTION_MESSAGE.to_string());
            }
        }
    }

    /// Dismiss the blocking alert.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Projects still active, in insertion order.
    pub fn active_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.is_active()).collect()
    }

    /// Projects marked finished, in insertion order.
    pub fn finished_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| !p.is_active()).collect()
    }
}
