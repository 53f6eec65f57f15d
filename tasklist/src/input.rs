//! The pending-input buffer of the "add a task" field.
//!
//! The buffer belongs to the caller, not the store. Submitting it (Enter key
//! or the Add button) adds a task and clears the buffer only when the task
//! was actually added; blank input is left in place.

use crate::store::TaskListStore;
use crate::types::TaskId;

/// Text typed into the new-task field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskInput {
    text: String,
}

impl TaskInput {
    /// Creates an empty buffer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Current contents
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the contents (one keystroke in the text field)
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns true if submitting would be ignored
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Adds the buffered text as a task, clearing the buffer on success
    pub fn submit(&mut self, store: &mut TaskListStore) -> Option<TaskId> {
        let id = store.add_task(self.text.as_str())?;
        self.text.clear();
        Some(id)
    }
}
