//! The task list store: one owned instance per list view.
//!
//! The store holds the state, runs the reducer once per user action, and
//! hands read-only views to the rendering layer. Every operation runs to
//! completion before the next one is accepted; there is no async work and no
//! locking.

use crate::error::TaskListError;
use crate::reducer::{TaskListEnvironment, TaskListReducer};
use crate::types::{EditSession, Task, TaskAction, TaskId, TaskListState, TaskRow};
use tasklist_core::{action::Action, reducer::Reducer, SmallVec};

/// Synchronous shell around [`TaskListReducer`]
///
/// # Example
///
/// ```
/// use tasklist::{TaskListEnvironment, TaskListStore};
///
/// let mut store = TaskListStore::new(TaskListEnvironment::live());
/// let id = store.add_task("buy milk").expect("non-blank text is added");
/// store.toggle_complete(&id);
///
/// assert_eq!(store.state().completed_count(), 1);
/// ```
#[derive(Debug)]
pub struct TaskListStore {
    state: TaskListState,
    reducer: TaskListReducer,
    environment: TaskListEnvironment,
}

impl TaskListStore {
    /// Creates a store with an empty list
    #[must_use]
    pub fn new(environment: TaskListEnvironment) -> Self {
        Self::with_state(TaskListState::new(), environment)
    }

    /// Creates a store starting from `state`
    #[must_use]
    pub const fn with_state(state: TaskListState, environment: TaskListEnvironment) -> Self {
        Self {
            state,
            reducer: TaskListReducer::new(),
            environment,
        }
    }

    /// Sends an action through the reducer
    ///
    /// Returns the events that were applied; an empty vector means the action
    /// was a tolerated no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::InvalidState`] for `UpdateDraft` without an
    /// active edit session. State is unchanged in that case.
    #[tracing::instrument(skip_all, fields(action = action.name()), name = "store_send")]
    pub fn send(&mut self, action: TaskAction) -> Result<SmallVec<[TaskAction; 4]>, TaskListError> {
        self.reducer.reduce(&mut self.state, action, &self.environment)
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &TaskListState {
        &self.state
    }

    /// Tasks in display order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.state.tasks()
    }

    /// The active edit session, if any
    #[must_use]
    pub const fn edit_session(&self) -> Option<&EditSession> {
        self.state.edit_session()
    }

    /// Rows for rendering, in display order
    pub fn rows(&self) -> impl Iterator<Item = TaskRow<'_>> + '_ {
        self.state.rows()
    }

    /// Appends a task; returns its id, or `None` when `text` is blank
    ///
    /// The caller clears its input buffer only when an id comes back.
    pub fn add_task(&mut self, text: impl Into<String>) -> Option<TaskId> {
        let events = self.send_infallible(TaskAction::AddTask { text: text.into() });
        events.iter().find_map(|event| match event {
            TaskAction::TaskAdded { id, .. } => Some(*id),
            _ => None,
        })
    }

    /// Flips the completion flag; returns false if `id` is unknown
    pub fn toggle_complete(&mut self, id: &TaskId) -> bool {
        !self
            .send_infallible(TaskAction::ToggleComplete { id: *id })
            .is_empty()
    }

    /// Removes a task, cancelling its edit session; returns false if `id` is unknown
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        !self
            .send_infallible(TaskAction::DeleteTask { id: *id })
            .is_empty()
    }

    /// Opens `id` for editing, discarding any other unsaved draft
    ///
    /// Returns false (and keeps the current session) if `id` is unknown.
    pub fn start_edit(&mut self, id: &TaskId) -> bool {
        !self
            .send_infallible(TaskAction::StartEdit { id: *id })
            .is_empty()
    }

    /// Replaces the draft of the active edit session
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::InvalidState`] if no edit session is active.
    pub fn update_draft(&mut self, text: impl Into<String>) -> Result<(), TaskListError> {
        self.send(TaskAction::UpdateDraft { text: text.into() })
            .map(|_| ())
    }

    /// Writes the draft back to the edited task; returns false without a session
    pub fn commit_edit(&mut self) -> bool {
        !self.send_infallible(TaskAction::CommitEdit).is_empty()
    }

    /// Discards the active edit session; returns false without a session
    pub fn cancel_edit(&mut self) -> bool {
        !self.send_infallible(TaskAction::CancelEdit).is_empty()
    }

    /// Applies a drop: `destination` indexes the list after the source is removed
    ///
    /// Returns false when nothing moved (cancelled drop, out-of-range index,
    /// or dropping a task back on its own slot).
    pub fn move_task(&mut self, source: usize, destination: Option<usize>) -> bool {
        !self
            .send_infallible(TaskAction::MoveTask {
                source,
                destination,
            })
            .is_empty()
    }

    fn send_infallible(&mut self, action: TaskAction) -> SmallVec<[TaskAction; 4]> {
        match self.send(action) {
            Ok(events) => events,
            Err(error) => {
                tracing::warn!("Unexpected rejection: {error}");
                SmallVec::new()
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)] // Test code can use expect
mod tests {
    use super::*;
    use std::sync::Arc;
    use tasklist_testing::{test_clock, SequentialIdGenerator};

    fn store() -> TaskListStore {
        TaskListStore::new(TaskListEnvironment::new(
            Arc::new(test_clock()),
            Arc::new(SequentialIdGenerator::new()),
        ))
    }

    #[test]
    fn add_task_returns_fresh_ids() {
        let mut store = store();
        let a = store.add_task("a").expect("added");
        let b = store.add_task("b").expect("added");

        assert_ne!(a, b);
        assert_eq!(store.state().ids().collect::<Vec<_>>(), [a, b]);
    }

    #[test]
    fn add_blank_task_returns_none() {
        let mut store = store();
        assert_eq!(store.add_task("   "), None);
        assert!(store.state().is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = store();
        let a = store.add_task("a").expect("added");
        assert!(store.delete_task(&a));
        let b = store.add_task("a").expect("added");

        assert_ne!(a, b);
    }

    #[test]
    fn edit_round_trip() {
        let mut store = store();
        let id = store.add_task("draft me").expect("added");

        assert!(store.start_edit(&id));
        store.update_draft("x").expect("session active");
        assert_eq!(store.rows().next().and_then(|r| r.draft), Some("x"));
        assert!(store.commit_edit());

        assert_eq!(store.tasks()[0].text, "x");
        assert!(store.edit_session().is_none());
    }

    #[test]
    fn update_draft_without_session_fails() {
        let mut store = store();
        store.add_task("a");

        assert_eq!(
            store.update_draft("x"),
            Err(TaskListError::InvalidState {
                operation: "UpdateDraft"
            })
        );
    }

    #[test]
    fn commit_after_deleting_target_writes_nothing() {
        let mut store = store();
        let a = store.add_task("a").expect("added");
        let b = store.add_task("b").expect("added");

        store.start_edit(&a);
        store.update_draft("changed").expect("session active");
        store.delete_task(&a);

        assert!(!store.commit_edit());
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, b);
        assert_eq!(store.tasks()[0].text, "b");
    }

    #[test]
    fn move_reports_whether_anything_moved() {
        let mut store = store();
        store.add_task("a");
        store.add_task("b");

        assert!(!store.move_task(0, None));
        assert!(!store.move_task(0, Some(2)));
        assert!(store.move_task(0, Some(1)));
    }
}
