//! Domain types for the task list.
//!
//! A task list is an ordered sequence of tasks plus at most one edit session.
//! Display order is list order; ids are unique and never reused.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tasklist_core::action::Action;
use uuid::Uuid;

/// Unique identifier for a task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a `TaskId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, fixed at creation
    pub id: TaskId,
    /// Display text
    pub text: String,
    /// Whether the task is completed
    pub completed: bool,
    /// When the task was added
    pub created_at: DateTime<Utc>,
    /// When the task was last marked completed (if it currently is)
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new, not yet completed task
    #[must_use]
    pub const fn new(id: TaskId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    /// Sets the completion flag, stamping or clearing `completed_at`
    pub fn set_completed(&mut self, completed: bool, at: DateTime<Utc>) {
        self.completed = completed;
        self.completed_at = if completed { Some(at) } else { None };
    }
}

/// The row currently being text-edited and its unsaved draft
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    /// Task being edited
    pub target: TaskId,
    /// Working copy of the text
    pub draft: String,
}

/// One rendered row: what the view layer needs to draw a task
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskRow<'a> {
    /// Display position (0-based)
    pub index: usize,
    /// The task itself
    pub task: &'a Task,
    /// Draft text when this row is the active edit target
    pub draft: Option<&'a str>,
}

impl TaskRow<'_> {
    /// Returns true if the row should render as an editable field
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.draft.is_some()
    }
}

/// State of a task list view
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListState {
    tasks: Vec<Task>,
    edit: Option<EditSession>,
}

impl TaskListState {
    /// Creates an empty task list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            edit: None,
        }
    }

    /// Creates a list holding `tasks` in the given order
    ///
    /// Later duplicates of an id already present are dropped.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut seen = HashSet::new();
        let tasks = tasks.into_iter().filter(|t| seen.insert(t.id)).collect();
        Self { tasks, edit: None }
    }

    /// Tasks in display order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Ids in display order
    pub fn ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.tasks.iter().map(|t| t.id)
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if there are no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Returns the number of tasks still open
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Returns a task by id
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    /// Returns the display index of a task
    #[must_use]
    pub fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == *id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn exists(&self, id: &TaskId) -> bool {
        self.position(id).is_some()
    }

    /// The active edit session, if any
    #[must_use]
    pub const fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Returns true if `id` is the active edit target
    #[must_use]
    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.edit.as_ref().is_some_and(|e| e.target == *id)
    }

    /// Rows in display order, with the draft attached to the edit target
    pub fn rows(&self) -> impl Iterator<Item = TaskRow<'_>> + '_ {
        self.tasks.iter().enumerate().map(|(index, task)| TaskRow {
            index,
            task,
            draft: self
                .edit
                .as_ref()
                .filter(|e| e.target == task.id)
                .map(|e| e.draft.as_str()),
        })
    }

    pub(crate) fn task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == *id)
    }

    pub(crate) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(crate) fn remove(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.position(id)?;
        Some(self.tasks.remove(index))
    }

    pub(crate) fn relocate(&mut self, from: usize, to: usize) {
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
    }

    pub(crate) fn edit_mut(&mut self) -> &mut Option<EditSession> {
        &mut self.edit
    }
}

/// Actions representing commands and events for a task list
///
/// Commands are user intents and are validated by the reducer. Events are
/// the facts the reducer emits and applies; they carry everything needed to
/// re-apply them without consulting the environment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskAction {
    // ========== Commands ==========
    /// Command: Append a task (ignored when `text` is blank)
    AddTask {
        /// Text of the new task
        text: String,
    },

    /// Command: Flip the completion flag
    ToggleComplete {
        /// Task to toggle
        id: TaskId,
    },

    /// Command: Remove a task
    DeleteTask {
        /// Task to delete
        id: TaskId,
    },

    /// Command: Open a task for editing, replacing any previous session
    StartEdit {
        /// Task to edit
        id: TaskId,
    },

    /// Command: Replace the draft of the active edit session
    UpdateDraft {
        /// New draft text, stored verbatim
        text: String,
    },

    /// Command: Write the draft back to the edited task
    CommitEdit,

    /// Command: Discard the active edit session
    CancelEdit,

    /// Command: Reorder a task (drag and drop)
    MoveTask {
        /// Index of the dragged task
        source: usize,
        /// Index in the list after removal; `None` when the drop was cancelled
        destination: Option<usize>,
    },

    // ========== Events ==========
    /// Event: Task was appended
    TaskAdded {
        /// Task identifier
        id: TaskId,
        /// Task text
        text: String,
        /// When the task was added
        created_at: DateTime<Utc>,
    },

    /// Event: Completion flag changed
    CompletionToggled {
        /// Task identifier
        id: TaskId,
        /// The new value
        completed: bool,
        /// When the toggle happened
        at: DateTime<Utc>,
    },

    /// Event: Task was removed
    TaskDeleted {
        /// Task identifier
        id: TaskId,
    },

    /// Event: Edit session opened
    EditStarted {
        /// Task being edited
        id: TaskId,
        /// Initial draft (the task's text at that moment)
        draft: String,
    },

    /// Event: Draft text changed
    DraftUpdated {
        /// New draft
        draft: String,
    },

    /// Event: Draft written back to the task
    EditCommitted {
        /// Task that was edited
        id: TaskId,
        /// Text now stored on the task
        text: String,
    },

    /// Event: Edit session closed without writing back
    EditCancelled {
        /// Task that was being edited
        id: TaskId,
    },

    /// Event: Task moved to a new position
    TaskMoved {
        /// Task that moved
        id: TaskId,
        /// Index before the move
        from: usize,
        /// Index after the move
        to: usize,
    },
}

impl Action for TaskAction {
    fn is_command(&self) -> bool {
        matches!(
            self,
            Self::AddTask { .. }
                | Self::ToggleComplete { .. }
                | Self::DeleteTask { .. }
                | Self::StartEdit { .. }
                | Self::UpdateDraft { .. }
                | Self::CommitEdit
                | Self::CancelEdit
                | Self::MoveTask { .. }
        )
    }

    fn name(&self) -> &'static str {
        match self {
            Self::AddTask { .. } => "AddTask",
            Self::ToggleComplete { .. } => "ToggleComplete",
            Self::DeleteTask { .. } => "DeleteTask",
            Self::StartEdit { .. } => "StartEdit",
            Self::UpdateDraft { .. } => "UpdateDraft",
            Self::CommitEdit => "CommitEdit",
            Self::CancelEdit => "CancelEdit",
            Self::MoveTask { .. } => "MoveTask",
            Self::TaskAdded { .. } => "TaskAdded",
            Self::CompletionToggled { .. } => "CompletionToggled",
            Self::TaskDeleted { .. } => "TaskDeleted",
            Self::EditStarted { .. } => "EditStarted",
            Self::DraftUpdated { .. } => "DraftUpdated",
            Self::EditCommitted { .. } => "EditCommitted",
            Self::EditCancelled { .. } => "EditCancelled",
            Self::TaskMoved { .. } => "TaskMoved",
        }
    }
}
