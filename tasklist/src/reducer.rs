//! Reducer logic for the task list.
//!
//! Commands are validated against the current state and turned into events;
//! events are applied to state in place. Sending an event directly replays
//! it without consulting the environment.

use crate::error::TaskListError;
use crate::types::{EditSession, Task, TaskAction, TaskId, TaskListState};
use std::sync::Arc;
use tasklist_core::{
    action::Action,
    environment::{Clock, IdGenerator, SystemClock, UuidGenerator},
    reducer::Reducer,
    smallvec, SmallVec,
};

type Events = SmallVec<[TaskAction; 4]>;

/// Environment dependencies for the task list reducer
#[derive(Clone)]
pub struct TaskListEnvironment {
    /// Clock for creation and completion timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of fresh task ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TaskListEnvironment {
    /// Creates a new `TaskListEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// System clock and random UUIDs
    #[must_use]
    pub fn live() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(UuidGenerator))
    }
}

impl std::fmt::Debug for TaskListEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskListEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the task list
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskListReducer;

impl TaskListReducer {
    /// Creates a new `TaskListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn add_task(text: String, env: &TaskListEnvironment) -> Events {
        if text.trim().is_empty() {
            tracing::trace!("AddTask ignored: blank text");
            return SmallVec::new();
        }

        smallvec![TaskAction::TaskAdded {
            id: TaskId::from_uuid(env.ids.next_id()),
            text,
            created_at: env.clock.now(),
        }]
    }

    fn toggle_complete(state: &TaskListState, id: TaskId, env: &TaskListEnvironment) -> Events {
        let Some(task) = state.get(&id) else {
            tracing::trace!("ToggleComplete ignored: unknown task {id}");
            return SmallVec::new();
        };

        smallvec![TaskAction::CompletionToggled {
            id,
            completed: !task.completed,
            at: env.clock.now(),
        }]
    }

    fn delete_task(state: &TaskListState, id: TaskId) -> Events {
        if !state.exists(&id) {
            tracing::trace!("DeleteTask ignored: unknown task {id}");
            return SmallVec::new();
        }

        let mut events = Events::new();
        if state.is_editing(&id) {
            events.push(TaskAction::EditCancelled { id });
        }
        events.push(TaskAction::TaskDeleted { id });
        events
    }

    fn start_edit(state: &TaskListState, id: TaskId) -> Events {
        let Some(task) = state.get(&id) else {
            tracing::trace!("StartEdit ignored: unknown task {id}");
            return SmallVec::new();
        };

        smallvec![TaskAction::EditStarted {
            id,
            draft: task.text.clone(),
        }]
    }

    fn update_draft(state: &TaskListState, text: String) -> Result<Events, TaskListError> {
        if state.edit_session().is_none() {
            let error = TaskListError::InvalidState {
                operation: "UpdateDraft",
            };
            tracing::warn!("UpdateDraft rejected: {error}");
            return Err(error);
        }

        Ok(smallvec![TaskAction::DraftUpdated { draft: text }])
    }

    fn commit_edit(state: &TaskListState) -> Events {
        // No validation on save: blank drafts are written as-is.
        state
            .edit_session()
            .map(|session| TaskAction::EditCommitted {
                id: session.target,
                text: session.draft.clone(),
            })
            .into_iter()
            .collect()
    }

    fn cancel_edit(state: &TaskListState) -> Events {
        state
            .edit_session()
            .map(|session| TaskAction::EditCancelled { id: session.target })
            .into_iter()
            .collect()
    }

    fn move_task(state: &TaskListState, source: usize, destination: Option<usize>) -> Events {
        let Some(destination) = destination else {
            tracing::trace!("MoveTask ignored: drop cancelled");
            return SmallVec::new();
        };

        // `destination` indexes the list after removal, which has len - 1
        // elements, so the valid insert positions are 0..len.
        let len = state.len();
        if source >= len || destination >= len {
            tracing::trace!("MoveTask ignored: {source} -> {destination} out of range for {len}");
            return SmallVec::new();
        }

        if source == destination {
            return SmallVec::new();
        }

        smallvec![TaskAction::TaskMoved {
            id: state.tasks()[source].id,
            from: source,
            to: destination,
        }]
    }

    /// Applies an event to state
    fn apply_event(state: &mut TaskListState, action: &TaskAction) {
        match action {
            TaskAction::TaskAdded {
                id,
                text,
                created_at,
            } => {
                if !state.exists(id) {
                    state.push(Task::new(*id, text.clone(), *created_at));
                }
            },
            TaskAction::CompletionToggled { id, completed, at } => {
                if let Some(task) = state.task_mut(id) {
                    task.set_completed(*completed, *at);
                }
            },
            TaskAction::TaskDeleted { id } => {
                if state.is_editing(id) {
                    *state.edit_mut() = None;
                }
                state.remove(id);
            },
            TaskAction::EditStarted { id, draft } => {
                if state.exists(id) {
                    *state.edit_mut() = Some(EditSession {
                        target: *id,
                        draft: draft.clone(),
                    });
                }
            },
            TaskAction::DraftUpdated { draft } => {
                if let Some(session) = state.edit_mut() {
                    session.draft.clone_from(draft);
                }
            },
            TaskAction::EditCommitted { id, text } => {
                if let Some(task) = state.task_mut(id) {
                    task.text.clone_from(text);
                }
                if state.is_editing(id) {
                    *state.edit_mut() = None;
                }
            },
            TaskAction::EditCancelled { id } => {
                if state.is_editing(id) {
                    *state.edit_mut() = None;
                }
            },
            TaskAction::TaskMoved { id, to, .. } => {
                match state.position(id) {
                    Some(from) if *to < state.len() => state.relocate(from, *to),
                    _ => {},
                }
            },
            // Commands are not applied to state
            TaskAction::AddTask { .. }
            | TaskAction::ToggleComplete { .. }
            | TaskAction::DeleteTask { .. }
            | TaskAction::StartEdit { .. }
            | TaskAction::UpdateDraft { .. }
            | TaskAction::CommitEdit
            | TaskAction::CancelEdit
            | TaskAction::MoveTask { .. } => {},
        }
    }
}

impl Reducer for TaskListReducer {
    type State = TaskListState;
    type Action = TaskAction;
    type Environment = TaskListEnvironment;
    type Error = TaskListError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<Events, TaskListError> {
        let events = match action {
            // ========== Commands ==========
            TaskAction::AddTask { text } => Self::add_task(text, env),
            TaskAction::ToggleComplete { id } => Self::toggle_complete(state, id, env),
            TaskAction::DeleteTask { id } => Self::delete_task(state, id),
            TaskAction::StartEdit { id } => Self::start_edit(state, id),
            TaskAction::UpdateDraft { text } => Self::update_draft(state, text)?,
            TaskAction::CommitEdit => Self::commit_edit(state),
            TaskAction::CancelEdit => Self::cancel_edit(state),
            TaskAction::MoveTask {
                source,
                destination,
            } => Self::move_task(state, source, destination),

            // ========== Events ==========
            event => {
                tracing::debug!("Replaying {}", event.name());
                Self::apply_event(state, &event);
                return Ok(SmallVec::new());
            },
        };

        for event in &events {
            tracing::debug!(event = event.name(), "Applying event");
            Self::apply_event(state, event);
        }

        Ok(events)
    }
}
