//! Error types for task list operations.

use thiserror::Error;

/// Misuse the task list refuses to absorb silently.
///
/// Unknown ids, blank input and out-of-range moves are tolerated as no-ops
/// and never produce an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskListError {
    /// The operation needs an edit session but none is active.
    #[error("{operation} requires an active edit session")]
    InvalidState {
        /// Name of the rejected operation
        operation: &'static str,
    },
}
