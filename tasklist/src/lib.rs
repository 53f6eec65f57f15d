//! In-memory to-do list built on the reducer architecture.
//!
//! A single list view owns one [`TaskListStore`]. The store keeps tasks in
//! display order along with at most one edit session, and exposes one
//! synchronous operation per user action:
//!
//! - Add (blank text is ignored), toggle complete, delete
//! - Start edit, update draft, commit, cancel
//! - Move (drag and drop, destination indexed after removal)
//!
//! Unknown ids and out-of-range moves are tolerated no-ops. The only error is
//! updating a draft with no edit session active.
//!
//! # Quick Start
//!
//! ```
//! use tasklist::{TaskInput, TaskListEnvironment, TaskListStore};
//!
//! let mut store = TaskListStore::new(TaskListEnvironment::live());
//! let mut input = TaskInput::new();
//!
//! input.set("a");
//! let a = input.submit(&mut store).expect("added");
//! input.set("b");
//! input.submit(&mut store);
//!
//! store.toggle_complete(&a);
//! store.move_task(0, Some(1));
//!
//! let texts: Vec<_> = store.tasks().iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["b", "a"]);
//! assert!(store.tasks()[1].completed);
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod reducer;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::TaskListError;
pub use input::TaskInput;
pub use reducer::{TaskListEnvironment, TaskListReducer};
pub use store::TaskListStore;
pub use types::{EditSession, Task, TaskAction, TaskId, TaskListState, TaskRow};
