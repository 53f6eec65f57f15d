//! # Tasklist Core
//!
//! Core traits and types for the task list architecture.
//!
//! A feature is described by four pieces:
//!
//! - **State**: owned domain data for the feature
//! - **Action**: every input to a reducer, both commands (intents) and events (facts)
//! - **Reducer**: `(State, Action, Environment) → (State, Events)`, synchronous and deterministic
//! - **Environment**: injected dependencies (clock, id generation)
//!
//! The reducer validates a command, emits the events that describe what
//! happened, and applies those events to the state in place. Shells (stores)
//! own the state and call the reducer once per user action.
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_core::{reducer::Reducer, SmallVec};
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = CounterEnvironment;
//!     type Error = CounterError;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         env: &CounterEnvironment,
//!     ) -> Result<SmallVec<[CounterAction; 4]>, CounterError> {
//!         // Business logic goes here
//!         Ok(SmallVec::new())
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

/// Action module - Unified input type for reducers (commands and events)
///
/// Actions represent all possible state transitions of a feature. Commands
/// are requests that may be rejected or ignored; events are facts that the
/// reducer applies unconditionally.
pub mod action {
    /// Classification shared by every action enum.
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_core::action::Action;
    ///
    /// enum LampAction {
    ///     Switch,
    ///     Switched { on: bool },
    /// }
    ///
    /// impl Action for LampAction {
    ///     fn is_command(&self) -> bool {
    ///         matches!(self, Self::Switch)
    ///     }
    ///
    ///     fn name(&self) -> &'static str {
    ///         match self {
    ///             Self::Switch => "Switch",
    ///             Self::Switched { .. } => "Switched",
    ///         }
    ///     }
    /// }
    ///
    /// assert!(LampAction::Switch.is_command());
    /// assert!(LampAction::Switched { on: true }.is_event());
    /// ```
    pub trait Action {
        /// Returns true if this action is a command (an intent to change state)
        fn is_command(&self) -> bool;

        /// Returns true if this action is an event (a fact to apply)
        fn is_event(&self) -> bool {
            !self.is_command()
        }

        /// Stable variant name, used in logs
        fn name(&self) -> &'static str;
    }
}

/// Reducer module - The core trait for business logic
///
/// Reducers are deterministic functions: `(State, Action, Environment) → (State, Events)`
///
/// They contain all business logic and are trivially testable.
pub mod reducer {
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes (commands and events)
    /// - `Environment`: The injected dependencies this reducer needs
    /// - `Error`: Misuse the reducer refuses to absorb silently
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// The error type returned for rejected actions
        type Error;

        /// Reduce an action into state changes
        ///
        /// This is a deterministic function that:
        /// 1. Validates the action
        /// 2. Builds the events describing the change
        /// 3. Applies those events to state in place
        ///
        /// # Returns
        ///
        /// The events that were applied, in order. An empty vector means the
        /// action was a tolerated no-op.
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action is a misuse that must be
        /// surfaced to the caller. State is left unchanged in that case.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Result<SmallVec<[Self::Action; 4]>, Self::Error>;
    }
}

/// Environment module - Dependency injection traits
///
/// All sources of non-determinism are abstracted behind traits and injected
/// via the Environment parameter, so reducers stay reproducible under test.
pub mod environment {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklist_core::environment::{Clock, SystemClock};
    ///
    /// let clock = SystemClock;
    /// let earlier = clock.now();
    /// assert!(clock.now() >= earlier);
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Source of fresh identifiers
    ///
    /// Implementations must never hand out the same id twice.
    pub trait IdGenerator: Send + Sync {
        /// Returns the next unused identifier
        fn next_id(&self) -> Uuid;
    }

    /// Production id generator producing random v4 UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidGenerator;

    impl IdGenerator for UuidGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::environment::{Clock, IdGenerator, SystemClock, UuidGenerator};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    proptest! {
        #[test]
        fn uuid_generator_never_repeats(count in 1usize..256) {
            let ids = UuidGenerator;
            let seen: HashSet<_> = (0..count).map(|_| ids.next_id()).collect();
            prop_assert_eq!(seen.len(), count);
        }
    }
}
