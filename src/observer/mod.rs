//! Step observation.
//!
//! Algorithms report their state after every iteration through a
//! [`StepObserver`]. Events are read-only views into the algorithm's own
//! per-run state; an observer never holds a reference back into the search.
//! [`StepHook`] bundles the observer with an optional pacing delay and an
//! optional cancellation flag.

mod hook;
mod types;

pub use hook::{Pacer, StepCommand, StepHook};
pub use types::{
    LogObserver, NoopObserver, RecordedStep, RecordingObserver, SearchStep, StepEvent,
    StepObserver, TabuStep,
};
