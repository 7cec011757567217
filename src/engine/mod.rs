//! Orchestration boundary.
//!
//! Turns a caller's algorithm choice and loosely-typed [`Parameters`] into a
//! validated [`Algorithm`], then dispatches it with an exhaustive match.
//! Malformed input is rejected here, before any search work begins.

mod runner;
mod types;

pub use runner::{run, run_named};
pub use types::{Algorithm, AlgorithmKind, Parameters, RunOutcome};
