//! Observable graph search and tour optimization.
//!
//! Provides step-by-step implementations of three textbook algorithms over
//! an undirected weighted [`Graph`](graph::Graph):
//!
//! - **Depth-First Search (DFS)**: LIFO frontier with deterministic
//!   ascending-identifier neighbor order.
//! - **Uniform-Cost Search (UCS)**: priority frontier keyed by accumulated
//!   path cost; returns a minimum-cost path for non-negative weights.
//! - **Tabu Search (TS)**: best-improvement 2-swap search for a low-cost
//!   cycle through every node, with a FIFO tabu list of recent tours.
//!
//! Every algorithm reports its state after each iteration through a
//! [`StepObserver`](observer::StepObserver), optionally pausing between
//! steps so an external renderer can animate progress.
//!
//! # Architecture
//!
//! The graph is owned by the caller and borrowed immutably by each run.
//! Algorithms own their per-run state and hand observers read-only views
//! of it. The [`engine`] module is the single entry point for callers that
//! select an algorithm at runtime.

pub mod engine;
pub mod error;
pub mod graph;
pub mod observer;
pub mod tabu;
pub mod uninformed;

pub use error::{EngineError, EngineResult};
