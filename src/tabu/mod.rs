//! Tabu Search (TS) over cyclic tours.
//!
//! Approximates the minimum-cost Hamiltonian cycle through every node of a
//! graph. The neighborhood is the exhaustive 2-swap neighborhood, and the
//! tabu list holds whole tours rather than moves.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuRunner, MIN_TOUR_NODES};
pub use types::{calculate_cost, Tour};
