//! Graph model.
//!
//! An undirected, weighted graph supplied by the caller and borrowed
//! immutably by every search. Edges default to weight 1, and querying a
//! missing edge also yields 1 rather than an error.

mod model;
mod types;

pub(crate) use model::write_route;
pub use model::{Graph, DEFAULT_EDGE_WEIGHT};
pub use types::NodeId;
