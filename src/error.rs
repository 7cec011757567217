//! Error types for the search engine.
//!
//! "No path found" is a normal outcome and never appears here. Every variant
//! describes an invocation the engine refused before doing any search work.

use thiserror::Error;

/// All errors that can occur when invoking a search or optimization run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The algorithm name is not one of the supported algorithms.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A required parameter was not supplied.
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// A parameter was supplied but is malformed or out of range.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A node referenced by the parameters does not exist in the graph.
    #[error("Node {0} not found in graph")]
    NodeNotFound(String),

    /// The graph is too small for the requested algorithm.
    #[error("Graph has {actual} nodes, at least {required} required")]
    TooFewNodes { required: usize, actual: usize },
}

impl EngineError {
    pub(crate) fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        EngineError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
