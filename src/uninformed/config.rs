//! Uninformed search configuration.

use crate::error::{EngineError, EngineResult};
use crate::graph::{Graph, NodeId};

/// Start and goal for a DFS or UCS run.
///
/// # Examples
///
/// ```
/// use u_graphsearch::graph::Graph;
/// use u_graphsearch::uninformed::SearchConfig;
///
/// let mut g = Graph::new();
/// g.add_node("A");
/// let config = SearchConfig::new("A", "B");
/// assert!(config.validate(&g).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig<N> {
    /// Node the search starts from.
    pub start: N,
    /// Node the search is looking for.
    pub goal: N,
}

impl<N: NodeId> SearchConfig<N> {
    pub fn new(start: N, goal: N) -> Self {
        Self { start, goal }
    }

    /// Checks that both endpoints exist in `graph`.
    pub fn validate(&self, graph: &Graph<N>) -> EngineResult<()> {
        for node in [&self.start, &self.goal] {
            if !graph.contains_node(node) {
                return Err(EngineError::NodeNotFound(node.to_string()));
            }
        }
        Ok(())
    }
}
