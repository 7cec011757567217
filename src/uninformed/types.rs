//! Shared state and result types for DFS and UCS.

use std::collections::HashSet;
use std::fmt;

use crate::graph::{write_route, NodeId};

/// Result of a DFS or UCS run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<N> {
    /// Path from start to goal, or `None` if no path was found.
    pub path: Option<Vec<N>>,
    /// Total edge weight of `path`.
    pub cost: Option<f64>,
    /// Number of step events emitted.
    pub steps: usize,
    /// Expanded nodes, in expansion order.
    pub visited: Vec<N>,
    /// Whether the run was stopped by the cancellation flag.
    pub cancelled: bool,
}

impl<N> SearchResult<N> {
    /// Returns `true` if a path was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    pub(crate) fn found(path: Vec<N>, cost: f64, steps: usize, visited: Visited<N>) -> Self {
        Self {
            path: Some(path),
            cost: Some(cost),
            steps,
            visited: visited.order,
            cancelled: false,
        }
    }

    pub(crate) fn not_found(steps: usize, visited: Visited<N>, cancelled: bool) -> Self {
        Self {
            path: None,
            cost: None,
            steps,
            visited: visited.order,
            cancelled,
        }
    }
}

impl<N: fmt::Display> fmt::Display for SearchResult<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => {
                write!(f, "found path: ")?;
                write_route(f, path)
            }
            None if self.cancelled => write!(f, "cancelled after {} steps", self.steps),
            None => write!(f, "found no path"),
        }
    }
}

/// Visited set that remembers insertion order.
#[derive(Debug)]
pub(crate) struct Visited<N> {
    set: HashSet<N>,
    order: Vec<N>,
}

impl<N: NodeId> Visited<N> {
    pub(crate) fn new() -> Self {
        Self {
            set: HashSet::new(),
            order: Vec::new(),
        }
    }

    pub(crate) fn contains(&self, node: &N) -> bool {
        self.set.contains(node)
    }

    /// Returns `true` if `node` was not visited before.
    pub(crate) fn insert(&mut self, node: &N) -> bool {
        if !self.set.insert(node.clone()) {
            return false;
        }
        self.order.push(node.clone());
        true
    }

    pub(crate) fn order(&self) -> &[N] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visited_keeps_order() {
        let mut v = Visited::new();
        assert!(v.insert(&"C"));
        assert!(v.insert(&"A"));
        assert!(!v.insert(&"C"));
        assert!(v.contains(&"A"));
        assert_eq!(v.order(), &["C", "A"]);
    }

    #[test]
    fn test_result_constructors() {
        let mut v = Visited::new();
        v.insert(&1u32);
        let r = SearchResult::found(vec![1u32], 0.0, 1, v);
        assert!(r.is_found());
        assert_eq!(r.visited, vec![1]);

        let r: SearchResult<u32> = SearchResult::not_found(4, Visited::new(), true);
        assert!(!r.is_found());
        assert!(r.cancelled);
    }

    #[test]
    fn test_result_display() {
        let r = SearchResult::found(vec!["A", "B", "C"], 2.0, 3, Visited::new());
        assert_eq!(r.to_string(), "found path: A → B → C");

        let r: SearchResult<&str> = SearchResult::not_found(4, Visited::new(), false);
        assert_eq!(r.to_string(), "found no path");

        let r: SearchResult<&str> = SearchResult::not_found(2, Visited::new(), true);
        assert_eq!(r.to_string(), "cancelled after 2 steps");
    }
}
