//! Tours and their cost.

use std::collections::HashSet;
use std::fmt;

use crate::graph::{write_route, Graph, NodeId};

/// Total weight of `tour` read as a cycle.
///
/// Consecutive pairs are summed first, then the closing edge from the last
/// node back to the first. Missing edges count as
/// [`DEFAULT_EDGE_WEIGHT`](crate::graph::DEFAULT_EDGE_WEIGHT).
/// An empty tour costs 0.
pub fn calculate_cost<N: NodeId>(graph: &Graph<N>, tour: &[N]) -> f64 {
    let mut total = 0.0;
    for pair in tour.windows(2) {
        total += graph.edge_weight(&pair[0], &pair[1]);
    }
    if let (Some(last), Some(first)) = (tour.last(), tour.first()) {
        total += graph.edge_weight(last, first);
    }
    total
}

/// Index-based twin of [`calculate_cost`] with the same summation order.
pub(crate) fn indexed_cost<N: NodeId>(graph: &Graph<N>, tour: &[usize]) -> f64 {
    let mut total = 0.0;
    for pair in tour.windows(2) {
        total += graph.weight_at(pair[0], pair[1]);
    }
    if let (Some(&last), Some(&first)) = (tour.last(), tour.first()) {
        total += graph.weight_at(last, first);
    }
    total
}

/// A cyclic route over graph nodes.
///
/// # Examples
///
/// ```
/// use u_graphsearch::graph::Graph;
/// use u_graphsearch::tabu::Tour;
///
/// let mut g = Graph::new();
/// for n in ["A", "B", "C"] {
///     g.add_node(n);
/// }
/// g.add_edge(&"A", &"B", 2.0);
/// g.add_edge(&"B", &"C", 3.0);
/// g.add_edge(&"C", &"A", 4.0);
///
/// let tour = Tour::new(vec!["A", "B", "C"]);
/// assert_eq!(tour.cost(&g), 9.0);
/// assert_eq!(tour.rotated(1).nodes(), &["B", "C", "A"]);
/// assert!(tour.is_permutation_of(&g));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour<N> {
    nodes: Vec<N>,
}

impl<N: NodeId> Tour<N> {
    pub fn new(nodes: Vec<N>) -> Self {
        Self { nodes }
    }

    pub(crate) fn from_indices(graph: &Graph<N>, indices: &[usize]) -> Self {
        Self {
            nodes: indices.iter().map(|&i| graph.node_at(i).clone()).collect(),
        }
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Cycle cost, see [`calculate_cost`].
    pub fn cost(&self, graph: &Graph<N>) -> f64 {
        calculate_cost(graph, &self.nodes)
    }

    /// The same cycle starting `k` positions later.
    pub fn rotated(&self, k: usize) -> Self {
        let mut nodes = self.nodes.clone();
        if !nodes.is_empty() {
            let k = k % nodes.len();
            nodes.rotate_left(k);
        }
        Self { nodes }
    }

    /// The same cycle traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut nodes = self.nodes.clone();
        nodes.reverse();
        Self { nodes }
    }

    /// Returns `true` if the tour holds every node of `graph` exactly once.
    pub fn is_permutation_of(&self, graph: &Graph<N>) -> bool {
        if self.nodes.len() != graph.node_count() {
            return false;
        }
        let mut seen = HashSet::with_capacity(self.nodes.len());
        self.nodes
            .iter()
            .all(|n| graph.contains_node(n) && seen.insert(n))
    }
}

impl<N: fmt::Display> fmt::Display for Tour<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_route(f, &self.nodes)
    }
}
