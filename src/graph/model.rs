//! Undirected weighted graph.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use super::types::NodeId;

/// Weight assumed for an edge that was added without one, and for any
/// queried edge that does not exist.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// An undirected graph with non-negative `f64` edge weights.
///
/// Nodes keep their insertion order. Adjacency is stored by node index,
/// so neighbor iteration order is deterministic.
///
/// # Examples
///
/// ```
/// use u_graphsearch::graph::Graph;
///
/// let mut g = Graph::new();
/// assert!(g.add_node("A"));
/// assert!(g.add_node("B"));
/// assert!(!g.add_node("B"));
/// assert!(g.add_edge(&"A", &"B", 2.5));
/// assert_eq!(g.edge_weight(&"B", &"A"), 2.5);
/// assert!(!g.add_edge(&"A", &"Z", 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<BTreeMap<usize, f64>>,
    edge_count: usize,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> Graph<N> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }

    /// Adds a node. Returns `true` only if the node was newly added.
    ///
    /// Adding an existing node leaves the graph unchanged and returns
    /// `false`, as does an invalid identifier (see [`NodeId::is_valid_id`]).
    pub fn add_node(&mut self, id: N) -> bool {
        if !id.is_valid_id() || self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id.clone(), self.nodes.len());
        self.nodes.push(id);
        self.adjacency.push(BTreeMap::new());
        true
    }

    /// Adds or reweights the undirected edge `a - b`.
    ///
    /// Returns `false` and leaves the graph unchanged if either endpoint is
    /// missing, if `a == b`, or if `weight` is negative or not finite.
    pub fn add_edge(&mut self, a: &N, b: &N, weight: f64) -> bool {
        if !weight.is_finite() || weight < 0.0 {
            return false;
        }
        let (Some(&ia), Some(&ib)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        if ia == ib {
            return false;
        }
        if self.adjacency[ia].insert(ib, weight).is_none() {
            self.edge_count += 1;
        }
        self.adjacency[ib].insert(ia, weight);
        true
    }

    /// Adds the edge `a - b` with [`DEFAULT_EDGE_WEIGHT`].
    pub fn add_unit_edge(&mut self, a: &N, b: &N) -> bool {
        self.add_edge(a, b, DEFAULT_EDGE_WEIGHT)
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.adjacency.clear();
        self.edge_count = 0;
    }

    /// Returns `true` if `id` is a node of this graph.
    pub fn contains_node(&self, id: &N) -> bool {
        self.index.contains_key(id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Nodes directly connected to `node`. Empty if `node` is absent or isolated.
    pub fn neighbors(&self, node: &N) -> Vec<&N> {
        match self.index.get(node) {
            Some(&i) => self.adjacency[i].keys().map(|&j| &self.nodes[j]).collect(),
            None => Vec::new(),
        }
    }

    /// Weight of the edge `a - b`, or `None` if there is no such edge.
    pub fn try_edge_weight(&self, a: &N, b: &N) -> Option<f64> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        self.adjacency[ia].get(&ib).copied()
    }

    /// Weight of the edge `a - b`, or [`DEFAULT_EDGE_WEIGHT`] if absent.
    pub fn edge_weight(&self, a: &N, b: &N) -> f64 {
        self.try_edge_weight(a, b).unwrap_or(DEFAULT_EDGE_WEIGHT)
    }

    /// Every undirected edge once, as `(a, b, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(i, adj)| {
            adj.range(i + 1..)
                .map(move |(&j, &w)| (&self.nodes[i], &self.nodes[j], w))
        })
    }

    /// Sum of [`edge_weight`](Self::edge_weight) over consecutive pairs of `path`.
    pub fn path_cost(&self, path: &[N]) -> f64 {
        path.windows(2)
            .map(|pair| self.edge_weight(&pair[0], &pair[1]))
            .sum()
    }

    /// Returns `true` if `path` is non-empty, has no repeated node, and every
    /// consecutive pair is joined by an edge.
    pub fn is_valid_path(&self, path: &[N]) -> bool {
        if path.is_empty() || !path.iter().all(|n| self.contains_node(n)) {
            return false;
        }
        let mut seen = HashSet::with_capacity(path.len());
        if !path.iter().all(|n| seen.insert(n)) {
            return false;
        }
        path.windows(2)
            .all(|pair| self.try_edge_weight(&pair[0], &pair[1]).is_some())
    }

    pub(crate) fn node_at(&self, i: usize) -> &N {
        &self.nodes[i]
    }

    pub(crate) fn weight_at(&self, i: usize, j: usize) -> f64 {
        self.adjacency[i]
            .get(&j)
            .copied()
            .unwrap_or(DEFAULT_EDGE_WEIGHT)
    }
}

/// Writes `route` as `A → B → C`.
pub(crate) fn write_route<N: fmt::Display>(f: &mut fmt::Formatter<'_>, route: &[N]) -> fmt::Result {
    for (i, node) in route.iter().enumerate() {
        if i > 0 {
            write!(f, " → ")?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}

impl<N: NodeId> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nodes: ")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{node}")?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "Edges:")?;
        for (a, b, w) in self.edges() {
            writeln!(f, "{a} -> {b} (weight: {w})")?;
        }
        Ok(())
    }
}
