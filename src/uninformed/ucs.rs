//! Uniform-cost search.
//!
//! # Algorithm
//!
//! 1. Insert `(0, start, [start])` into a min-priority frontier
//! 2. Extract the cheapest entry and emit a step
//! 3. If it is the goal, return its path
//! 4. Otherwise, if unvisited, mark it and insert every unvisited neighbor
//!    with cost `cost + edge_weight(node, neighbor)`
//! 5. Repeat until the frontier is empty (no path)
//!
//! Frontier ties are broken by node identifier, then by path, so the
//! extraction order is fully deterministic.
//!
//! The returned path is a minimum-cost path only when every edge weight is
//! non-negative. [`Graph::add_edge`] refuses negative weights, so
//! this holds for any graph built through the public API.
//!
//! # Reference
//!
//! Russell, S. & Norvig, P. (2010). *Artificial Intelligence: A Modern
//! Approach*, 3rd ed., §3.4.2.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::config::SearchConfig;
use super::types::{SearchResult, Visited};
use crate::graph::{Graph, NodeId};
use crate::observer::{SearchStep, StepCommand, StepEvent, StepHook};

/// Frontier entry. `Ord` is reversed so that `BinaryHeap` pops the minimum.
#[derive(Debug)]
struct Frontier<N> {
    cost: f64,
    node: N,
    path: Vec<N>,
}

impl<N: Ord> Ord for Frontier<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl<N: Ord> PartialOrd for Frontier<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> PartialEq for Frontier<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for Frontier<N> {}

/// Uniform-cost search runner.
pub struct UcsRunner;

impl UcsRunner {
    /// Runs UCS without observation or pacing.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_graphsearch::graph::Graph;
    /// use u_graphsearch::uninformed::{SearchConfig, UcsRunner};
    ///
    /// let mut g = Graph::new();
    /// for n in ["A", "B", "C"] {
    ///     g.add_node(n);
    /// }
    /// g.add_edge(&"A", &"B", 1.0);
    /// g.add_edge(&"B", &"C", 1.0);
    /// g.add_edge(&"A", &"C", 5.0);
    ///
    /// let result = UcsRunner::run(&g, &SearchConfig::new("A", "C"));
    /// assert_eq!(result.path, Some(vec!["A", "B", "C"]));
    /// assert_eq!(result.cost, Some(2.0));
    /// ```
    pub fn run<N: NodeId>(graph: &Graph<N>, config: &SearchConfig<N>) -> SearchResult<N> {
        Self::run_with_hook(graph, config, &mut StepHook::new())
    }

    /// Runs UCS, reporting every step through `hook`.
    pub fn run_with_hook<N: NodeId>(
        graph: &Graph<N>,
        config: &SearchConfig<N>,
        hook: &mut StepHook<'_, N>,
    ) -> SearchResult<N> {
        let SearchConfig { start, goal } = config;
        log::info!("UCS from {start} to {goal}");

        let mut frontier = BinaryHeap::new();
        frontier.push(Frontier {
            cost: 0.0,
            node: start.clone(),
            path: vec![start.clone()],
        });
        let mut visited = Visited::new();
        let mut steps = 0usize;

        while let Some(Frontier { cost, node, path }) = frontier.pop() {
            hook.emit(StepEvent::Search(SearchStep {
                step: steps,
                current: &node,
                visited: visited.order(),
                path: &path,
                cost: Some(cost),
            }));
            steps += 1;

            if node == *goal {
                log::info!("UCS found path with cost {cost} after {steps} steps");
                return SearchResult::found(path, cost, steps, visited);
            }

            if graph.contains_node(&node) && visited.insert(&node) {
                log::debug!("UCS expanding {node} at cost {cost}");
                for neighbor in graph.neighbors(&node) {
                    if visited.contains(neighbor) {
                        continue;
                    }
                    let new_cost = cost + graph.edge_weight(&node, neighbor);
                    let mut next = path.clone();
                    next.push(neighbor.clone());
                    log::trace!("UCS push {neighbor} at cost {new_cost}");
                    frontier.push(Frontier {
                        cost: new_cost,
                        node: neighbor.clone(),
                        path: next,
                    });
                }
            }

            if hook.pace() == StepCommand::Stop {
                log::info!("UCS cancelled after {steps} steps");
                return SearchResult::not_found(steps, visited, true);
            }
        }

        log::info!("UCS found no path after {steps} steps");
        SearchResult::not_found(steps, visited, false)
    }
}
