//! Depth-first search.
//!
//! # Algorithm
//!
//! 1. Push `(start, [start])` on a LIFO stack
//! 2. Pop the top entry and emit a step
//! 3. If it is the goal, return its path
//! 4. Otherwise, if unvisited, mark it and push its unvisited neighbors in
//!    descending identifier order, so they are popped in ascending order
//! 5. Repeat until the stack is empty (no path)

use super::config::SearchConfig;
use super::types::{SearchResult, Visited};
use crate::graph::{Graph, NodeId};
use crate::observer::{SearchStep, StepCommand, StepEvent, StepHook};

/// Depth-first search runner.
pub struct DfsRunner;

impl DfsRunner {
    /// Runs DFS without observation or pacing.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_graphsearch::graph::Graph;
    /// use u_graphsearch::uninformed::{DfsRunner, SearchConfig};
    ///
    /// let mut g = Graph::new();
    /// for n in ["A", "B", "C"] {
    ///     g.add_node(n);
    /// }
    /// g.add_unit_edge(&"A", &"B");
    /// g.add_unit_edge(&"B", &"C");
    ///
    /// let result = DfsRunner::run(&g, &SearchConfig::new("A", "C"));
    /// assert_eq!(result.path, Some(vec!["A", "B", "C"]));
    /// ```
    pub fn run<N: NodeId>(graph: &Graph<N>, config: &SearchConfig<N>) -> SearchResult<N> {
        Self::run_with_hook(graph, config, &mut StepHook::new())
    }

    /// Runs DFS, reporting every step through `hook`.
    ///
    /// A start node missing from `graph` is not an error: the start is
    /// popped but never expanded, and the run ends with no path.
    pub fn run_with_hook<N: NodeId>(
        graph: &Graph<N>,
        config: &SearchConfig<N>,
        hook: &mut StepHook<'_, N>,
    ) -> SearchResult<N> {
        let SearchConfig { start, goal } = config;
        log::info!("DFS from {start} to {goal}");

        let mut stack: Vec<(N, Vec<N>)> = vec![(start.clone(), vec![start.clone()])];
        let mut visited = Visited::new();
        let mut steps = 0usize;

        while let Some((node, path)) = stack.pop() {
            hook.emit(StepEvent::Search(SearchStep {
                step: steps,
                current: &node,
                visited: visited.order(),
                path: &path,
                cost: None,
            }));
            steps += 1;

            if node == *goal {
                let cost = graph.path_cost(&path);
                log::info!("DFS found path of {} nodes after {steps} steps", path.len());
                return SearchResult::found(path, cost, steps, visited);
            }

            if graph.contains_node(&node) && visited.insert(&node) {
                let mut neighbors = graph.neighbors(&node);
                neighbors.sort_unstable_by(|a, b| b.cmp(a));
                log::debug!("DFS expanding {node} ({} neighbors)", neighbors.len());
                for neighbor in neighbors {
                    if visited.contains(neighbor) {
                        continue;
                    }
                    let mut next = path.clone();
                    next.push(neighbor.clone());
                    log::trace!("DFS push {neighbor}");
                    stack.push((neighbor.clone(), next));
                }
            }

            if hook.pace() == StepCommand::Stop {
                log::info!("DFS cancelled after {steps} steps");
                return SearchResult::not_found(steps, visited, true);
            }
        }

        log::info!("DFS found no path after {steps} steps");
        SearchResult::not_found(steps, visited, false)
    }
}
