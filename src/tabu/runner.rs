//! Tabu Search execution engine for cyclic tours.
//!
//! # Algorithm
//!
//! 1. Shuffle all graph nodes into a random initial tour
//! 2. At each iteration:
//!    a. Enumerate every 2-swap of the current tour (`i < j`, ascending)
//!    b. Select the cheapest swap whose resulting tour is not tabu
//!    (first encountered wins ties); stop if every swap is tabu
//!    c. Move to it and append it to the tabu list, evicting the oldest
//!    entry once the list is over capacity
//!    d. Replace the incumbent if the new tour is strictly cheaper
//! 3. Terminate after `max_iterations` or when the neighborhood is exhausted
//!
//! Every neighbor's cost is recomputed in full, in the same summation order
//! as [`calculate_cost`](super::calculate_cost), so reported costs are
//! bit-for-bit equal to evaluating the reported tours directly.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::config::TabuConfig;
use super::types::{indexed_cost, Tour};
use crate::error::{EngineError, EngineResult};
use crate::graph::{Graph, NodeId};
use crate::observer::{StepCommand, StepEvent, StepHook, TabuStep};

/// Smallest graph for which a cycle is meaningful.
pub const MIN_TOUR_NODES: usize = 3;

/// Upper bound on the up-front `cost_history` reservation.
const HISTORY_RESERVE: usize = 1024;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult<N> {
    /// Best tour found.
    pub best: Tour<N>,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// The random starting tour.
    pub initial: Tour<N>,
    /// Cost of the starting tour.
    pub initial_cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best tour was found (None if the initial tour
    /// was never improved on).
    pub best_iteration: Option<usize>,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
    /// Whether the run stopped because every neighbor was tabu.
    pub exhausted: bool,
    /// Whether the run was stopped by the cancellation flag.
    pub cancelled: bool,
}

impl<N: std::fmt::Display> std::fmt::Display for TabuResult<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Best solution found (cost: {:.2}): {}", self.best_cost, self.best)
    }
}

/// FIFO tabu list with a set for O(1) membership.
struct TabuList {
    queue: VecDeque<Vec<usize>>,
    set: HashSet<Vec<usize>>,
    capacity: usize,
}

impl TabuList {
    fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            set: HashSet::new(),
            capacity,
        }
    }

    fn contains(&self, tour: &[usize]) -> bool {
        self.set.contains(tour)
    }

    fn push(&mut self, tour: Vec<usize>) {
        self.set.insert(tour.clone());
        self.queue.push_back(tour);
        if self.queue.len() > self.capacity {
            if let Some(oldest) = self.queue.pop_front() {
                self.set.remove(&oldest);
            }
        }
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn iter(&self) -> impl Iterator<Item = &Vec<usize>> {
        self.queue.iter()
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search over all nodes of `graph`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_graphsearch::graph::Graph;
    /// use u_graphsearch::tabu::{TabuConfig, TabuRunner};
    ///
    /// let mut g = Graph::new();
    /// for n in ["A", "B", "C", "D"] {
    ///     g.add_node(n);
    /// }
    /// g.add_edge(&"A", &"B", 1.0);
    /// g.add_edge(&"B", &"C", 1.0);
    /// g.add_edge(&"C", &"D", 1.0);
    /// g.add_edge(&"D", &"A", 1.0);
    /// g.add_edge(&"A", &"C", 9.0);
    /// g.add_edge(&"B", &"D", 9.0);
    ///
    /// let config = TabuConfig::default().with_seed(42);
    /// let result = TabuRunner::run(&g, &config).unwrap();
    /// assert_eq!(result.best_cost, 4.0);
    /// assert!(result.best.is_permutation_of(&g));
    /// ```
    pub fn run<N: NodeId>(graph: &Graph<N>, config: &TabuConfig) -> EngineResult<TabuResult<N>> {
        Self::run_with_hook(graph, config, &mut StepHook::new())
    }

    /// Executes Tabu Search, reporting every iteration through `hook`.
    ///
    /// The initial tour is drawn from a generator seeded with
    /// `config.seed`, or a random seed if none is set.
    pub fn run_with_hook<N: NodeId>(
        graph: &Graph<N>,
        config: &TabuConfig,
        hook: &mut StepHook<'_, N>,
    ) -> EngineResult<TabuResult<N>> {
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        Self::run_with_rng(graph, config, &mut rng, hook)
    }

    /// Executes Tabu Search with an injected random source.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<N: NodeId, R: Rng + ?Sized>(
        graph: &Graph<N>,
        config: &TabuConfig,
        rng: &mut R,
        hook: &mut StepHook<'_, N>,
    ) -> EngineResult<TabuResult<N>> {
        config.validate()?;
        let n = graph.node_count();
        if n < MIN_TOUR_NODES {
            return Err(EngineError::TooFewNodes {
                required: MIN_TOUR_NODES,
                actual: n,
            });
        }

        // Initialize
        let mut current: Vec<usize> = (0..n).collect();
        current.shuffle(rng);
        let initial = current.clone();
        let initial_cost = indexed_cost(graph, &current);
        let mut best = current.clone();
        let mut best_cost = initial_cost;
        let mut best_iteration = None;

        log::info!(
            "Tabu search over {n} nodes: {} iterations, tabu size {}, initial cost {initial_cost}",
            config.max_iterations,
            config.tabu_list_size
        );

        let mut tabu = TabuList::new(config.tabu_list_size);
        let mut cost_history = Vec::with_capacity(config.max_iterations.min(HISTORY_RESERVE));
        let mut exhausted = false;
        let mut cancelled = false;

        for iteration in 0..config.max_iterations {
            // Best admissible swap
            let mut candidate = current.clone();
            let mut best_move: Option<(usize, usize, f64)> = None;
            for i in 0..n {
                for j in (i + 1)..n {
                    candidate.swap(i, j);
                    if !tabu.contains(&candidate) {
                        let cost = indexed_cost(graph, &candidate);
                        if best_move.is_none_or(|(_, _, c)| cost < c) {
                            best_move = Some((i, j, cost));
                        }
                    }
                    candidate.swap(i, j);
                }
            }

            let Some((i, j, current_cost)) = best_move else {
                log::warn!("Tabu search stopped at iteration {iteration}: every neighbor is tabu");
                exhausted = true;
                break;
            };

            current.swap(i, j);
            tabu.push(current.clone());

            if current_cost < best_cost {
                best = current.clone();
                best_cost = current_cost;
                best_iteration = Some(iteration);
                log::debug!("iteration {iteration}: new best cost {best_cost}");
            }
            cost_history.push(best_cost);

            if hook.is_observed() {
                let to_nodes = |t: &[usize]| Tour::from_indices(graph, t).into_nodes();
                let current_nodes = to_nodes(current.as_slice());
                let best_nodes = to_nodes(best.as_slice());
                let tabu_nodes: Vec<Vec<N>> = tabu.iter().map(|t| to_nodes(t.as_slice())).collect();
                hook.emit(StepEvent::Tabu(TabuStep {
                    iteration,
                    current: &current_nodes,
                    best: &best_nodes,
                    tabu_list: &tabu_nodes,
                    current_cost,
                    best_cost,
                }));
            }
            log::trace!(
                "iteration {iteration}: swap ({i}, {j}), cost {current_cost}, tabu {}",
                tabu.len()
            );

            if hook.pace() == StepCommand::Stop {
                log::info!("Tabu search cancelled after {} iterations", iteration + 1);
                cancelled = true;
                break;
            }
        }

        log::info!(
            "Tabu search finished after {} iterations, best cost {best_cost}",
            cost_history.len()
        );

        Ok(TabuResult {
            best: Tour::from_indices(graph, &best),
            best_cost,
            initial: Tour::from_indices(graph, &initial),
            initial_cost,
            iterations: cost_history.len(),
            best_iteration,
            cost_history,
            exhausted,
            cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{RecordedStep, RecordingObserver};
    use crate::tabu::calculate_cost;
    use proptest::prelude::*;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn complete(n: u32, weight: impl Fn(u32, u32) -> f64) -> Graph<u32> {
        let mut g = Graph::new();
        for i in 0..n {
            g.add_node(i);
        }
        for a in 0..n {
            for b in (a + 1)..n {
                g.add_edge(&a, &b, weight(a, b));
            }
        }
        g
    }

    /// Optimal cycle cost by trying every permutation that starts at node 0.
    fn brute_force_optimum(g: &Graph<u32>) -> f64 {
        fn permute(rest: &mut [u32], k: usize, g: &Graph<u32>, best: &mut f64) {
            if k == rest.len() {
                let mut tour = vec![0u32];
                tour.extend_from_slice(rest);
                *best = best.min(calculate_cost(g, &tour));
                return;
            }
            for i in k..rest.len() {
                rest.swap(k, i);
                permute(rest, k + 1, g, best);
                rest.swap(k, i);
            }
        }
        let mut rest: Vec<u32> = (1..g.node_count() as u32).collect();
        let mut best = f64::INFINITY;
        permute(&mut rest, 0, g, &mut best);
        best
    }

    fn tabu_lists(rec: &RecordingObserver<u32>) -> Vec<Vec<Vec<u32>>> {
        rec.steps()
            .iter()
            .map(|s| match s {
                RecordedStep::Tabu { tabu_list, .. } => tabu_list.clone(),
                other => panic!("unexpected event {other:?}"),
            })
            .collect()
    }

    #[test]
    fn test_tabu_unit_square_reaches_optimum() {
        let g = complete(4, |_, _| 1.0);
        let config = TabuConfig::default()
            .with_max_iterations(20)
            .with_tabu_list_size(5)
            .with_seed(42);

        let result = TabuRunner::run(&g, &config).unwrap();

        assert!(result.iterations <= 20);
        assert_eq!(result.best_cost, brute_force_optimum(&g));
        assert_eq!(result.best_cost, 4.0);
        assert!(result.best.is_permutation_of(&g));
    }

    #[test]
    fn test_tabu_weighted_four_nodes_reaches_optimum() {
        let g = complete(4, |a, b| f64::from(a * 7 + b * 3 + 1));
        let optimum = brute_force_optimum(&g);
        for seed in 0..10 {
            let config = TabuConfig::default()
                .with_max_iterations(20)
                .with_tabu_list_size(5)
                .with_seed(seed);
            let result = TabuRunner::run(&g, &config).unwrap();
            assert_eq!(result.best_cost, optimum, "seed {seed}");
        }
    }

    #[test]
    fn test_tabu_reported_costs_match_tours() {
        let g = complete(6, |a, b| 0.1 * f64::from(a + 1) + 0.37 * f64::from(b));
        let config = TabuConfig::default().with_seed(3);
        let mut rec = RecordingObserver::<u32>::new();
        let mut hook = StepHook::<u32>::new().with_observer(&mut rec);
        let result = TabuRunner::run_with_hook(&g, &config, &mut hook).unwrap();
        drop(hook);

        assert_eq!(result.best_cost.to_bits(), result.best.cost(&g).to_bits());
        assert_eq!(result.initial_cost.to_bits(), result.initial.cost(&g).to_bits());
        for step in rec.steps() {
            if let RecordedStep::Tabu {
                current,
                best,
                current_cost,
                best_cost,
                ..
            } = step
            {
                assert_eq!(calculate_cost(&g, current).to_bits(), current_cost.to_bits());
                assert_eq!(calculate_cost(&g, best).to_bits(), best_cost.to_bits());
            }
        }
    }

    #[test]
    fn test_tabu_list_fifo_eviction() {
        let g = complete(6, |a, b| f64::from((a * 5 + b * 11) % 13));
        let config = TabuConfig::default()
            .with_max_iterations(30)
            .with_tabu_list_size(3)
            .with_seed(11);
        let mut rec = RecordingObserver::<u32>::new();
        let mut hook = StepHook::<u32>::new().with_observer(&mut rec);
        TabuRunner::run_with_hook(&g, &config, &mut hook).unwrap();
        drop(hook);

        let lists = tabu_lists(&rec);
        assert_eq!(lists.len(), 30);
        for (k, list) in lists.iter().enumerate() {
            assert_eq!(list.len(), (k + 1).min(3));
        }
        for pair in lists.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.len() == 3 {
                assert_eq!(&next[..2], &prev[1..]);
            } else {
                assert_eq!(&next[..prev.len()], &prev[..]);
            }
        }
    }

    #[test]
    fn test_tabu_current_tour_is_newest_tabu_entry() {
        let g = complete(5, |a, b| f64::from(a + b));
        let config = TabuConfig::default().with_max_iterations(10).with_seed(5);
        let mut rec = RecordingObserver::<u32>::new();
        let mut hook = StepHook::<u32>::new().with_observer(&mut rec);
        TabuRunner::run_with_hook(&g, &config, &mut hook).unwrap();
        drop(hook);

        for (k, step) in rec.steps().iter().enumerate() {
            match step {
                RecordedStep::Tabu {
                    iteration,
                    current,
                    tabu_list,
                    ..
                } => {
                    assert_eq!(*iteration, k);
                    assert_eq!(tabu_list.last(), Some(current));
                }
                other => panic!("unexpected event {other:?}"),
            }
        }
    }

    #[test]
    fn test_tabu_exhausted_neighborhood() {
        // 3 nodes have only 6 orderings; a tabu list that holds all of them
        // eventually forbids every swap.
        let g = complete(3, |_, _| 1.0);
        let config = TabuConfig::default()
            .with_max_iterations(50)
            .with_tabu_list_size(10)
            .with_seed(1);
        let result = TabuRunner::run(&g, &config).unwrap();

        assert!(result.exhausted);
        assert!(!result.cancelled);
        assert!(result.iterations <= 6, "ran {} iterations", result.iterations);
    }

    #[test]
    fn test_tabu_huge_limits_do_not_preallocate() {
        let g = complete(3, |_, _| 1.0);
        let config = TabuConfig::default()
            .with_max_iterations(usize::MAX)
            .with_tabu_list_size(usize::MAX)
            .with_seed(7);
        let result = TabuRunner::run(&g, &config).unwrap();
        assert!(result.exhausted);
        assert!(result.iterations <= 6);

        let g = complete(4, |a, b| f64::from(a + b));
        let config = TabuConfig::default()
            .with_max_iterations(5)
            .with_tabu_list_size(usize::MAX)
            .with_seed(7);
        let result = TabuRunner::run(&g, &config).unwrap();
        assert!(result.iterations <= 5);
    }

    #[test]
    fn test_tabu_result_display() {
        let g = complete(3, |_, _| 1.5);
        let result = TabuRunner::run(&g, &TabuConfig::default().with_seed(0)).unwrap();
        assert_eq!(
            result.to_string(),
            format!("Best solution found (cost: 4.50): {}", result.best)
        );
        assert_eq!(result.best.to_string().matches(" → ").count(), 2);
    }

    #[test]
    fn test_tabu_deterministic_with_seed() {
        let g = complete(7, |a, b| f64::from((a * 13 + b * 7) % 10));
        let config = TabuConfig::default().with_seed(99);
        let a = TabuRunner::run(&g, &config).unwrap();
        let b = TabuRunner::run(&g, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.initial, b.initial);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_tabu_injected_rng() {
        let g = complete(5, |a, b| f64::from(a * b));
        let config = TabuConfig::default();
        let mut rng1 = StdRng::seed_from_u64(8);
        let mut rng2 = StdRng::seed_from_u64(8);
        let a = TabuRunner::run_with_rng(&g, &config, &mut rng1, &mut StepHook::new()).unwrap();
        let b = TabuRunner::run_with_rng(&g, &config, &mut rng2, &mut StepHook::new()).unwrap();
        assert_eq!(a.initial, b.initial);
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_tabu_requires_three_nodes() {
        let g = complete(2, |_, _| 1.0);
        let err = TabuRunner::run(&g, &TabuConfig::default()).unwrap_err();
        assert_eq!(
            err,
            EngineError::TooFewNodes {
                required: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_tabu_rejects_invalid_config() {
        let g = complete(4, |_, _| 1.0);
        let config = TabuConfig::default().with_tabu_list_size(0);
        assert!(matches!(
            TabuRunner::run(&g, &config),
            Err(EngineError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_tabu_cancellation() {
        let g = complete(5, |a, b| f64::from(a + b));
        let flag = Arc::new(AtomicBool::new(true));
        let mut hook = StepHook::new().with_cancel(flag);
        let result = TabuRunner::run_with_hook(&g, &TabuConfig::default(), &mut hook).unwrap();
        assert!(result.cancelled);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_tabu_cost_history_non_increasing() {
        let g = complete(8, |a, b| f64::from((a * 31 + b * 17) % 23));
        let config = TabuConfig::default().with_max_iterations(40).with_seed(42);
        let result = TabuRunner::run(&g, &config).unwrap();
        for window in result.cost_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
        if let Some(it) = result.best_iteration {
            assert!(it < result.iterations);
            assert_eq!(result.cost_history[it], result.best_cost);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_best_never_worse_than_initial(
            n in 3u32..7,
            seed in any::<u64>(),
            size in 1usize..8,
            weights in proptest::collection::vec(0u32..20, 49),
        ) {
            let g = complete(n, |a, b| f64::from(weights[(a * 7 + b) as usize]));
            let config = TabuConfig::default()
                .with_max_iterations(15)
                .with_tabu_list_size(size)
                .with_seed(seed);
            let mut rec = RecordingObserver::<u32>::new();
            let mut hook = StepHook::<u32>::new().with_observer(&mut rec);
            let result = TabuRunner::run_with_hook(&g, &config, &mut hook).unwrap();
            drop(hook);

            prop_assert!(result.best_cost <= result.initial_cost);
            prop_assert!(result.best.is_permutation_of(&g));
            for list in tabu_lists(&rec) {
                prop_assert!(list.len() <= size);
            }
        }
    }
}
