//! Single entry point that dispatches to the selected algorithm.

use super::types::{Algorithm, AlgorithmKind, Parameters, RunOutcome};
use crate::error::EngineResult;
use crate::graph::{Graph, NodeId};
use crate::observer::{StepHook, StepObserver};
use crate::tabu::TabuRunner;
use crate::uninformed::{DfsRunner, UcsRunner};

/// Runs `algorithm` on `graph`, reporting steps through `hook`.
///
/// Search endpoints are checked against the graph before any work starts,
/// so an `Algorithm` built by hand gets the same guarantees as one built
/// with [`Algorithm::from_parameters`]. The graph is borrowed for the whole
/// run and cannot be mutated until it returns.
pub fn run<N: NodeId>(
    algorithm: &Algorithm<N>,
    graph: &Graph<N>,
    hook: &mut StepHook<'_, N>,
) -> EngineResult<RunOutcome<N>> {
    log::info!(
        "running {} on graph with {} nodes and {} edges",
        algorithm.kind(),
        graph.node_count(),
        graph.edge_count()
    );
    match algorithm {
        Algorithm::Dfs(config) => {
            config.validate(graph)?;
            Ok(RunOutcome::Path(DfsRunner::run_with_hook(graph, config, hook)))
        }
        Algorithm::Ucs(config) => {
            config.validate(graph)?;
            Ok(RunOutcome::Path(UcsRunner::run_with_hook(graph, config, hook)))
        }
        Algorithm::TabuSearch(config) => {
            TabuRunner::run_with_hook(graph, config, hook).map(RunOutcome::Tour)
        }
    }
}

/// Parses `name`, validates `params`, and runs the algorithm.
///
/// Pacing follows `params.step_delay_seconds`. With no observer, no events
/// are emitted.
///
/// # Examples
///
/// ```
/// use u_graphsearch::engine::{run_named, Parameters};
/// use u_graphsearch::graph::Graph;
///
/// let mut g = Graph::new();
/// for n in ["A", "B", "C", "D"] {
///     g.add_node(n.to_string());
/// }
/// g.add_edge(&"A".to_string(), &"B".to_string(), 1.0);
/// g.add_edge(&"B".to_string(), &"C".to_string(), 1.0);
/// g.add_edge(&"C".to_string(), &"D".to_string(), 1.0);
/// g.add_edge(&"A".to_string(), &"D".to_string(), 4.0);
///
/// let params = Parameters::new()
///     .with_start("A".to_string())
///     .with_goal("D".to_string());
/// let outcome = run_named("UCS", &g, &params, None).unwrap();
/// let result = outcome.as_path().unwrap();
/// assert_eq!(result.cost, Some(3.0));
/// ```
pub fn run_named<N: NodeId>(
    name: &str,
    graph: &Graph<N>,
    params: &Parameters<N>,
    observer: Option<&mut dyn StepObserver<N>>,
) -> EngineResult<RunOutcome<N>> {
    let kind: AlgorithmKind = name.parse()?;
    let algorithm = Algorithm::from_parameters(kind, graph, params)?;
    let mut hook = StepHook::new().with_pacer(params.pacer()?);
    if let Some(observer) = observer {
        hook = hook.with_observer(observer);
    }
    run(&algorithm, graph, &mut hook)
}
