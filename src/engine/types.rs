//! Algorithm selection and caller-supplied parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};
use crate::graph::{Graph, NodeId};
use crate::observer::Pacer;
use crate::tabu::{TabuConfig, TabuResult, MIN_TOUR_NODES};
use crate::uninformed::{SearchConfig, SearchResult};

/// The supported algorithms, without their parameters.
///
/// Parsing ignores case, spaces, underscores, and hyphens, so both
/// `"TabuSearch"` and `"Tabu Search"` are accepted.
///
/// # Examples
///
/// ```
/// use u_graphsearch::engine::AlgorithmKind;
///
/// assert_eq!("DFS".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::Dfs);
/// assert_eq!("Tabu Search".parse::<AlgorithmKind>().unwrap(), AlgorithmKind::TabuSearch);
/// assert!("A*".parse::<AlgorithmKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlgorithmKind {
    Dfs,
    Ucs,
    TabuSearch,
}

impl FromStr for AlgorithmKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "dfs" => Ok(AlgorithmKind::Dfs),
            "ucs" => Ok(AlgorithmKind::Ucs),
            "tabusearch" | "tabu" => Ok(AlgorithmKind::TabuSearch),
            _ => Err(EngineError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlgorithmKind::Dfs => "DFS",
            AlgorithmKind::Ucs => "UCS",
            AlgorithmKind::TabuSearch => "TabuSearch",
        };
        f.write_str(name)
    }
}

/// Loosely-typed parameters as supplied by a form or config file.
///
/// Numeric fields are signed so that negative input can be reported rather
/// than wrapped. Absent fields take their defaults when an [`Algorithm`]
/// is built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Parameters<N> {
    /// Start node (DFS/UCS).
    pub start: Option<N>,
    /// Goal node (DFS/UCS).
    pub goal: Option<N>,
    /// Iteration budget (Tabu Search).
    pub max_iterations: Option<i64>,
    /// Tabu list capacity (Tabu Search).
    pub tabu_list_size: Option<i64>,
    /// Pause between steps, in seconds.
    pub step_delay_seconds: Option<f64>,
    /// Seed for the initial tour (Tabu Search).
    pub seed: Option<u64>,
}

impl<N> Default for Parameters<N> {
    fn default() -> Self {
        Self {
            start: None,
            goal: None,
            max_iterations: None,
            tabu_list_size: None,
            step_delay_seconds: None,
            seed: None,
        }
    }
}

impl<N: NodeId> Parameters<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: N) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_goal(mut self, goal: N) -> Self {
        self.goal = Some(goal);
        self
    }

    pub fn with_max_iterations(mut self, n: i64) -> Self {
        self.max_iterations = Some(n);
        self
    }

    pub fn with_tabu_list_size(mut self, size: i64) -> Self {
        self.tabu_list_size = Some(size);
        self
    }

    pub fn with_step_delay_seconds(mut self, secs: f64) -> Self {
        self.step_delay_seconds = Some(secs);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the pacer described by `step_delay_seconds`.
    pub fn pacer(&self) -> EngineResult<Pacer> {
        match self.step_delay_seconds {
            Some(secs) => Pacer::from_secs_f64(secs),
            None => Ok(Pacer::none()),
        }
    }
}

impl<N: NodeId + FromStr> Parameters<N> {
    /// Sets one parameter from its text form.
    ///
    /// Blank text clears the parameter. Unknown keys and unparsable values
    /// are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_graphsearch::engine::Parameters;
    ///
    /// let mut params = Parameters::<String>::new();
    /// params.set("start", "A").unwrap();
    /// params.set("max_iterations", "100").unwrap();
    /// assert_eq!(params.start.as_deref(), Some("A"));
    /// assert_eq!(params.max_iterations, Some(100));
    /// assert!(params.set("tabu_list_size", "ten").is_err());
    /// ```
    pub fn set(&mut self, key: &str, text: &str) -> EngineResult<()> {
        let text = text.trim();
        match key {
            "start" => self.start = parse_field(key, text)?,
            "goal" => self.goal = parse_field(key, text)?,
            "max_iterations" => self.max_iterations = parse_field(key, text)?,
            "tabu_list_size" => self.tabu_list_size = parse_field(key, text)?,
            "step_delay_seconds" => self.step_delay_seconds = parse_field(key, text)?,
            "seed" => self.seed = parse_field(key, text)?,
            _ => return Err(EngineError::invalid(key, "unknown parameter")),
        }
        Ok(())
    }
}

fn parse_field<T: FromStr>(key: &str, text: &str) -> EngineResult<Option<T>> {
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| EngineError::invalid(key, format!("cannot parse {text:?}")))
}

fn positive(name: &str, value: Option<i64>, default: usize) -> EngineResult<usize> {
    match value {
        None => Ok(default),
        Some(v) if v > 0 => {
            usize::try_from(v).map_err(|_| EngineError::invalid(name, "too large"))
        }
        Some(v) => Err(EngineError::invalid(name, format!("must be positive, got {v}"))),
    }
}

/// A fully validated algorithm choice with its own parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm<N> {
    Dfs(SearchConfig<N>),
    Ucs(SearchConfig<N>),
    TabuSearch(TabuConfig),
}

impl<N: NodeId> Algorithm<N> {
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Dfs(_) => AlgorithmKind::Dfs,
            Algorithm::Ucs(_) => AlgorithmKind::Ucs,
            Algorithm::TabuSearch(_) => AlgorithmKind::TabuSearch,
        }
    }

    /// Validates `params` against `graph` and builds the algorithm.
    ///
    /// DFS and UCS need a `start` and `goal` present in the graph. Tabu
    /// Search needs at least [`MIN_TOUR_NODES`] nodes and positive sizes.
    /// A step delay, if given, must be non-negative and finite for every
    /// algorithm.
    pub fn from_parameters(
        kind: AlgorithmKind,
        graph: &Graph<N>,
        params: &Parameters<N>,
    ) -> EngineResult<Self> {
        params.pacer()?;
        match kind {
            AlgorithmKind::Dfs | AlgorithmKind::Ucs => {
                let start = params
                    .start
                    .clone()
                    .ok_or(EngineError::MissingParameter("start"))?;
                let goal = params
                    .goal
                    .clone()
                    .ok_or(EngineError::MissingParameter("goal"))?;
                let config = SearchConfig::new(start, goal);
                config.validate(graph)?;
                Ok(if kind == AlgorithmKind::Dfs {
                    Algorithm::Dfs(config)
                } else {
                    Algorithm::Ucs(config)
                })
            }
            AlgorithmKind::TabuSearch => {
                let defaults = TabuConfig::default();
                let config = TabuConfig {
                    max_iterations: positive(
                        "max_iterations",
                        params.max_iterations,
                        defaults.max_iterations,
                    )?,
                    tabu_list_size: positive(
                        "tabu_list_size",
                        params.tabu_list_size,
                        defaults.tabu_list_size,
                    )?,
                    seed: params.seed,
                };
                if graph.node_count() < MIN_TOUR_NODES {
                    return Err(EngineError::TooFewNodes {
                        required: MIN_TOUR_NODES,
                        actual: graph.node_count(),
                    });
                }
                Ok(Algorithm::TabuSearch(config))
            }
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunOutcome<N> {
    /// DFS or UCS result; the path may be absent.
    Path(SearchResult<N>),
    /// Tabu Search result.
    Tour(TabuResult<N>),
}

impl<N> RunOutcome<N> {
    pub fn as_path(&self) -> Option<&SearchResult<N>> {
        match self {
            RunOutcome::Path(r) => Some(r),
            RunOutcome::Tour(_) => None,
        }
    }

    pub fn as_tour(&self) -> Option<&TabuResult<N>> {
        match self {
            RunOutcome::Tour(r) => Some(r),
            RunOutcome::Path(_) => None,
        }
    }

    /// Whether the run was stopped by the cancellation flag.
    pub fn cancelled(&self) -> bool {
        match self {
            RunOutcome::Path(r) => r.cancelled,
            RunOutcome::Tour(r) => r.cancelled,
        }
    }
}
