//! Step events and the observer capability.

/// State of an uninformed search right after a frontier entry was taken.
///
/// `visited` holds the nodes expanded before this step, in expansion order.
#[derive(Debug, Clone)]
pub struct SearchStep<'a, N> {
    /// Zero-based index of this step within the run.
    pub step: usize,
    /// Node taken from the frontier.
    pub current: &'a N,
    /// Nodes expanded so far, oldest first.
    pub visited: &'a [N],
    /// Path from the start node to `current`.
    pub path: &'a [N],
    /// Accumulated path cost, for searches that track it.
    pub cost: Option<f64>,
}

/// State of a tabu search right after a move was applied.
#[derive(Debug, Clone)]
pub struct TabuStep<'a, N> {
    /// Zero-based iteration index.
    pub iteration: usize,
    /// Tour after the move.
    pub current: &'a [N],
    /// Best tour found so far.
    pub best: &'a [N],
    /// Tabu list contents, oldest first.
    pub tabu_list: &'a [Vec<N>],
    /// Cost of `current`.
    pub current_cost: f64,
    /// Cost of `best`.
    pub best_cost: f64,
}

/// One per-iteration notification.
#[derive(Debug, Clone)]
pub enum StepEvent<'a, N> {
    /// Emitted by DFS and UCS.
    Search(SearchStep<'a, N>),
    /// Emitted by Tabu Search.
    Tabu(TabuStep<'a, N>),
}

/// Receives per-step state from a running algorithm.
///
/// Called synchronously after every state change and before any pacing
/// delay. Implementations must not panic. Any `FnMut(StepEvent<'_, N>)`
/// closure is an observer.
///
/// # Examples
///
/// ```
/// use u_graphsearch::observer::{StepEvent, StepObserver};
///
/// let mut count = 0;
/// let mut observer = |_: StepEvent<'_, &'static str>| count += 1;
/// observer.on_step(StepEvent::Search(u_graphsearch::observer::SearchStep {
///     step: 0,
///     current: &"A",
///     visited: &[],
///     path: &["A"],
///     cost: None,
/// }));
/// assert_eq!(count, 1);
/// ```
pub trait StepObserver<N> {
    /// Handles one step event.
    fn on_step(&mut self, event: StepEvent<'_, N>);
}

impl<N, F> StepObserver<N> for F
where
    F: FnMut(StepEvent<'_, N>),
{
    fn on_step(&mut self, event: StepEvent<'_, N>) {
        self(event)
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<N> StepObserver<N> for NoopObserver {
    fn on_step(&mut self, _event: StepEvent<'_, N>) {}
}

/// Owned copy of a [`StepEvent`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordedStep<N> {
    Search {
        step: usize,
        current: N,
        visited: Vec<N>,
        path: Vec<N>,
        cost: Option<f64>,
    },
    Tabu {
        iteration: usize,
        current: Vec<N>,
        best: Vec<N>,
        tabu_list: Vec<Vec<N>>,
        current_cost: f64,
        best_cost: f64,
    },
}

impl<N: Clone> From<StepEvent<'_, N>> for RecordedStep<N> {
    fn from(event: StepEvent<'_, N>) -> Self {
        match event {
            StepEvent::Search(s) => RecordedStep::Search {
                step: s.step,
                current: s.current.clone(),
                visited: s.visited.to_vec(),
                path: s.path.to_vec(),
                cost: s.cost,
            },
            StepEvent::Tabu(t) => RecordedStep::Tabu {
                iteration: t.iteration,
                current: t.current.to_vec(),
                best: t.best.to_vec(),
                tabu_list: t.tabu_list.to_vec(),
                current_cost: t.current_cost,
                best_cost: t.best_cost,
            },
        }
    }
}

/// Observer that keeps an owned copy of every event.
#[derive(Debug, Clone)]
pub struct RecordingObserver<N> {
    steps: Vec<RecordedStep<N>>,
}

impl<N> Default for RecordingObserver<N> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<N> RecordingObserver<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in emission order.
    pub fn steps(&self) -> &[RecordedStep<N>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consumes the recorder and returns its events.
    pub fn into_steps(self) -> Vec<RecordedStep<N>> {
        self.steps
    }
}

impl<N: Clone> StepObserver<N> for RecordingObserver<N> {
    fn on_step(&mut self, event: StepEvent<'_, N>) {
        self.steps.push(event.into());
    }
}

/// Observer that writes every event to the `log` facade at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<N: std::fmt::Debug> StepObserver<N> for LogObserver {
    fn on_step(&mut self, event: StepEvent<'_, N>) {
        match event {
            StepEvent::Search(s) => log::debug!(
                "step {}: at {:?}, path {:?}, {} visited",
                s.step,
                s.current,
                s.path,
                s.visited.len()
            ),
            StepEvent::Tabu(t) => log::debug!(
                "iteration {}: current cost {:.2}, best cost {:.2}, tabu {}",
                t.iteration,
                t.current_cost,
                t.best_cost,
                t.tabu_list.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_event<'a>(
        path: &'a [&'static str],
        visited: &'a [&'static str],
    ) -> StepEvent<'a, &'static str> {
        StepEvent::Search(SearchStep {
            step: 3,
            current: path.last().unwrap(),
            visited,
            path,
            cost: Some(2.0),
        })
    }

    #[test]
    fn test_recording_observer_clones_event() {
        let mut rec = RecordingObserver::<&'static str>::new();
        let path = ["A", "B"];
        let visited = ["A"];
        rec.on_step(search_event(&path, &visited));

        assert_eq!(rec.len(), 1);
        assert_eq!(
            rec.steps()[0],
            RecordedStep::Search {
                step: 3,
                current: "B",
                visited: vec!["A"],
                path: vec!["A", "B"],
                cost: Some(2.0),
            }
        );
    }

    #[test]
    fn test_recording_tabu_event() {
        let mut rec = RecordingObserver::<u32>::new();
        let tour = [1u32, 2, 3];
        let tabu = vec![vec![1u32, 2, 3]];
        rec.on_step(StepEvent::Tabu(TabuStep {
            iteration: 0,
            current: &tour,
            best: &tour,
            tabu_list: &tabu,
            current_cost: 3.0,
            best_cost: 3.0,
        }));
        match &rec.into_steps()[0] {
            RecordedStep::Tabu { tabu_list, .. } => assert_eq!(tabu_list.len(), 1),
            other => panic!("expected tabu step, got {other:?}"),
        }
    }

    #[test]
    fn test_closure_and_noop_observers() {
        let mut seen = Vec::new();
        {
            let mut obs = |e: StepEvent<'_, &'static str>| {
                if let StepEvent::Search(s) = e {
                    seen.push(*s.current);
                }
            };
            obs.on_step(search_event(&["A"], &[]));
        }
        assert_eq!(seen, vec!["A"]);

        let mut noop = NoopObserver;
        noop.on_step(search_event(&["A"], &[]));
        LogObserver.on_step(search_event(&["A"], &[]));
    }
}
