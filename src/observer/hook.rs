//! Per-step hook: observer notification, cancellation, and pacing.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::types::{StepEvent, StepObserver};
use crate::error::{EngineError, EngineResult};

/// What the algorithm loop should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepCommand {
    #[default]
    Continue,
    /// The cancellation flag was raised; leave the loop.
    Stop,
}

/// Timed pause between steps, with an injectable sleep function.
///
/// A zero delay never calls the sleep function.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_graphsearch::observer::Pacer;
///
/// let pacer = Pacer::from_secs_f64(0.25).unwrap();
/// assert_eq!(pacer.delay(), Duration::from_millis(250));
/// assert!(Pacer::from_secs_f64(-1.0).is_err());
/// ```
pub struct Pacer {
    delay: Duration,
    sleep: Box<dyn FnMut(Duration)>,
}

impl Pacer {
    /// A pacer that never pauses.
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    /// A pacer that pauses for `delay` using `std::thread::sleep`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            sleep: Box::new(std::thread::sleep),
        }
    }

    /// Builds a pacer from a delay in seconds.
    ///
    /// Fails if `secs` is negative, NaN, or too large for a [`Duration`].
    pub fn from_secs_f64(secs: f64) -> EngineResult<Self> {
        Duration::try_from_secs_f64(secs)
            .map(Self::new)
            .map_err(|e| EngineError::invalid("step_delay_seconds", e.to_string()))
    }

    /// Replaces the sleep function.
    pub fn with_sleep(mut self, sleep: impl FnMut(Duration) + 'static) -> Self {
        self.sleep = Box::new(sleep);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn pause(&mut self) {
        if !self.delay.is_zero() {
            (self.sleep)(self.delay);
        }
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for Pacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pacer").field("delay", &self.delay).finish()
    }
}

/// Everything an algorithm calls between iterations.
///
/// The loop calls [`emit`](Self::emit) once per step, then
/// [`pace`](Self::pace) before continuing. `pace` checks the cancellation
/// flag first and only sleeps if the run goes on.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use u_graphsearch::observer::{RecordingObserver, StepCommand, StepHook};
///
/// let mut recorder = RecordingObserver::<&str>::new();
/// let cancel = Arc::new(AtomicBool::new(false));
/// let mut hook = StepHook::<&str>::new()
///     .with_observer(&mut recorder)
///     .with_cancel(cancel.clone());
///
/// assert_eq!(hook.pace(), StepCommand::Continue);
/// cancel.store(true, Ordering::Relaxed);
/// assert_eq!(hook.pace(), StepCommand::Stop);
/// ```
pub struct StepHook<'o, N> {
    observer: Option<&'o mut dyn StepObserver<N>>,
    pacer: Pacer,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'o, N> StepHook<'o, N> {
    /// A hook with no observer, no delay, and no cancellation.
    pub fn new() -> Self {
        Self {
            observer: None,
            pacer: Pacer::none(),
            cancel: None,
        }
    }

    pub fn with_observer(mut self, observer: &'o mut dyn StepObserver<N>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn with_pacer(mut self, pacer: Pacer) -> Self {
        self.pacer = pacer;
        self
    }

    /// Sets a flag that, once raised, stops the run at the next step boundary.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Returns `true` if events will reach an observer.
    pub fn is_observed(&self) -> bool {
        self.observer.is_some()
    }

    /// Sends one event to the observer, if any.
    pub fn emit(&mut self, event: StepEvent<'_, N>) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_step(event);
        }
    }

    /// Checks for cancellation, then pauses.
    pub fn pace(&mut self) -> StepCommand {
        if self.is_cancelled() {
            return StepCommand::Stop;
        }
        self.pacer.pause();
        StepCommand::Continue
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

impl<N> Default for StepHook<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for StepHook<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepHook")
            .field("observed", &self.observer.is_some())
            .field("pacer", &self.pacer)
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}
