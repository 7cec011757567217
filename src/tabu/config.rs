//! Tabu Search configuration.

use crate::error::{EngineError, EngineResult};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_graphsearch::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(20)
///     .with_tabu_list_size(5)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 20);
/// assert_eq!(config.tabu_list_size, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Maximum number of tours held in the tabu list.
    pub tabu_list_size: usize,
    /// Seed for the initial random tour (None for a fresh seed).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tabu_list_size: 10,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_list_size(mut self, size: usize) -> Self {
        self.tabu_list_size = size;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_iterations == 0 {
            return Err(EngineError::invalid("max_iterations", "must be positive"));
        }
        if self.tabu_list_size == 0 {
            return Err(EngineError::invalid("tabu_list_size", "must be positive"));
        }
        Ok(())
    }
}
