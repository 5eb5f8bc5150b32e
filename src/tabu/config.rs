//! Tabu search configuration.

/// Configuration parameters for the tabu search.
///
/// # Defaults
///
/// ```
/// use gap_metaheur::tabu::TabuConfig;
///
/// let config = TabuConfig::default();
/// assert_eq!(config.neighborhood_size, 100);
/// assert_eq!(config.tabu_tenure, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use gap_metaheur::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_neighborhood_size(50)
///     .with_tabu_tenure(20)
///     .with_max_iterations(500)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Candidate moves sampled per iteration.
    pub neighborhood_size: usize,

    /// Iterations an accepted move stays forbidden.
    ///
    /// Longer tenures push the trajectory away from recent assignments;
    /// shorter ones intensify around them.
    pub tabu_tenure: usize,

    /// Hard iteration budget.
    pub max_iterations: usize,

    /// Iterations without a new global best before stopping early.
    pub max_no_improve: usize,

    /// Weight applied to each unit of capacity overflow in the
    /// objective.
    pub penalty_factor: i64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            neighborhood_size: 100,
            tabu_tenure: 100,
            max_iterations: 2000,
            max_no_improve: 500,
            penalty_factor: 1000,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of candidate moves per iteration.
    pub fn with_neighborhood_size(mut self, n: usize) -> Self {
        self.neighborhood_size = n;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    /// Sets the capacity penalty factor.
    pub fn with_penalty_factor(mut self, factor: i64) -> Self {
        self.penalty_factor = factor;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.neighborhood_size == 0 {
            return Err("neighborhood_size must be at least 1".into());
        }
        if self.tabu_tenure == 0 {
            return Err("tabu_tenure must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.max_no_improve == 0 {
            return Err("max_no_improve must be at least 1".into());
        }
        if self.penalty_factor < 0 {
            return Err("penalty_factor must be non-negative".into());
        }
        Ok(())
    }
}
