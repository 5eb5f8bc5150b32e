//! SA configuration.

/// Configuration for the simulated annealing search.
///
/// The temperature starts at [`initial_temperature`], is multiplied by
/// [`cooling_rate`] after every batch of
/// [`iterations_per_temperature`] moves, and the run stops once it
/// falls to [`min_temperature`].
///
/// [`initial_temperature`]: SaConfig::initial_temperature
/// [`cooling_rate`]: SaConfig::cooling_rate
/// [`iterations_per_temperature`]: SaConfig::iterations_per_temperature
/// [`min_temperature`]: SaConfig::min_temperature
///
/// # Defaults
///
/// ```
/// use gap_metaheur::sa::SaConfig;
///
/// let config = SaConfig::default();
/// assert_eq!(config.initial_temperature, 1000.0);
/// assert_eq!(config.cooling_rate, 0.9999);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use gap_metaheur::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.95)
///     .with_min_temperature(0.01)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature.
    ///
    /// Higher temperatures accept more uphill moves early on.
    pub initial_temperature: f64,

    /// Geometric cooling factor, strictly between 0 and 1.
    ///
    /// Values close to 1 cool slowly; 0.9999 gives roughly 160k
    /// temperature steps from the default start to the default floor.
    pub cooling_rate: f64,

    /// Temperature at which the search stops.
    pub min_temperature: f64,

    /// Neighbor evaluations per temperature step.
    pub iterations_per_temperature: usize,

    /// Weight applied to each unit of capacity overflow in the
    /// objective.
    pub penalty_factor: i64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.9999,
            min_temperature: 1e-4,
            iterations_per_temperature: 100,
            penalty_factor: 1000,
            seed: None,
        }
    }
}

impl SaConfig {
    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the geometric cooling factor.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the stopping temperature.
    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Sets the number of neighbor evaluations per temperature step.
    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
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
        if self.initial_temperature <= 0.0 || !self.initial_temperature.is_finite() {
            return Err("initial_temperature must be positive and finite".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be below initial_temperature".into());
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err("cooling_rate must be strictly between 0 and 1".into());
        }
        if self.iterations_per_temperature == 0 {
            return Err("iterations_per_temperature must be at least 1".into());
        }
        if self.penalty_factor < 0 {
            return Err("penalty_factor must be non-negative".into());
        }
        Ok(())
    }
}
