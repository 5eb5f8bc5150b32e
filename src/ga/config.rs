//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the genetic search.
///
/// Controls population size, tournament selection pressure, the mutation
/// rate, the capacity penalty weight, and the generation budget.
///
/// # Defaults
///
/// ```
/// use gap_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use gap_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(7)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals carried between generations.
    ///
    /// Each generation also produces this many offspring before the
    /// elitist truncation. Typical range: 50–500.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Individuals sampled (with replacement) per tournament; the one
    /// with the lowest objective becomes a parent.
    ///
    /// Larger tournaments increase selection pressure.
    pub tournament_size: usize,

    /// Probability of mutating an offspring (0.0–1.0).
    ///
    /// A mutated offspring reassigns each task with probability
    /// `mutation_rate / 2` to a uniformly random agent.
    pub mutation_rate: f64,

    /// Weight applied to each unit of capacity overflow in the
    /// objective.
    pub penalty_factor: i64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            tournament_size: 5,
            mutation_rate: 0.2,
            penalty_factor: 10_000,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
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
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.penalty_factor < 0 {
            return Err("penalty_factor must be non-negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.tournament_size, 5);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert_eq!(config.penalty_factor, 10_000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(500)
            .with_tournament_size(7)
            .with_mutation_rate(0.05)
            .with_penalty_factor(1000)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 500);
        assert_eq!(config.tournament_size, 7);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.penalty_factor, 1000);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = GaConfig::default().with_tournament_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_penalty() {
        let config = GaConfig::default().with_penalty_factor(-1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_mutation_rate() {
        let config = GaConfig::default().with_mutation_rate(2.0);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);

        let config = GaConfig::default().with_mutation_rate(-0.5);
        assert!((config.mutation_rate - 0.0).abs() < 1e-10);
    }
}
