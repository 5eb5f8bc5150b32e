//! SA execution loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SaConfig;
use crate::error::GapError;
use crate::instance::GapInstance;
use crate::neighborhood;
use crate::perf::PerfRecord;
use crate::solution::GapSolution;

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<'a> {
    /// The best solution found.
    pub best: GapSolution<'a>,

    /// Objective of the best solution.
    pub best_objective: i64,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Temperature when the search stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted moves that improved on the current solution.
    pub improving_moves: usize,

    /// One record per temperature step, plus the initial state at
    /// iteration 0.
    pub trace: Vec<PerfRecord>,
}

/// Single-trajectory annealing over single-task reassignments.
///
/// Each temperature step evaluates a batch of random reassignment
/// neighbors under the Metropolis criterion, then cools geometrically.
/// Uphill moves are accepted with probability `exp(-delta / T)`, so the
/// walk crosses infeasible regions early and settles as the temperature
/// drops.
///
/// # Usage
///
/// ```
/// use gap_metaheur::instance::GapInstance;
/// use gap_metaheur::sa::{AnnealingSearch, SaConfig};
///
/// let instance = GapInstance::new(
///     2,
///     3,
///     vec![vec![4, 2, 8], vec![5, 3, 6]],
///     vec![vec![3, 2, 4], vec![2, 3, 2]],
///     vec![5, 5],
/// )?;
/// let config = SaConfig::default()
///     .with_initial_temperature(10.0)
///     .with_cooling_rate(0.8)
///     .with_min_temperature(0.1)
///     .with_iterations_per_temperature(10)
///     .with_seed(42);
/// let result = AnnealingSearch::new(&instance, config)?.solve();
/// assert!(result.final_temperature <= 0.1);
/// # Ok::<(), gap_metaheur::error::GapError>(())
/// ```
pub struct AnnealingSearch<'a> {
    instance: &'a GapInstance,
    config: SaConfig,
    rng: StdRng,
}

impl<'a> AnnealingSearch<'a> {
    /// Creates a driver for `instance` with the given configuration.
    ///
    /// # Errors
    ///
    /// [`GapError::InvalidConfig`] if the configuration fails
    /// [`SaConfig::validate`]; [`GapError::DegenerateInstance`] if the
    /// instance has fewer than two agents (a reassignment move needs a
    /// different agent to move to).
    pub fn new(instance: &'a GapInstance, config: SaConfig) -> Result<Self, GapError> {
        config.validate().map_err(GapError::InvalidConfig)?;
        if instance.num_agents() < 2 {
            return Err(GapError::DegenerateInstance(
                "annealing needs at least 2 agents to reassign between".into(),
            ));
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Ok(Self {
            instance,
            config,
            rng,
        })
    }

    /// Runs the annealing loop until the temperature falls below the
    /// configured floor and returns the best solution found.
    pub fn solve(mut self) -> SaResult<'a> {
        let penalty_factor = self.config.penalty_factor;

        let mut current = GapSolution::new(self.instance);
        current.initialize(&mut self.rng);
        current.recompute_objective(penalty_factor);
        let mut best = current.clone();

        let mut temperature = self.config.initial_temperature;
        let mut step = 0usize;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut trace = Vec::new();
        trace.push(PerfRecord::new(0, current.objective(), best.objective()));

        while temperature > self.config.min_temperature {
            for _ in 0..self.config.iterations_per_temperature {
                let neighbor =
                    neighborhood::random_reassignment(&current, penalty_factor, &mut self.rng);
                let delta = neighbor.solution.objective() - current.objective();

                // Metropolis acceptance criterion
                let accept = delta < 0
                    || (-(delta as f64) / temperature).exp() > self.rng.random_range(0.0..1.0);
                if accept {
                    if delta < 0 {
                        improving_moves += 1;
                    }
                    current = neighbor.solution;
                    accepted_moves += 1;

                    if current.objective() < best.objective() {
                        best = current.clone();
                    }
                }
                iterations += 1;
            }

            temperature *= self.config.cooling_rate;
            step += 1;
            trace.push(PerfRecord::new(step, current.objective(), best.objective()));
        }

        SaResult {
            best_objective: best.objective(),
            best,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_instance() -> GapInstance {
        GapInstance::new(
            2,
            3,
            vec![vec![4, 2, 8], vec![5, 3, 6]],
            vec![vec![3, 2, 4], vec![2, 3, 2]],
            vec![5, 5],
        )
        .expect("valid instance")
    }

    fn short_config() -> SaConfig {
        SaConfig::default()
            .with_initial_temperature(50.0)
            .with_cooling_rate(0.9)
            .with_min_temperature(0.01)
            .with_iterations_per_temperature(20)
    }

    #[test]
    fn test_anneal_finds_optimum_of_tiny_instance() {
        let instance = small_instance();
        let result = AnnealingSearch::new(&instance, short_config().with_seed(42))
            .expect("driver construction")
            .solve();

        // exhaustive check over the 8 assignments: [0, 0, 1] at cost 12
        assert_eq!(result.best_objective, 12);
        assert_eq!(result.best.assignment(), &[0, 0, 1]);
        assert!(result.best.is_feasible());
    }

    #[test]
    fn test_trace_covers_every_temperature_step() {
        let instance = small_instance();
        let config = short_config().with_seed(7);
        let iterations_per_step = config.iterations_per_temperature;
        let result = AnnealingSearch::new(&instance, config)
            .expect("driver construction")
            .solve();

        // one record per step plus the initial sample
        assert_eq!(
            result.iterations,
            (result.trace.len() - 1) * iterations_per_step
        );
        for (step, record) in result.trace.iter().enumerate() {
            assert_eq!(record.iteration, step);
            assert!(record.best_objective <= record.current_objective);
        }
        assert_eq!(
            result.trace[0].current_objective,
            result.trace[0].best_objective
        );
    }

    #[test]
    fn test_best_objective_is_monotone_in_trace() {
        let instance = small_instance();
        let result = AnnealingSearch::new(&instance, short_config().with_seed(11))
            .expect("driver construction")
            .solve();

        for window in result.trace.windows(2) {
            assert!(
                window[1].best_objective <= window[0].best_objective,
                "best objective worsened: {} > {}",
                window[1].best_objective,
                window[0].best_objective
            );
        }
        assert_eq!(
            result.best_objective,
            result.trace.last().unwrap().best_objective
        );
    }

    #[test]
    fn test_stops_at_temperature_floor() {
        let instance = small_instance();
        let config = short_config().with_seed(3);
        let floor = config.min_temperature;
        let result = AnnealingSearch::new(&instance, config)
            .expect("driver construction")
            .solve();

        assert!(result.final_temperature <= floor);
        assert!(result.final_temperature > 0.0);
    }

    #[test]
    fn test_accepted_counts_dominate_improving() {
        let instance = small_instance();
        let result = AnnealingSearch::new(&instance, short_config().with_seed(5))
            .expect("driver construction")
            .solve();

        assert!(result.accepted_moves >= result.improving_moves);
        assert!(result.accepted_moves <= result.iterations);
        assert!(result.improving_moves > 0);
    }

    #[test]
    fn test_high_temperature_accepts_nearly_everything() {
        let instance = small_instance();
        // temperature stays enormous relative to any possible delta
        let config = SaConfig::default()
            .with_initial_temperature(1e8)
            .with_min_temperature(1e7)
            .with_cooling_rate(0.5)
            .with_iterations_per_temperature(200)
            .with_seed(42);
        let result = AnnealingSearch::new(&instance, config)
            .expect("driver construction")
            .solve();

        let acceptance_ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance_ratio > 0.8,
            "expected high acceptance at high temperature, got {acceptance_ratio}"
        );
    }

    #[test]
    fn test_same_seed_reproduces_run() {
        let instance = small_instance();
        let config = short_config().with_seed(99);

        let first = AnnealingSearch::new(&instance, config.clone())
            .expect("driver construction")
            .solve();
        let second = AnnealingSearch::new(&instance, config)
            .expect("driver construction")
            .solve();

        assert_eq!(first.best_objective, second.best_objective);
        assert_eq!(first.best.assignment(), second.best.assignment());
        assert_eq!(first.accepted_moves, second.accepted_moves);
        assert_eq!(first.trace, second.trace);
    }

    #[test]
    fn test_rejects_single_agent_instance() {
        let instance = GapInstance::new(1, 2, vec![vec![3, 4]], vec![vec![2, 2]], vec![10])
            .expect("valid instance");
        let result = AnnealingSearch::new(&instance, SaConfig::default());
        assert!(matches!(result, Err(GapError::DegenerateInstance(_))));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let instance = small_instance();
        let config = SaConfig::default().with_cooling_rate(1.5);
        let result = AnnealingSearch::new(&instance, config);
        assert!(matches!(result, Err(GapError::InvalidConfig(_))));
    }
}
