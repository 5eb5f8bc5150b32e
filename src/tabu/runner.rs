//! Tabu search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate a random initial solution
//! 2. At each iteration:
//!    a. Sample a neighborhood of random reassignments
//!    b. Sort it by objective and scan: accept non-tabu candidates (stop
//!       on a new global best), or a tabu candidate through aspiration
//!    c. If nothing was accepted, fall back to the lowest-objective
//!       candidate
//!    d. Stamp every accepted move in the recency table
//! 3. Terminate on the iteration budget or stagnation

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::TabuConfig;
use super::table::TabuTable;
use crate::error::GapError;
use crate::instance::GapInstance;
use crate::neighborhood::{self, Neighbor};
use crate::perf::PerfRecord;
use crate::solution::GapSolution;

/// Result of a tabu search run.
#[derive(Debug, Clone)]
pub struct TabuResult<'a> {
    /// Best solution found.
    pub best: GapSolution<'a>,

    /// Objective of the best solution.
    pub best_objective: i64,

    /// Total iterations executed.
    pub iterations: usize,

    /// Iteration whose trace record first carried the final best
    /// objective (0 if the initial solution was never improved).
    pub best_iteration: usize,

    /// One record per iteration, plus the initial state at iteration 0.
    pub trace: Vec<PerfRecord>,
}

/// Best-admissible local search with recency memory.
///
/// Each iteration samples a fixed-size neighborhood of single-task
/// reassignments, sorts it by objective, and walks it in order: moves
/// still held in the [`TabuTable`] are skipped unless they beat the
/// global best (aspiration), admissible moves are accepted and stamped.
/// The scan stops as soon as the global best improves; if the whole
/// neighborhood is forbidden, the lowest-objective candidate is taken
/// anyway so the trajectory never stalls.
///
/// # Usage
///
/// ```
/// use gap_metaheur::instance::GapInstance;
/// use gap_metaheur::tabu::{TabuConfig, TabuSearch};
///
/// let instance = GapInstance::new(
///     2,
///     3,
///     vec![vec![4, 2, 8], vec![5, 3, 6]],
///     vec![vec![3, 2, 4], vec![2, 3, 2]],
///     vec![5, 5],
/// )?;
/// let config = TabuConfig::default()
///     .with_neighborhood_size(20)
///     .with_max_iterations(100)
///     .with_max_no_improve(50)
///     .with_seed(42);
/// let result = TabuSearch::new(&instance, config)?.solve();
/// assert!(result.iterations <= 100);
/// # Ok::<(), gap_metaheur::error::GapError>(())
/// ```
pub struct TabuSearch<'a> {
    instance: &'a GapInstance,
    config: TabuConfig,
    rng: StdRng,
}

impl<'a> TabuSearch<'a> {
    /// Creates a driver for `instance` with the given configuration.
    ///
    /// # Errors
    ///
    /// [`GapError::InvalidConfig`] if the configuration fails
    /// [`TabuConfig::validate`]; [`GapError::DegenerateInstance`] if the
    /// instance has fewer than two agents (a reassignment move needs a
    /// different agent to move to).
    pub fn new(instance: &'a GapInstance, config: TabuConfig) -> Result<Self, GapError> {
        config.validate().map_err(GapError::InvalidConfig)?;
        if instance.num_agents() < 2 {
            return Err(GapError::DegenerateInstance(
                "tabu search needs at least 2 agents to reassign between".into(),
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

    /// Runs the search until the iteration budget or the stagnation
    /// limit is hit and returns the best solution found.
    pub fn solve(mut self) -> TabuResult<'a> {
        let penalty_factor = self.config.penalty_factor;
        let tenure = self.config.tabu_tenure;

        let mut current = GapSolution::new(self.instance);
        current.initialize(&mut self.rng);
        current.recompute_objective(penalty_factor);
        let mut best = current.clone();
        let mut best_iteration = 0usize;

        let mut table = TabuTable::new(self.instance.num_tasks(), self.instance.num_agents());
        let mut iteration = 0usize;
        let mut no_improve = 0usize;

        let mut trace = Vec::with_capacity(self.config.max_iterations + 1);
        trace.push(PerfRecord::new(0, current.objective(), best.objective()));

        loop {
            let mut candidates: Vec<Neighbor<'a>> = (0..self.config.neighborhood_size)
                .map(|_| neighborhood::random_reassignment(&current, penalty_factor, &mut self.rng))
                .collect();
            // stable: equal objectives keep their sampling order
            candidates.sort_by_key(|candidate| candidate.solution.objective());

            let mut accepted = false;
            let mut improved_best = false;
            for candidate in &candidates {
                if table.allows(candidate.task, candidate.agent, iteration) {
                    current = candidate.solution.clone();
                    table.forbid(candidate.task, candidate.agent, iteration + tenure);
                    accepted = true;
                    if current.objective() < best.objective() {
                        best = current.clone();
                        improved_best = true;
                        break;
                    }
                    // keep scanning: a later admissible candidate replaces
                    // current unless a new best stops the walk first
                } else if candidate.solution.objective() < best.objective() {
                    // aspiration: a forbidden move may still claim a new best
                    current = candidate.solution.clone();
                    table.forbid(candidate.task, candidate.agent, iteration + tenure);
                    best = current.clone();
                    accepted = true;
                    improved_best = true;
                    break;
                }
            }
            if !accepted {
                // whole neighborhood forbidden without a new best; take the
                // lowest-objective candidate so the trajectory keeps moving
                let fallback = &candidates[0];
                current = fallback.solution.clone();
                table.forbid(fallback.task, fallback.agent, iteration + tenure);
            }

            iteration += 1;
            trace.push(PerfRecord::new(
                iteration,
                current.objective(),
                best.objective(),
            ));

            if improved_best {
                best_iteration = iteration;
                no_improve = 0;
            } else {
                no_improve += 1;
            }

            if iteration >= self.config.max_iterations || no_improve >= self.config.max_no_improve {
                break;
            }
        }

        TabuResult {
            best_objective: best.objective(),
            best,
            iterations: iteration,
            best_iteration,
            trace,
        }
    }
}
