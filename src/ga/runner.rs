//! GA evolutionary loop execution.
//!
//! [`GeneticSearch`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → elitist truncation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::GaConfig;
use crate::error::GapError;
use crate::instance::GapInstance;
use crate::perf::PerfRecord;
use crate::solution::GapSolution;

/// Result of a genetic search run.
///
/// Contains the best solution found, along with the per-generation trace
/// of the evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult<'a> {
    /// The best solution found during the entire run.
    pub best: GapSolution<'a>,

    /// Objective of the best solution (same as `best.objective()`).
    pub best_objective: i64,

    /// Number of generations executed.
    pub generations: usize,

    /// One record per generation: the population mean objective and the
    /// best objective seen so far.
    pub trace: Vec<PerfRecord>,
}

/// Evolutionary search over assignment vectors.
///
/// Parents are chosen by tournament, recombined by single-point
/// crossover on the task axis, and occasionally mutated task-by-task;
/// parents and offspring then compete in an elitist truncation back to
/// the configured population size.
///
/// # Usage
///
/// ```
/// use gap_metaheur::ga::{GaConfig, GeneticSearch};
/// use gap_metaheur::instance::GapInstance;
///
/// let instance = GapInstance::new(
///     2,
///     3,
///     vec![vec![4, 2, 8], vec![5, 3, 6]],
///     vec![vec![3, 2, 4], vec![2, 3, 2]],
///     vec![5, 5],
/// )?;
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(50)
///     .with_seed(42);
/// let result = GeneticSearch::new(&instance, config)?.solve();
/// assert!(result.best.is_feasible());
/// # Ok::<(), gap_metaheur::error::GapError>(())
/// ```
pub struct GeneticSearch<'a> {
    instance: &'a GapInstance,
    config: GaConfig,
    rng: StdRng,
}

impl<'a> GeneticSearch<'a> {
    /// Creates a driver for `instance` with the given configuration.
    ///
    /// # Errors
    ///
    /// [`GapError::InvalidConfig`] if the configuration fails
    /// [`GaConfig::validate`]; [`GapError::DegenerateInstance`] if the
    /// instance has fewer than two tasks (single-point crossover needs a
    /// cut strictly inside the task axis).
    pub fn new(instance: &'a GapInstance, config: GaConfig) -> Result<Self, GapError> {
        config.validate().map_err(GapError::InvalidConfig)?;
        if instance.num_tasks() < 2 {
            return Err(GapError::DegenerateInstance(
                "genetic search needs at least 2 tasks for crossover".into(),
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

    /// Runs the evolutionary loop for the configured number of
    /// generations and returns the best solution found.
    pub fn solve(mut self) -> GaResult<'a> {
        let penalty_factor = self.config.penalty_factor;

        // 1. Random initial population
        let mut population: Vec<GapSolution<'a>> = (0..self.config.population_size)
            .map(|_| {
                let mut solution = GapSolution::new(self.instance);
                solution.initialize(&mut self.rng);
                solution.recompute_objective(penalty_factor);
                solution
            })
            .collect();

        let mut best = population[best_index(&population)].clone();
        let mut trace = Vec::with_capacity(self.config.max_generations);

        for generation in 0..self.config.max_generations {
            // 2. Refresh the running best, then sample the trace
            let generation_best = best_index(&population);
            if population[generation_best].objective() < best.objective() {
                best = population[generation_best].clone();
            }
            trace.push(PerfRecord::new(
                generation,
                mean_objective(&population),
                best.objective(),
            ));

            // 3. Offspring (pairs; one extra tolerated when the size is odd)
            let mut offspring = Vec::with_capacity(self.config.population_size + 1);
            while offspring.len() < self.config.population_size {
                let first = tournament(&population, self.config.tournament_size, &mut self.rng);
                let second = tournament(&population, self.config.tournament_size, &mut self.rng);
                let (child_a, child_b) = crossover(
                    &population[first],
                    &population[second],
                    penalty_factor,
                    &mut self.rng,
                );
                offspring.push(child_a);
                offspring.push(child_b);
            }

            // 4. Mutation
            for child in &mut offspring {
                if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
                    mutate(
                        child,
                        self.config.mutation_rate / 2.0,
                        penalty_factor,
                        &mut self.rng,
                    );
                }
            }

            // 5. Elitist truncation over parents + offspring
            population.append(&mut offspring);
            population.sort_by_key(|solution| solution.objective());
            population.truncate(self.config.population_size);
        }

        // Last generation's offspring are not in the trace loop; refresh once more
        let final_best = best_index(&population);
        if population[final_best].objective() < best.objective() {
            best = population[final_best].clone();
        }

        GaResult {
            best_objective: best.objective(),
            best,
            generations: self.config.max_generations,
            trace,
        }
    }
}

/// Index of the winner of a `size`-way tournament: uniform samples with
/// replacement, lowest objective wins.
fn tournament<R: Rng>(population: &[GapSolution<'_>], size: usize, rng: &mut R) -> usize {
    let mut winner = rng.random_range(0..population.len());
    for _ in 1..size {
        let challenger = rng.random_range(0..population.len());
        if population[challenger].objective() < population[winner].objective() {
            winner = challenger;
        }
    }
    winner
}

/// Single-point crossover: both children copy one parent and take the
/// other parent's assignments from the cut onward, then recompute.
///
/// The cut is drawn from `[1, num_tasks)`, so each child keeps at least
/// one task from each parent.
fn crossover<'a, R: Rng>(
    first: &GapSolution<'a>,
    second: &GapSolution<'a>,
    penalty_factor: i64,
    rng: &mut R,
) -> (GapSolution<'a>, GapSolution<'a>) {
    let num_tasks = first.instance().num_tasks();
    let cut = rng.random_range(1..num_tasks);

    let mut child_a = first.clone();
    let mut child_b = second.clone();
    for task in cut..num_tasks {
        child_a.reassign(task, second.assigned_agent(task));
        child_b.reassign(task, first.assigned_agent(task));
    }
    child_a.recompute_objective(penalty_factor);
    child_b.recompute_objective(penalty_factor);
    (child_a, child_b)
}

/// Reassigns each task with probability `per_task_rate` to a uniformly
/// random agent (possibly the one it is already on), then recomputes.
fn mutate<R: Rng>(
    solution: &mut GapSolution<'_>,
    per_task_rate: f64,
    penalty_factor: i64,
    rng: &mut R,
) {
    let instance = solution.instance();
    for task in 0..instance.num_tasks() {
        if rng.random_range(0.0..1.0) < per_task_rate {
            let agent = rng.random_range(0..instance.num_agents());
            solution.reassign(task, agent);
        }
    }
    solution.recompute_objective(penalty_factor);
}

/// Index of the solution with the lowest objective (first on ties).
fn best_index(population: &[GapSolution<'_>]) -> usize {
    population
        .iter()
        .enumerate()
        .min_by_key(|(_, solution)| solution.objective())
        .map(|(index, _)| index)
        .expect("population must not be empty")
}

/// Population mean objective, truncated toward zero.
fn mean_objective(population: &[GapSolution<'_>]) -> i64 {
    let sum: i64 = population.iter().map(|solution| solution.objective()).sum();
    (sum as f64 / population.len() as f64) as i64
}
