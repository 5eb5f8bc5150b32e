//! Metaheuristic solvers for the Generalized Assignment Problem.
//!
//! Assign each of N tasks to one of M agents, minimizing total
//! assignment cost under per-agent resource capacities. Capacity is
//! soft during the search: overloaded solutions stay representable and
//! pay `penalty_factor` per unit of overflow, so every driver can cross
//! infeasible territory on the way to a feasible optimum.
//!
//! Three independent search drivers share one solution representation:
//!
//! - **Genetic search** ([`ga`]): population-based, tournament
//!   selection, single-point crossover, elitist truncation.
//! - **Simulated annealing** ([`sa`]): single trajectory, Metropolis
//!   acceptance, geometric cooling.
//! - **Tabu search** ([`tabu`]): best-admissible neighborhood descent
//!   with a recency table and aspiration.
//!
//! # Architecture
//!
//! [`instance::GapInstance`] is the validated, immutable problem;
//! [`solution::GapSolution`] is the mutable assignment every driver
//! works on, keeping per-agent consumed capacity current on each O(1)
//! reassignment and recomputing the objective on demand so batched
//! moves pay for one evaluation. Drivers are constructed with a
//! borrowed instance and a config, run to completion with `solve()`,
//! and return their best solution plus a [`perf::PerfRecord`] trace of
//! the run. [`io`] reads multi-instance problem files and round-trips
//! trace files.
//!
//! # Example
//!
//! ```
//! use gap_metaheur::instance::GapInstance;
//! use gap_metaheur::tabu::{TabuConfig, TabuSearch};
//!
//! let instance = GapInstance::new(
//!     2,
//!     3,
//!     vec![vec![4, 2, 8], vec![5, 3, 6]],
//!     vec![vec![3, 2, 4], vec![2, 3, 2]],
//!     vec![5, 5],
//! )?;
//! let config = TabuConfig::default()
//!     .with_neighborhood_size(20)
//!     .with_max_iterations(200)
//!     .with_seed(42);
//! let result = TabuSearch::new(&instance, config)?.solve();
//! assert!(result.best.is_feasible());
//! # Ok::<(), gap_metaheur::error::GapError>(())
//! ```

pub mod error;
pub mod ga;
pub mod instance;
pub mod io;
pub mod neighborhood;
pub mod perf;
pub mod sa;
pub mod solution;
pub mod tabu;
