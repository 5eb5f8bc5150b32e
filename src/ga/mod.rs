//! Genetic algorithm driver.
//!
//! A population of assignment vectors evolves under tournament
//! selection, single-point crossover on the task axis, and sparse
//! per-task mutation; parents and offspring merge each generation and
//! an elitist truncation keeps the best [`GaConfig::population_size`]
//! individuals. Infeasible assignments stay in the gene pool — the
//! capacity penalty in the objective does the culling.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, tournament
//!   size, mutation rate, penalty factor)
//! - [`GeneticSearch`]: Executes the evolutionary loop
//! - [`GaResult`]: Final result with the per-generation trace
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Chu & Beasley (1997), *A Genetic Algorithm for the Generalised
//!   Assignment Problem*

mod config;
mod runner;

pub use config::GaConfig;
pub use runner::{GaResult, GeneticSearch};
