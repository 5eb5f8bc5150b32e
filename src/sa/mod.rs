//! Simulated annealing driver.
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening reassignments are accepted with
//! probability `exp(-delta / T)`, which shrinks as the temperature
//! cools geometrically, letting the walk escape local optima early and
//! converge late.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{AnnealingSearch, SaResult};
