//! Tabu search driver.
//!
//! A single-solution trajectory metaheuristic that uses a recency table
//! over `(task, agent)` moves to forbid recently applied reassignments,
//! preventing cycling and pushing the walk into new regions of the
//! assignment space. A forbidden move that would improve on the best
//! solution found so far is taken anyway (aspiration).
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod table;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuSearch};
pub use table::TabuTable;
