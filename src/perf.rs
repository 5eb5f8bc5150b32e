//! Per-iteration search trace records.

use std::fmt;
use std::str::FromStr;

use crate::error::GapError;

/// One sampled point of a search trajectory: the iteration (or
/// generation, or temperature step) together with the objective of the
/// current solution and of the best solution found so far.
///
/// Records render as three space-delimited integers, and parse back from
/// either space- or comma-delimited text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerfRecord {
    /// Zero-based iteration the sample was taken at.
    pub iteration: usize,
    /// Objective of the solution the search currently sits on.
    pub current_objective: i64,
    /// Objective of the best solution seen up to this iteration.
    pub best_objective: i64,
}

impl PerfRecord {
    /// Creates a record for one trace point.
    pub fn new(iteration: usize, current_objective: i64, best_objective: i64) -> Self {
        Self {
            iteration,
            current_objective,
            best_objective,
        }
    }
}

impl fmt::Display for PerfRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.iteration, self.current_objective, self.best_objective
        )
    }
}

impl FromStr for PerfRecord {
    type Err = GapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s
            .split(|c: char| c == ' ' || c == ',')
            .filter(|field| !field.is_empty());
        let mut next = |name: &str| {
            fields
                .next()
                .ok_or_else(|| GapError::MalformedInput(format!("missing {name} field in {s:?}")))
        };

        let iteration = next("iteration")?
            .parse::<usize>()
            .map_err(|e| GapError::MalformedInput(format!("bad iteration in {s:?}: {e}")))?;
        let current_objective = next("current objective")?
            .parse::<i64>()
            .map_err(|e| GapError::MalformedInput(format!("bad current objective in {s:?}: {e}")))?;
        let best_objective = next("best objective")?
            .parse::<i64>()
            .map_err(|e| GapError::MalformedInput(format!("bad best objective in {s:?}: {e}")))?;

        if fields.next().is_some() {
            return Err(GapError::MalformedInput(format!(
                "trailing fields in {s:?}"
            )));
        }
        Ok(Self {
            iteration,
            current_objective,
            best_objective,
        })
    }
}
