//! Crate-wide error type.
//!
//! All validation happens at construction time — instance building, driver
//! setup, input parsing. The search loops themselves never return errors;
//! an invariant violation mid-run is a programming error, not a
//! recoverable condition.

use std::fmt;
use std::io;

/// Errors produced by instance construction, driver setup, and the I/O
/// helpers.
#[derive(Debug)]
pub enum GapError {
    /// Matrix dimensions disagree with the declared counts, or a
    /// cost/resource/capacity value is negative.
    ///
    /// Raised by [`GapInstance::new`](crate::instance::GapInstance::new),
    /// never at search time.
    InvalidInstance(String),

    /// The instance is too small for a driver's move structure: fewer than
    /// two agents for a search that must pick a *different* agent
    /// (annealing, tabu), or fewer than two tasks for single-point
    /// crossover.
    ///
    /// Raised by the driver constructors, before any search loop starts.
    DegenerateInstance(String),

    /// A configuration parameter is out of range.
    InvalidConfig(String),

    /// The instance or trace reader hit a non-numeric field or ran out of
    /// tokens before the declared data was complete.
    MalformedInput(String),

    /// An underlying file operation failed.
    Io(io::Error),
}

impl fmt::Display for GapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapError::InvalidInstance(msg) => write!(f, "invalid instance: {msg}"),
            GapError::DegenerateInstance(msg) => write!(f, "degenerate instance: {msg}"),
            GapError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            GapError::MalformedInput(msg) => write!(f, "malformed input: {msg}"),
            GapError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for GapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GapError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GapError {
    fn from(err: io::Error) -> Self {
        GapError::Io(err)
    }
}
