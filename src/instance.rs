//! Problem data for the Generalized Assignment Problem.
//!
//! A [`GapInstance`] is immutable after construction and shared by
//! reference across every solution and driver derived from it. All
//! dimension and sign checks happen in [`GapInstance::new`]; the search
//! loops assume a valid instance and perform no defensive checks of
//! their own.

use crate::error::GapError;

/// An instance of the Generalized Assignment Problem.
///
/// `num_tasks` tasks must each be assigned to exactly one of `num_agents`
/// agents. Assigning task `t` to agent `a` costs `cost(a, t)` and draws
/// `resource(a, t)` units from the agent's capacity `capacity(a)`.
///
/// Matrices are agent-major (row = agent, column = task), matching the
/// text file layout read by [`crate::io::read_instances`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GapInstance {
    num_tasks: usize,
    num_agents: usize,
    costs: Vec<Vec<i64>>,
    resources: Vec<Vec<i64>>,
    capacities: Vec<i64>,
}

impl GapInstance {
    /// Builds a validated instance.
    ///
    /// # Errors
    ///
    /// Returns [`GapError::InvalidInstance`] when either count is zero,
    /// when a matrix row count or row length disagrees with the declared
    /// counts, or when any cost, resource, or capacity value is negative.
    pub fn new(
        num_agents: usize,
        num_tasks: usize,
        costs: Vec<Vec<i64>>,
        resources: Vec<Vec<i64>>,
        capacities: Vec<i64>,
    ) -> Result<Self, GapError> {
        if num_agents == 0 {
            return Err(GapError::InvalidInstance("num_agents must be positive".into()));
        }
        if num_tasks == 0 {
            return Err(GapError::InvalidInstance("num_tasks must be positive".into()));
        }
        check_matrix("cost", &costs, num_agents, num_tasks)?;
        check_matrix("resource", &resources, num_agents, num_tasks)?;
        if capacities.len() != num_agents {
            return Err(GapError::InvalidInstance(format!(
                "capacities has {} entries, expected {num_agents}",
                capacities.len()
            )));
        }
        if let Some((agent, &value)) = capacities.iter().enumerate().find(|&(_, &v)| v < 0) {
            return Err(GapError::InvalidInstance(format!(
                "negative capacity {value} for agent {agent}"
            )));
        }

        Ok(Self {
            num_tasks,
            num_agents,
            costs,
            resources,
            capacities,
        })
    }

    /// Number of tasks to assign.
    #[inline]
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Number of agents available.
    #[inline]
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    /// Cost of assigning `task` to `agent`.
    #[inline]
    pub fn cost(&self, agent: usize, task: usize) -> i64 {
        self.costs[agent][task]
    }

    /// Resource units `task` draws from `agent` when assigned to it.
    #[inline]
    pub fn resource(&self, agent: usize, task: usize) -> i64 {
        self.resources[agent][task]
    }

    /// Resource capacity of `agent`.
    #[inline]
    pub fn capacity(&self, agent: usize) -> i64 {
        self.capacities[agent]
    }
}

fn check_matrix(
    name: &str,
    matrix: &[Vec<i64>],
    num_agents: usize,
    num_tasks: usize,
) -> Result<(), GapError> {
    if matrix.len() != num_agents {
        return Err(GapError::InvalidInstance(format!(
            "{name} matrix has {} rows, expected {num_agents}",
            matrix.len()
        )));
    }
    for (agent, row) in matrix.iter().enumerate() {
        if row.len() != num_tasks {
            return Err(GapError::InvalidInstance(format!(
                "{name} row {agent} has {} entries, expected {num_tasks}",
                row.len()
            )));
        }
        if let Some((task, &value)) = row.iter().enumerate().find(|&(_, &v)| v < 0) {
            return Err(GapError::InvalidInstance(format!(
                "negative {name} {value} at agent {agent}, task {task}"
            )));
        }
    }
    Ok(())
}
