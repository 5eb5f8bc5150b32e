//! Single-task reassignment neighborhood shared by the local-search
//! drivers.

use rand::Rng;

use crate::solution::GapSolution;

/// A neighboring solution together with the move that produced it.
///
/// Tabu search uses `task` and `agent` to index its recency table; the
/// annealer only looks at the solution.
#[derive(Debug, Clone)]
pub struct Neighbor<'a> {
    /// The neighboring solution, objective already recomputed.
    pub solution: GapSolution<'a>,
    /// Task that was moved.
    pub task: usize,
    /// Agent the task was moved onto.
    pub agent: usize,
}

/// Clones `base` and moves one uniformly chosen task onto a different
/// uniformly chosen agent, recomputing the objective with
/// `penalty_factor`.
///
/// The target agent is resampled until it differs from the task's
/// current agent, so the instance must have at least two agents; the
/// drivers reject single-agent instances at construction.
pub fn random_reassignment<'a, R: Rng>(
    base: &GapSolution<'a>,
    penalty_factor: i64,
    rng: &mut R,
) -> Neighbor<'a> {
    let instance = base.instance();
    debug_assert!(instance.num_agents() >= 2);

    let task = rng.random_range(0..instance.num_tasks());
    let current = base.assigned_agent(task);
    let mut agent = rng.random_range(0..instance.num_agents());
    while agent == current {
        agent = rng.random_range(0..instance.num_agents());
    }

    let mut solution = base.clone();
    solution.reassign(task, agent);
    solution.recompute_objective(penalty_factor);
    Neighbor {
        solution,
        task,
        agent,
    }
}
