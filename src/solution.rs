//! Mutable assignment vector with incremental objective maintenance.
//!
//! [`GapSolution`] is the representation every search driver mutates. It
//! keeps the per-agent consumed capacity in sync on every single-task
//! [`reassign`](GapSolution::reassign) (O(1)), while the two cost terms
//! are refreshed by an explicit
//! [`recompute_objective`](GapSolution::recompute_objective) so callers
//! can batch several reassignments (crossover, mutation sweeps) under a
//! single recompute.

use rand::Rng;

use crate::instance::GapInstance;

/// A candidate assignment of tasks to agents.
///
/// The objective decomposes as `assignment_cost + capacity_penalty`, where
/// the penalty is `penalty_factor · Σ_a max(0, consumed(a) − capacity(a))`.
/// Infeasible assignments are representable on purpose; the penalty steers
/// the search back toward feasibility.
///
/// Cloning produces a deep copy of the assignment and consumed-capacity
/// state that shares the same [`GapInstance`] reference; mutating the
/// clone never affects the original.
#[derive(Debug, Clone)]
pub struct GapSolution<'a> {
    instance: &'a GapInstance,
    /// `assignment[task]` is the agent the task is currently placed on.
    assignment: Vec<usize>,
    /// Per-agent resource usage, kept in sync by `reassign`.
    consumed: Vec<i64>,
    assignment_cost: i64,
    capacity_penalty: i64,
    objective: i64,
}

impl<'a> GapSolution<'a> {
    /// Creates a solution with every task placed on agent 0 and the
    /// consumed capacities matching that placement.
    ///
    /// The cost terms stay zero until the first
    /// [`recompute_objective`](Self::recompute_objective); drivers follow
    /// construction with [`initialize`](Self::initialize) and a recompute.
    pub fn new(instance: &'a GapInstance) -> Self {
        let num_tasks = instance.num_tasks();
        let mut consumed = vec![0; instance.num_agents()];
        consumed[0] = (0..num_tasks).map(|task| instance.resource(0, task)).sum();
        Self {
            instance,
            assignment: vec![0; num_tasks],
            consumed,
            assignment_cost: 0,
            capacity_penalty: 0,
            objective: 0,
        }
    }

    /// Reassigns every task to an agent drawn uniformly at random,
    /// updating the consumed capacities as each assignment lands.
    ///
    /// Cost terms are not touched; call
    /// [`recompute_objective`](Self::recompute_objective) afterwards.
    pub fn initialize<R: Rng>(&mut self, rng: &mut R) {
        self.consumed.fill(0);
        let num_agents = self.instance.num_agents();
        for task in 0..self.assignment.len() {
            let agent = rng.random_range(0..num_agents);
            self.assignment[task] = agent;
            self.consumed[agent] += self.instance.resource(agent, task);
        }
    }

    /// Moves `task` onto `new_agent`, updating both agents' consumed
    /// capacity in O(1).
    ///
    /// The cost terms are left stale so callers can batch several moves
    /// under one [`recompute_objective`](Self::recompute_objective).
    /// Reassigning a task to the agent it is already on is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `task` or `new_agent` is out of range.
    pub fn reassign(&mut self, task: usize, new_agent: usize) {
        let old_agent = self.assignment[task];
        self.consumed[old_agent] -= self.instance.resource(old_agent, task);
        self.consumed[new_agent] += self.instance.resource(new_agent, task);
        self.assignment[task] = new_agent;
    }

    /// Recomputes `assignment_cost`, `capacity_penalty`, and `objective`
    /// from the assignment vector and the incrementally maintained
    /// consumed capacities. O(num_tasks + num_agents).
    pub fn recompute_objective(&mut self, penalty_factor: i64) {
        self.assignment_cost = self
            .assignment
            .iter()
            .enumerate()
            .map(|(task, &agent)| self.instance.cost(agent, task))
            .sum();
        let overflow: i64 = self
            .consumed
            .iter()
            .enumerate()
            .map(|(agent, &used)| (used - self.instance.capacity(agent)).max(0))
            .sum();
        self.capacity_penalty = penalty_factor * overflow;
        self.objective = self.assignment_cost + self.capacity_penalty;
    }

    /// Total objective: assignment cost plus capacity penalty, as of the
    /// last [`recompute_objective`](Self::recompute_objective).
    #[inline]
    pub fn objective(&self) -> i64 {
        self.objective
    }

    /// Sum of assignment costs, as of the last recompute.
    #[inline]
    pub fn assignment_cost(&self) -> i64 {
        self.assignment_cost
    }

    /// Penalized capacity overflow, as of the last recompute.
    #[inline]
    pub fn capacity_penalty(&self) -> i64 {
        self.capacity_penalty
    }

    /// Agent that `task` is currently assigned to.
    #[inline]
    pub fn assigned_agent(&self, task: usize) -> usize {
        self.assignment[task]
    }

    /// The full task-to-agent assignment vector.
    #[inline]
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// Resource units currently consumed on `agent`.
    #[inline]
    pub fn consumed_capacity(&self, agent: usize) -> i64 {
        self.consumed[agent]
    }

    /// Per-agent consumed capacities.
    #[inline]
    pub fn consumed(&self) -> &[i64] {
        &self.consumed
    }

    /// The instance this solution assigns.
    #[inline]
    pub fn instance(&self) -> &'a GapInstance {
        self.instance
    }

    /// Whether no agent exceeds its capacity. Equivalent to a zero
    /// capacity penalty after a recompute.
    pub fn is_feasible(&self) -> bool {
        self.consumed
            .iter()
            .enumerate()
            .all(|(agent, &used)| used <= self.instance.capacity(agent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GapError;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_instance() -> GapInstance {
        GapInstance::new(
            2,
            3,
            vec![vec![4, 2, 8], vec![5, 3, 6]],
            vec![vec![3, 2, 4], vec![2, 3, 2]],
            vec![5, 5],
        )
        .expect("valid instance")
    }

    /// Recomputes objective and consumed capacities from nothing but the
    /// assignment vector, for cross-checking the incremental bookkeeping.
    fn from_scratch(solution: &GapSolution<'_>, penalty_factor: i64) -> (i64, Vec<i64>) {
        let instance = solution.instance();
        let mut consumed = vec![0i64; instance.num_agents()];
        let mut cost = 0i64;
        for (task, &agent) in solution.assignment().iter().enumerate() {
            consumed[agent] += instance.resource(agent, task);
            cost += instance.cost(agent, task);
        }
        let overflow: i64 = consumed
            .iter()
            .enumerate()
            .map(|(agent, &used)| (used - instance.capacity(agent)).max(0))
            .sum();
        (cost + penalty_factor * overflow, consumed)
    }

    #[test]
    fn test_new_starts_consistent() {
        let instance = small_instance();
        let solution = GapSolution::new(&instance);
        // all tasks on agent 0: resources 3 + 2 + 4
        assert_eq!(solution.assignment(), &[0, 0, 0]);
        assert_eq!(solution.consumed(), &[9, 0]);
        let (_, consumed) = from_scratch(&solution, 1000);
        assert_eq!(solution.consumed(), consumed.as_slice());
    }

    #[test]
    fn test_initialize_populates_assignment_and_capacity() {
        let instance = small_instance();
        let mut rng = StdRng::seed_from_u64(42);
        let mut solution = GapSolution::new(&instance);
        solution.initialize(&mut rng);

        for &agent in solution.assignment() {
            assert!(agent < instance.num_agents());
        }
        let (_, consumed) = from_scratch(&solution, 1000);
        assert_eq!(solution.consumed(), consumed.as_slice());
    }

    #[test]
    fn test_reassign_moves_resource_between_agents() {
        let instance = small_instance();
        let mut solution = GapSolution::new(&instance);

        // task 0 moves from agent 0 (resource 3) to agent 1 (resource 2)
        solution.reassign(0, 1);
        assert_eq!(solution.assigned_agent(0), 1);
        assert_eq!(solution.consumed_capacity(0), 6);
        assert_eq!(solution.consumed_capacity(1), 2);

        solution.recompute_objective(1000);
        // costs: 5 (task 0 on agent 1) + 2 + 8; agent 0 overflows by 1
        assert_eq!(solution.assignment_cost(), 15);
        assert_eq!(solution.capacity_penalty(), 1000);
        assert_eq!(solution.objective(), 1015);

        let (objective, consumed) = from_scratch(&solution, 1000);
        assert_eq!(solution.objective(), objective);
        assert_eq!(solution.consumed(), consumed.as_slice());
    }

    #[test]
    fn test_reassign_to_same_agent_is_noop() {
        let instance = small_instance();
        let mut solution = GapSolution::new(&instance);
        solution.recompute_objective(1000);
        let before_consumed = solution.consumed().to_vec();
        let before_objective = solution.objective();

        solution.reassign(1, 0);
        solution.recompute_objective(1000);
        assert_eq!(solution.consumed(), before_consumed.as_slice());
        assert_eq!(solution.objective(), before_objective);
    }

    #[test]
    fn test_batched_reassigns_then_single_recompute() {
        let instance = small_instance();
        let mut rng = StdRng::seed_from_u64(7);
        let mut solution = GapSolution::new(&instance);
        solution.initialize(&mut rng);

        solution.reassign(0, 1);
        solution.reassign(2, 1);
        solution.reassign(0, 0);
        solution.recompute_objective(1000);

        let (objective, consumed) = from_scratch(&solution, 1000);
        assert_eq!(solution.objective(), objective);
        assert_eq!(solution.consumed(), consumed.as_slice());
        assert_eq!(
            solution.objective(),
            solution.assignment_cost() + solution.capacity_penalty()
        );
    }

    #[test]
    fn test_clone_is_deep_and_shares_instance() {
        let instance = small_instance();
        let mut rng = StdRng::seed_from_u64(3);
        let mut original = GapSolution::new(&instance);
        original.initialize(&mut rng);
        original.recompute_objective(1000);

        let mut copy = original.clone();
        assert_eq!(copy.objective(), original.objective());
        assert_eq!(copy.assignment(), original.assignment());
        assert!(std::ptr::eq(copy.instance(), original.instance()));

        let before_assignment = original.assignment().to_vec();
        let before_consumed = original.consumed().to_vec();
        let before_objective = original.objective();

        let new_agent = 1 - copy.assigned_agent(0);
        copy.reassign(0, new_agent);
        copy.recompute_objective(1000);

        assert_eq!(original.assignment(), before_assignment.as_slice());
        assert_eq!(original.consumed(), before_consumed.as_slice());
        assert_eq!(original.objective(), before_objective);
    }

    #[test]
    fn test_feasibility_tracks_penalty() {
        let instance = small_instance();
        let mut solution = GapSolution::new(&instance);

        // tasks 0, 1 on agent 0 (3 + 2 = 5 <= 5), task 2 on agent 1 (2 <= 5)
        solution.reassign(2, 1);
        solution.recompute_objective(1000);
        assert!(solution.is_feasible());
        assert_eq!(solution.capacity_penalty(), 0);

        // everything back on agent 0 overflows it by 4
        solution.reassign(2, 0);
        solution.recompute_objective(1000);
        assert!(!solution.is_feasible());
        assert_eq!(solution.capacity_penalty(), 4000);
    }

    #[test]
    fn test_error_type_is_exported_for_construction_failures() {
        let result = GapInstance::new(1, 1, vec![vec![-1]], vec![vec![1]], vec![1]);
        assert!(matches!(result, Err(GapError::InvalidInstance(_))));
    }

    fn instance_and_moves() -> impl Strategy<
        Value = (
            usize,
            usize,
            Vec<Vec<i64>>,
            Vec<Vec<i64>>,
            Vec<i64>,
            Vec<(usize, usize)>,
        ),
    > {
        (2usize..5, 1usize..8).prop_flat_map(|(num_agents, num_tasks)| {
            (
                Just(num_agents),
                Just(num_tasks),
                prop::collection::vec(prop::collection::vec(0i64..50, num_tasks), num_agents),
                prop::collection::vec(prop::collection::vec(0i64..20, num_tasks), num_agents),
                prop::collection::vec(0i64..40, num_agents),
                prop::collection::vec((0..num_tasks, 0..num_agents), 0..24),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_incremental_state_matches_scratch(
            (num_agents, num_tasks, costs, resources, capacities, moves) in instance_and_moves()
        ) {
            let instance = GapInstance::new(num_agents, num_tasks, costs, resources, capacities)
                .expect("generated instance is valid");
            let mut rng = StdRng::seed_from_u64(11);
            let mut solution = GapSolution::new(&instance);
            solution.initialize(&mut rng);

            for &(task, agent) in &moves {
                solution.reassign(task, agent);
                let (_, consumed) = from_scratch(&solution, 1000);
                prop_assert_eq!(solution.consumed(), consumed.as_slice());
            }

            solution.recompute_objective(1000);
            let (objective, consumed) = from_scratch(&solution, 1000);
            prop_assert_eq!(solution.objective(), objective);
            prop_assert_eq!(solution.consumed(), consumed.as_slice());
        }
    }
}
