//! Recency memory for reassignment moves.

/// Dense `(task, agent)` table of expiry iterations.
///
/// Stamping a move forbids re-applying it until the stored iteration has
/// passed; the table is the search's short-term memory and is what keeps
/// the trajectory from cycling back through recent assignments.
#[derive(Debug, Clone)]
pub struct TabuTable {
    num_agents: usize,
    /// `expiry[task * num_agents + agent]`, all zero at the start.
    expiry: Vec<usize>,
}

impl TabuTable {
    /// Creates an empty table for a `num_tasks` × `num_agents` instance.
    pub fn new(num_tasks: usize, num_agents: usize) -> Self {
        Self {
            num_agents,
            expiry: vec![0; num_tasks * num_agents],
        }
    }

    /// Whether moving `task` onto `agent` is allowed at `iteration`.
    ///
    /// A move is allowed once its expiry iteration lies strictly in the
    /// past. Entries start at 0, so at iteration 0 every move is still
    /// formally forbidden and the first acceptance flows through the
    /// aspiration or fallback rule of the search.
    #[inline]
    pub fn allows(&self, task: usize, agent: usize, iteration: usize) -> bool {
        self.expiry[task * self.num_agents + agent] < iteration
    }

    /// Forbids moving `task` onto `agent` until iteration `until` has
    /// passed.
    #[inline]
    pub fn forbid(&mut self, task: usize, agent: usize, until: usize) {
        self.expiry[task * self.num_agents + agent] = until;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_table_forbids_iteration_zero_only() {
        let table = TabuTable::new(3, 2);
        for task in 0..3 {
            for agent in 0..2 {
                assert!(!table.allows(task, agent, 0));
                assert!(table.allows(task, agent, 1));
            }
        }
    }

    #[test]
    fn test_forbid_blocks_through_the_stamped_iteration() {
        let mut table = TabuTable::new(3, 2);
        table.forbid(1, 0, 10);

        assert!(!table.allows(1, 0, 5));
        assert!(!table.allows(1, 0, 10));
        assert!(table.allows(1, 0, 11));

        // other cells are untouched
        assert!(table.allows(1, 1, 5));
        assert!(table.allows(0, 0, 5));
    }

    #[test]
    fn test_restamping_extends_the_expiry() {
        let mut table = TabuTable::new(2, 2);
        table.forbid(0, 1, 3);
        assert!(table.allows(0, 1, 4));

        table.forbid(0, 1, 8);
        assert!(!table.allows(0, 1, 4));
        assert!(table.allows(0, 1, 9));
    }
}
