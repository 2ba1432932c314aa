use crate::search::{Fact, HeuristicValue, OperatorId, Task};

/// Per-(variable, value, evaluator) table of the best evaluator value seen
/// over any state containing that fact. `None` means no observation yet.
///
/// Entries are monotone non-increasing once initialized: [`improve`] only
/// overwrites an entry with a strictly smaller value.
///
/// [`improve`]: NoveltyTable::improve
#[derive(Debug)]
pub struct NoveltyTable {
    /// `entries[variable][value][evaluator_index]`
    entries: Vec<Vec<Vec<Option<HeuristicValue>>>>,
}

impl NoveltyTable {
    /// Allocate one entry per (variable, value, evaluator). Sized once from
    /// the task's variable list, never resized.
    pub fn new(task: &Task, num_evaluators: usize) -> Self {
        let entries = task
            .variables
            .iter()
            .map(|variable| vec![vec![None; num_evaluators]; variable.domain_size()])
            .collect();
        Self { entries }
    }

    pub fn get(&self, fact: &Fact, evaluator_index: usize) -> Option<HeuristicValue> {
        self.entries[fact.variable][fact.value][evaluator_index]
    }

    /// Record `value` for `fact` under the given evaluator if it improves on
    /// the stored entry, i.e. if the entry is unseen or strictly greater.
    /// Returns the previous entry, from which the caller can tell whether
    /// the fact was novel.
    pub fn improve(
        &mut self,
        fact: &Fact,
        evaluator_index: usize,
        value: HeuristicValue,
    ) -> Option<HeuristicValue> {
        let entry = &mut self.entries[fact.variable][fact.value][evaluator_index];
        let previous = *entry;
        if previous.map_or(true, |p| p > value) {
            *entry = Some(value);
        }
        previous
    }
}

/// Per-(operator, evaluator) record of the best evaluator value observed
/// when the operator was last used to reach a state. Same monotone-min
/// update rule as [`NoveltyTable`], applied per operator instead of per
/// fact.
///
/// Only allocated when the heuristic both emits preferred operators and
/// uses a per-operator cutoff policy.
#[derive(Debug)]
pub struct OperatorValueTable {
    /// `entries[operator_index][evaluator_index]`
    entries: Vec<Vec<Option<HeuristicValue>>>,
}

impl OperatorValueTable {
    pub fn new(task: &Task, num_evaluators: usize) -> Self {
        Self {
            entries: vec![vec![None; num_evaluators]; task.num_operators()],
        }
    }

    pub fn get(&self, op: OperatorId, evaluator_index: usize) -> Option<HeuristicValue> {
        self.entries[op.index()][evaluator_index]
    }

    /// Record `value` for `op` if the stored entry is unseen or strictly
    /// greater.
    pub fn improve(&mut self, op: OperatorId, evaluator_index: usize, value: HeuristicValue) {
        let entry = &mut self.entries[op.index()][evaluator_index];
        if entry.map_or(true, |p| p > value) {
            *entry = Some(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn table() -> NoveltyTable {
        let task = Task::from_text(SWITCH_TASK_TEXT).unwrap();
        NoveltyTable::new(&task, 2)
    }

    #[test]
    fn starts_unseen() {
        let table = table();
        assert_eq!(table.get(&Fact::new(0, 0), 0), None);
        assert_eq!(table.get(&Fact::new(0, 1), 1), None);
    }

    #[test]
    fn improve_is_monotone_non_increasing() {
        let mut table = table();
        let fact = Fact::new(0, 0);

        // first observation always lands
        assert_eq!(table.improve(&fact, 0, 5), None);
        assert_eq!(table.get(&fact, 0), Some(5));

        // equal value does not rewrite
        assert_eq!(table.improve(&fact, 0, 5), Some(5));
        assert_eq!(table.get(&fact, 0), Some(5));

        // worse value does not rewrite
        assert_eq!(table.improve(&fact, 0, 9), Some(5));
        assert_eq!(table.get(&fact, 0), Some(5));

        // strictly better value does
        assert_eq!(table.improve(&fact, 0, 3), Some(5));
        assert_eq!(table.get(&fact, 0), Some(3));
    }

    #[test]
    fn entries_are_independent_per_evaluator() {
        let mut table = table();
        let fact = Fact::new(0, 1);

        table.improve(&fact, 0, 4);
        assert_eq!(table.get(&fact, 0), Some(4));
        assert_eq!(table.get(&fact, 1), None);
    }

    #[test]
    fn operator_table_follows_the_same_rule() {
        let task = Task::from_text(GRIPPER_TASK_TEXT).unwrap();
        let mut table = OperatorValueTable::new(&task, 1);
        let op = OperatorId::new(2);

        assert_eq!(table.get(op, 0), None);
        table.improve(op, 0, 7);
        assert_eq!(table.get(op, 0), Some(7));
        table.improve(op, 0, 8);
        assert_eq!(table.get(op, 0), Some(7));
        table.improve(op, 0, 2);
        assert_eq!(table.get(op, 0), Some(2));
    }
}
