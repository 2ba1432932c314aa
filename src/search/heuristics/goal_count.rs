use crate::search::{
    Heuristic, HeuristicValue, OperatorId, State, SuccessorGenerator, Task,
};

/// Counts the goal facts not satisfied by the state. As preferred operators
/// it reports the applicable operators that achieve an unsatisfied goal
/// fact.
#[derive(Debug, Default)]
pub struct GoalCount {
    generator: SuccessorGenerator,
    preferred: Vec<OperatorId>,
}

impl GoalCount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Heuristic for GoalCount {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        self.preferred.clear();

        let mut unsatisfied_goal_count = 0;
        for fact in &task.goal.facts {
            if !state.satisfies(fact) {
                unsatisfied_goal_count += 1;
            }
        }

        if unsatisfied_goal_count > 0 {
            for op in self.generator.applicable_operators(state, task) {
                let operator = task.operator(op);
                let achieves_open_goal = task
                    .goal
                    .facts
                    .iter()
                    .any(|fact| !state.satisfies(fact) && operator.achieves(fact));
                if achieves_open_goal {
                    self.preferred.push(op);
                }
            }
        }

        unsatisfied_goal_count
    }

    fn preferred_operators(&self) -> &[OperatorId] {
        &self.preferred
    }
}
