use crate::search::{OperatorId, State, Task};

/// Generates the applicable operators of a state and constructs successor
/// states.
#[derive(Debug, Default)]
pub struct SuccessorGenerator {}

impl SuccessorGenerator {
    pub fn new() -> Self {
        Self {}
    }

    pub fn applicable_operators(&self, state: &State, task: &Task) -> Vec<OperatorId> {
        task.operators
            .iter()
            .enumerate()
            .filter(|(_, operator)| operator.is_applicable(state))
            .map(|(index, _)| OperatorId::new(index))
            .collect()
    }

    pub fn generate_successor(&self, state: &State, op: OperatorId, task: &Task) -> State {
        let mut values = state.values().to_vec();
        for effect in &task.operator(op).effects {
            values[effect.variable] = effect.value;
        }
        State::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Task;
    use crate::test_utils::*;

    #[test]
    fn applicable_operators_respect_preconditions() {
        let task = Task::from_text(GRIPPER_TASK_TEXT).unwrap();
        let generator = SuccessorGenerator::new();

        // In the initial state the robot is at a and the ball is at a, so it
        // can move to b or pick the ball up.
        let applicable = generator.applicable_operators(&task.initial_state, &task);
        let names: Vec<&str> = applicable
            .iter()
            .map(|&op| task.operator(op).name.as_str())
            .collect();
        assert_eq!(names, vec!["move-a-b", "pick-a"]);
    }

    #[test]
    fn successor_applies_all_effects() {
        let task = Task::from_text(GRIPPER_TASK_TEXT).unwrap();
        let generator = SuccessorGenerator::new();

        // pick-a holds the ball and empties nothing else
        let successor =
            generator.generate_successor(&task.initial_state, OperatorId::new(2), &task);
        assert_eq!(successor.value(1), 2);
        assert_eq!(successor.value(2), 1);
        // the original state is untouched
        assert_eq!(task.initial_state.value(1), 0);
    }
}
