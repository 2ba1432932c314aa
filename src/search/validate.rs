use crate::search::{Plan, SuccessorGenerator, Task};
use tracing::warn;

/// Check that `plan` is applicable step by step from the initial state and
/// ends in a goal state.
pub fn validate(task: &Task, plan: &Plan) -> bool {
    let generator = SuccessorGenerator::new();
    let mut state = task.initial_state.clone();
    for &op in plan.steps() {
        if !task.operator(op).is_applicable(&state) {
            warn!("plan step {} is not applicable", task.operator(op).name);
            return false;
        }
        state = generator.generate_successor(&state, op, task);
    }
    if !task.goal.is_satisfied(&state) {
        warn!("plan does not end in a goal state");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::OperatorId;
    use crate::test_utils::*;

    #[test]
    fn accepts_a_correct_plan() {
        let task = Task::from_text(GRIPPER_TASK_TEXT).unwrap();
        // pick-a, move-a-b, drop-b
        let plan = Plan::new(vec![
            OperatorId::new(2),
            OperatorId::new(0),
            OperatorId::new(5),
        ]);
        assert!(validate(&task, &plan));
    }

    #[test]
    fn rejects_an_inapplicable_step() {
        let task = Task::from_text(GRIPPER_TASK_TEXT).unwrap();
        // dropping before picking up
        let plan = Plan::new(vec![OperatorId::new(5)]);
        assert!(!validate(&task, &plan));
    }

    #[test]
    fn rejects_a_plan_that_misses_the_goal() {
        let task = Task::from_text(GRIPPER_TASK_TEXT).unwrap();
        let plan = Plan::new(vec![OperatorId::new(0)]);
        assert!(!validate(&task, &plan));
    }
}
