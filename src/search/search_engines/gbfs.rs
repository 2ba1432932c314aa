//! Greedy best-first search, expanding states in order of increasing
//! heuristic value. Successors reached via an operator their parent's
//! evaluation marked preferred additionally enter a preferred frontier that
//! is popped with a boost budget.

use crate::search::search_engines::{
    NodeId, SearchEngine, SearchNodeStatus, SearchResult, SearchSpace, SearchStatistics,
    TerminationCondition,
};
use crate::search::{Heuristic, HeuristicValue, Plan, SuccessorGenerator, Task, DEAD_END};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use tracing::info;

/// Number of preferred-frontier pops granted whenever the best seen
/// heuristic value improves.
const PREFERRED_EXPANSIONS: usize = 30;

struct AlternatingPriorityQueue {
    frontier_preferred: PriorityQueue<NodeId, Reverse<HeuristicValue>>,
    frontier_regular: PriorityQueue<NodeId, Reverse<HeuristicValue>>,
    priority: usize,
}

impl AlternatingPriorityQueue {
    fn new() -> Self {
        Self {
            frontier_preferred: PriorityQueue::new(),
            frontier_regular: PriorityQueue::new(),
            priority: PREFERRED_EXPANSIONS,
        }
    }

    fn push(&mut self, node_id: NodeId, h_value: HeuristicValue, is_preferred: bool) {
        if is_preferred {
            self.frontier_preferred.push(node_id, Reverse(h_value));
        }
        self.frontier_regular.push(node_id, Reverse(h_value));
    }

    fn pop(&mut self) -> Option<NodeId> {
        if self.priority > 0 && !self.frontier_preferred.is_empty() {
            self.priority -= 1;
            Some(self.frontier_preferred.pop().unwrap().0)
        } else {
            self.frontier_regular.pop().map(|(node_id, _)| node_id)
        }
    }

    fn reset_priority(&mut self) {
        self.priority = PREFERRED_EXPANSIONS;
    }
}

/// Greedy best-first search.
#[derive(Debug, Default)]
pub struct Gbfs {}

impl Gbfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for Gbfs {
    fn search(
        &mut self,
        task: &Task,
        mut heuristic: Box<dyn Heuristic>,
        mut termination_condition: TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let generator = SuccessorGenerator::new();
        let mut statistics = SearchStatistics::new();
        let mut frontier = AlternatingPriorityQueue::new();
        let mut search_space = SearchSpace::new(task.initial_state.clone());

        let heuristic = heuristic.as_mut();
        let mut best_h = heuristic.evaluate(&task.initial_state, task);
        statistics.increment_evaluated_nodes();
        if best_h == DEAD_END {
            return (SearchResult::ProvablyUnsolvable, statistics);
        }
        let root_id = search_space.root_id();
        let root_preferred = heuristic.preferred_operators().to_vec();
        let root = search_space.get_node_mut(root_id);
        root.open(0, best_h);
        root.set_preferred_operators(root_preferred);
        frontier.push(root_id, best_h, false);

        if task.goal.is_satisfied(&task.initial_state) {
            return (SearchResult::Success(Plan::empty()), statistics);
        }

        info!(initial_heuristic_value = best_h);
        while let Some(node_id) = frontier.pop() {
            if let Some(result) = termination_condition.should_terminate() {
                statistics.log();
                return (result, statistics);
            }

            let node = search_space.get_node_mut(node_id);
            if node.get_status() == SearchNodeStatus::Closed {
                continue;
            }
            node.close();
            let g_value = node.get_g();
            let h_value = node.get_h();
            let parent_preferred = node.get_preferred_operators().to_vec();
            statistics.increment_expanded_nodes();

            let state = search_space.get_state(node_id).clone();
            if task.goal.is_satisfied(&state) {
                termination_condition.finalise();
                statistics.log();
                return (
                    SearchResult::Success(search_space.extract_plan(node_id)),
                    statistics,
                );
            }

            if h_value < best_h {
                best_h = h_value;
                frontier.reset_priority();
                info!("New best heuristic value: {}", h_value);
                statistics.log();
            }

            let applicable = generator.applicable_operators(&state, task);
            statistics.increment_generated_operators(applicable.len());
            for op in applicable {
                let successor = generator.generate_successor(&state, op, task);
                let child_id = search_space.insert_or_get_node(successor.clone(), op, node_id);
                if search_space.get_node(child_id).get_status() != SearchNodeStatus::New {
                    continue;
                }
                statistics.increment_generated_nodes();

                // The notification must precede the evaluation so that the
                // heuristic can associate the operator with the child.
                heuristic.notify_state_transition(&state, op, &successor);
                let child_h = heuristic.evaluate(&successor, task);
                statistics.increment_evaluated_nodes();
                if child_h == DEAD_END {
                    statistics.increment_dead_end_nodes();
                    search_space.get_node_mut(child_id).mark_as_dead_end();
                    continue;
                }

                let child_preferred = heuristic.preferred_operators().to_vec();
                let child = search_space.get_node_mut(child_id);
                child.open(g_value + task.operator(op).cost, child_h);
                child.set_preferred_operators(child_preferred);
                frontier.push(child_id, child_h, parent_preferred.contains(&op));
            }
        }

        termination_condition.finalise();
        statistics.log();
        (SearchResult::ProvablyUnsolvable, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::heuristics::{EvaluatorName, GoalCount, NoveltyConfig, NoveltyHeuristic};
    use crate::search::novelty::{CutoffType, NoveltyType};
    use crate::search::validate;
    use crate::test_utils::*;

    fn run(task: &Task, heuristic: Box<dyn Heuristic>) -> (SearchResult, SearchStatistics) {
        Gbfs::new().search(task, heuristic, TerminationCondition::new(None, None))
    }

    #[test]
    fn goal_count_solves_gripper() {
        let task = Task::from_text(GRIPPER_TASK_TEXT).unwrap();

        let (result, statistics) = run(&task, Box::new(GoalCount::new()));
        let SearchResult::Success(plan) = result else {
            panic!("expected a plan, got {result:?}");
        };
        assert!(validate(&task, &plan));
        assert!(statistics.expanded_nodes > 0);
    }

    #[test]
    fn novelty_heuristic_with_preferred_operators_solves_gripper() {
        let task = Task::from_text(GRIPPER_TASK_TEXT).unwrap();
        let config = NoveltyConfig {
            evals: vec![EvaluatorName::GoalCount.create()],
            novelty_type: NoveltyType::SeparateBoth,
            cutoff_type: CutoffType::Argmax,
            use_preferred_operators: true,
            seed: Some(0),
            ..Default::default()
        };
        let heuristic = NoveltyHeuristic::new(config, &task).unwrap();

        let (result, _) = run(&task, Box::new(heuristic));
        let SearchResult::Success(plan) = result else {
            panic!("expected a plan, got {result:?}");
        };
        assert!(validate(&task, &plan));
    }

    #[test]
    fn basic_novelty_without_preferred_operators_solves_the_switch() {
        let task = Task::from_text(SWITCH_TASK_TEXT).unwrap();
        let config = NoveltyConfig {
            evals: vec![EvaluatorName::Blind.create()],
            ..Default::default()
        };
        let heuristic = NoveltyHeuristic::new(config, &task).unwrap();

        let (result, _) = run(&task, Box::new(heuristic));
        let SearchResult::Success(plan) = result else {
            panic!("expected a plan, got {result:?}");
        };
        assert!(validate(&task, &plan));
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn unsolvable_task_exhausts_the_search_space() {
        let task = Task::from_text(UNSOLVABLE_TASK_TEXT).unwrap();

        let (result, _) = run(&task, Box::new(GoalCount::new()));
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
    }

    #[test]
    fn trivially_satisfied_goal_yields_an_empty_plan() {
        let text = r#"{
            "variables": [{"name": "x", "domain": ["off", "on"]}],
            "operators": [],
            "initial_state": [1],
            "goal": [[0, 1]]
        }"#;
        let task = Task::from_text(text).unwrap();

        let (result, _) = run(&task, Box::new(GoalCount::new()));
        assert_eq!(result, SearchResult::Success(Plan::empty()));
    }
}
