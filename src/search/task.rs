use crate::search::{Goal, Operator, OperatorId, State};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("failed to read task file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse task: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid task: {0}")]
    Invalid(String),
}

/// A task variable with a finite domain of named values.
#[derive(Debug, Clone, Deserialize)]
pub struct Variable {
    pub name: String,
    pub domain: Vec<String>,
}

impl Variable {
    pub fn domain_size(&self) -> usize {
        self.domain.len()
    }
}

/// A grounded FDR planning task: variables with finite domains, a flat
/// operator list, an initial state, and a goal as a partial assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub variables: Vec<Variable>,
    pub operators: Vec<Operator>,
    pub initial_state: State,
    pub goal: Goal,
}

impl Task {
    pub fn from_path(path: &Path) -> Result<Self, TaskError> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, TaskError> {
        let task: Task = serde_json::from_str(text)?;
        task.validate()?;
        info!(
            num_variables = task.variables.len(),
            num_operators = task.operators.len(),
            num_goal_facts = task.goal.facts.len(),
        );
        Ok(task)
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_operators(&self) -> usize {
        self.operators.len()
    }

    pub fn operator(&self, id: OperatorId) -> &Operator {
        &self.operators[id.index()]
    }

    fn validate(&self) -> Result<(), TaskError> {
        for variable in &self.variables {
            if variable.domain.is_empty() {
                return Err(TaskError::Invalid(format!(
                    "variable {} has an empty domain",
                    variable.name
                )));
            }
        }

        if self.initial_state.num_variables() != self.variables.len() {
            return Err(TaskError::Invalid(format!(
                "initial state assigns {} variables, task has {}",
                self.initial_state.num_variables(),
                self.variables.len()
            )));
        }
        for fact in self.initial_state.facts() {
            self.validate_fact_indices(fact.variable, fact.value, "initial state")?;
        }

        for fact in &self.goal.facts {
            self.validate_fact_indices(fact.variable, fact.value, "goal")?;
        }

        for operator in &self.operators {
            for fact in operator.preconditions.iter().chain(operator.effects.iter()) {
                self.validate_fact_indices(fact.variable, fact.value, &operator.name)?;
            }
            if operator.cost < 0 {
                return Err(TaskError::Invalid(format!(
                    "operator {} has negative cost {}",
                    operator.name, operator.cost
                )));
            }
        }

        Ok(())
    }

    fn validate_fact_indices(
        &self,
        variable: usize,
        value: usize,
        context: &str,
    ) -> Result<(), TaskError> {
        if variable >= self.variables.len() {
            return Err(TaskError::Invalid(format!(
                "{context} refers to variable {variable}, task has {}",
                self.variables.len()
            )));
        }
        if value >= self.variables[variable].domain_size() {
            return Err(TaskError::Invalid(format!(
                "{context} assigns value {value} to variable {}, domain size is {}",
                self.variables[variable].name,
                self.variables[variable].domain_size()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn gripper() {
        let task = Task::from_text(GRIPPER_TASK_TEXT).unwrap();

        assert_eq!(task.num_variables(), 3);
        assert_eq!(task.num_operators(), 6);
        assert_eq!(task.goal.facts.len(), 1);
        assert_eq!(task.variables[0].domain_size(), 2);
        assert!(!task.goal.is_satisfied(&task.initial_state));
    }

    #[test]
    fn operator_lookup_by_id() {
        let task = Task::from_text(GRIPPER_TASK_TEXT).unwrap();

        assert_eq!(task.operator(OperatorId::new(0)).name, "move-a-b");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Task::from_text("{\"variables\": []"),
            Err(TaskError::Parse(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_goal_value() {
        let text = r#"{
            "variables": [{"name": "x", "domain": ["a", "b"]}],
            "operators": [],
            "initial_state": [0],
            "goal": [[0, 5]]
        }"#;
        assert!(matches!(Task::from_text(text), Err(TaskError::Invalid(_))));
    }

    #[test]
    fn rejects_initial_state_of_wrong_length() {
        let text = r#"{
            "variables": [{"name": "x", "domain": ["a", "b"]}],
            "operators": [],
            "initial_state": [0, 1],
            "goal": [[0, 1]]
        }"#;
        assert!(matches!(Task::from_text(text), Err(TaskError::Invalid(_))));
    }
}
