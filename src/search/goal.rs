use crate::search::{Fact, State};
use serde::Deserialize;

/// The goal of a task, a partial assignment of the task's variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Goal {
    pub facts: Vec<Fact>,
}

impl Goal {
    /// Returns true if the goal is satisfied by the given state.
    pub fn is_satisfied(&self, state: &State) -> bool {
        self.facts.iter().all(|fact| state.satisfies(fact))
    }
}
