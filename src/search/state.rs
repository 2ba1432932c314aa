use crate::search::Fact;
use serde::Deserialize;
use std::fmt::{self, Display, Formatter};

/// A search state: a total assignment of the task's variables. `values[v]`
/// is the current value of variable `v`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct State {
    values: Vec<usize>,
}

impl State {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values }
    }

    pub fn value(&self, variable: usize) -> usize {
        self.values[variable]
    }

    pub fn values(&self) -> &[usize] {
        &self.values
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    pub fn satisfies(&self, fact: &Fact) -> bool {
        self.values[fact.variable] == fact.value
    }

    /// The task-level fact view of the state, one fact per variable.
    pub fn facts(&self) -> impl Iterator<Item = Fact> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(variable, &value)| Fact::new(variable, value))
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for fact in self.facts() {
            write!(f, "({fact})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fact_view_covers_every_variable() {
        let state = State::new(vec![1, 0, 2]);

        let facts: Vec<Fact> = state.facts().collect();
        assert_eq!(
            facts,
            vec![Fact::new(0, 1), Fact::new(1, 0), Fact::new(2, 2)]
        );
        assert!(state.satisfies(&Fact::new(2, 2)));
        assert!(!state.satisfies(&Fact::new(2, 0)));
    }
}
