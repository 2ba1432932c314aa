//! A plan is a sequence of operators that can be executed to achieve the
//! goal. This module provides the [`Plan`] struct, which represents a plan.

use crate::search::{OperatorId, Task};
use itertools::Itertools;
use std::ops::Deref;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    steps: Vec<OperatorId>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<OperatorId>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[OperatorId] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn to_string(&self, task: &Task) -> String {
        self.steps
            .iter()
            .map(|&op| task.operator(op).name.as_str())
            .join("\n")
    }
}

impl IntoIterator for Plan {
    type Item = OperatorId;
    type IntoIter = std::vec::IntoIter<OperatorId>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [OperatorId];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
