use crate::search::Task;
use serde::Deserialize;
use std::fmt::{self, Display, Formatter};

/// A single variable assignment `variable = value`. The indices only make
/// sense in the context of a [`Task`], which names the variable and its
/// domain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "(usize, usize)")]
pub struct Fact {
    pub variable: usize,
    pub value: usize,
}

impl Fact {
    pub fn new(variable: usize, value: usize) -> Self {
        Self { variable, value }
    }

    pub fn human_readable(&self, task: &Task) -> String {
        let variable = &task.variables[self.variable];
        format!("{}={}", variable.name, variable.domain[self.value])
    }
}

impl From<(usize, usize)> for Fact {
    fn from((variable, value): (usize, usize)) -> Self {
        Self::new(variable, value)
    }
}

impl Display for Fact {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}={}", self.variable, self.value)
    }
}
