use crate::search::{Heuristic, HeuristicValue, State, Task};

#[derive(Clone, Debug, Default)]
pub struct Blind {}

impl Blind {
    pub fn new() -> Self {
        Blind {}
    }
}

impl Heuristic for Blind {
    fn evaluate(&mut self, _state: &State, _task: &Task) -> HeuristicValue {
        0
    }
}
