use crate::search::{Fact, State};
use serde::Deserialize;
use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};

/// Typical number of precondition or effect facts of a grounded operator.
const TYPICAL_NUM_CONDITIONS: usize = 4;

/// The precondition or effect facts of an operator.
pub type Conditions = SmallVec<[Fact; TYPICAL_NUM_CONDITIONS]>;

/// Identifier of an operator, an index into the task's operator list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperatorId(usize);

impl OperatorId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl Display for OperatorId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "op{}", self.0)
    }
}

/// A grounded operator: applicable when all precondition facts hold,
/// application overwrites the affected variables with the effect facts.
#[derive(Debug, Clone, Deserialize)]
pub struct Operator {
    pub name: String,
    pub preconditions: Conditions,
    pub effects: Conditions,
    #[serde(default = "default_cost")]
    pub cost: i32,
}

fn default_cost() -> i32 {
    1
}

impl Operator {
    pub fn is_applicable(&self, state: &State) -> bool {
        self.preconditions.iter().all(|fact| state.satisfies(fact))
    }

    /// True if applying this operator makes `fact` hold.
    pub fn achieves(&self, fact: &Fact) -> bool {
        self.effects.iter().any(|effect| effect == fact)
    }
}
