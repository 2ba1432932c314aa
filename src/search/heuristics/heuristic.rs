use crate::search::heuristics::{Blind, ConfigError, GoalCount, NoveltyConfig, NoveltyHeuristic};
use crate::search::{OperatorId, State, Task};
use std::fmt::Debug;

/// Heuristic values are integers; [`DEAD_END`] plays the role of +infinity.
pub type HeuristicValue = i32;

/// Returned when the state is provably unsolvable. Sorts after every finite
/// value in a min-ordered frontier.
pub const DEAD_END: HeuristicValue = HeuristicValue::MAX;

pub trait Heuristic: Debug {
    /// Evaluate the given state with respect to the given task. Returns
    /// [`DEAD_END`] if the state is provably unsolvable.
    ///
    /// Evaluation may mutate internal bookkeeping, so callers must not treat
    /// this as a pure function or memoize its results.
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue;

    /// The operators marked preferred during the most recent call to
    /// [`evaluate`](Heuristic::evaluate). Empty for heuristics that do not
    /// emit preferred operators.
    fn preferred_operators(&self) -> &[OperatorId] {
        &[]
    }

    /// Delivered by the search before `child` is evaluated, whenever `child`
    /// was reached by applying `op` in `parent`.
    fn notify_state_transition(&mut self, parent: &State, op: OperatorId, child: &State) {
        let _ = (parent, op, child);
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "Constant zero")]
    Blind,
    #[clap(help = "Number of unsatisfied goal facts")]
    GoalCount,
    #[clap(help = "Novelty of the state relative to all previously seen states")]
    Novelty,
}

impl HeuristicName {
    /// `novelty_config` is only consulted for the novelty heuristic.
    pub fn create(
        &self,
        novelty_config: NoveltyConfig,
        task: &Task,
    ) -> Result<Box<dyn Heuristic>, ConfigError> {
        match self {
            HeuristicName::Blind => Ok(Box::new(Blind::new())),
            HeuristicName::GoalCount => Ok(Box::new(GoalCount::new())),
            HeuristicName::Novelty => {
                Ok(Box::new(NoveltyHeuristic::new(novelty_config, task)?))
            }
        }
    }
}

/// The evaluators available as underlying heuristics of the novelty
/// heuristic.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum EvaluatorName {
    Blind,
    GoalCount,
}

impl EvaluatorName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            EvaluatorName::Blind => Box::new(Blind::new()),
            EvaluatorName::GoalCount => Box::new(GoalCount::new()),
        }
    }
}
