mod blind;
mod goal_count;
mod heuristic;
mod novelty;

pub use blind::Blind;
pub use goal_count::GoalCount;
pub use heuristic::{
    EvaluatorName, Heuristic, HeuristicName, HeuristicValue, DEAD_END,
};
pub use novelty::{ConfigError, NoveltyConfig, NoveltyHeuristic};
