mod fact;
mod goal;
pub mod heuristics;
pub mod novelty;
mod operator;
mod plan;
mod rng;
pub mod search_engines;
mod state;
mod successor_generator;
mod task;
mod validate;

pub use fact::Fact;
pub use goal::Goal;
pub use heuristics::{Heuristic, HeuristicValue, DEAD_END};
pub use operator::{Operator, OperatorId};
pub use plan::Plan;
pub use rng::RandomNumberGenerator;
pub use state::State;
pub use successor_generator::SuccessorGenerator;
pub use task::{Task, TaskError};
pub use validate::validate;
