mod gbfs;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod termination_condition;

use gbfs::Gbfs;
use search_node::{NodeId, SearchNode, SearchNodeStatus};
use search_space::SearchSpace;

pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
