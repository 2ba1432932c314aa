use crate::search::search_engines::{Gbfs, SearchStatistics, TerminationCondition};
use crate::search::{Heuristic, Plan, Task};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search found a plan
    Success(Plan),
    /// The search space was exhausted without reaching the goal
    ProvablyUnsolvable,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
}

pub trait SearchEngine {
    fn search(
        &mut self,
        task: &Task,
        heuristic: Box<dyn Heuristic>,
        termination_condition: TerminationCondition,
    ) -> (SearchResult, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Greedy best-first search with preferred-operator alternation")]
    Gbfs,
}

impl SearchEngineName {
    pub fn create(&self) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::Gbfs => Box::new(Gbfs::new()),
        }
    }
}
