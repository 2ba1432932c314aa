//! Bookkeeping behind the novelty heuristic: the per-fact and per-operator
//! running-minimum tables, the score aggregation modes, and the
//! preferred-operator cutoff policies. The heuristic itself lives in
//! [`crate::search::heuristics`].

mod preferred;
mod score;
mod tables;

pub use preferred::{CutoffType, PreferredOperatorSelector};
pub use score::{NoveltyType, ScoreModel};
pub use tables::{NoveltyTable, OperatorValueTable};
