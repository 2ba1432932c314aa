use clap::Parser;
use novelsearch::search::heuristics::{EvaluatorName, HeuristicName, NoveltyConfig};
use novelsearch::search::novelty::{CutoffType, NoveltyType};
use novelsearch::search::search_engines::{SearchEngineName, SearchResult, TerminationCondition};
use novelsearch::search::{validate, HeuristicValue, Task};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const EXIT_PLAN_FOUND: u8 = 0;
const EXIT_INPUT_ERROR: u8 = 2;
const EXIT_UNSOLVABLE: u8 = 10;
const EXIT_OUT_OF_RESOURCES: u8 = 11;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the task file (JSON).
    #[arg(short, long, value_name = "TASK")]
    task: PathBuf,

    #[arg(long, value_enum, default_value_t = SearchEngineName::Gbfs)]
    search_engine: SearchEngineName,

    #[arg(long, value_enum, default_value_t = HeuristicName::GoalCount)]
    heuristic: HeuristicName,

    /// Underlying evaluators of the novelty heuristic.
    #[arg(long, value_enum, num_args = 1..)]
    evals: Vec<EvaluatorName>,

    /// Score-aggregation mode of the novelty heuristic.
    #[arg(long, value_enum, default_value_t = NoveltyType::Basic)]
    novelty_type: NoveltyType,

    /// Preferred-operator filtering policy of the novelty heuristic.
    #[arg(long, value_enum, default_value_t = CutoffType::NoCutoff)]
    cutoff_type: CutoffType,

    /// Delta threshold used by the all-random and all-ordered cutoffs.
    #[arg(long, default_value_t = HeuristicValue::MIN)]
    cutoff_bound: HeuristicValue,

    /// Cap on the preferred operators emitted per evaluator per state.
    #[arg(long)]
    num_ops_bound: Option<usize>,

    /// Fraction of the candidate-set size used as a secondary cap.
    #[arg(long, default_value_t = 1.0)]
    num_ops_relative_bound: f64,

    /// Weight of a single novel fact.
    #[arg(long, default_value_t = 1)]
    multiplier: HeuristicValue,

    /// Log the novelty score of every evaluated state.
    #[arg(long)]
    dump: bool,

    /// Compute preferred operators.
    #[arg(long)]
    pref: bool,

    /// Seed for preferred-operator sampling; OS entropy if unset.
    #[arg(long)]
    seed: Option<u64>,

    /// Wall-clock limit, e.g. "30s" or "5m".
    #[arg(long, value_parser = humantime::parse_duration)]
    time_limit: Option<Duration>,

    #[arg(long)]
    memory_limit_mb: Option<usize>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let task = match Task::from_path(&args.task) {
        Ok(task) => task,
        Err(error) => {
            error!("{error}");
            return ExitCode::from(EXIT_INPUT_ERROR);
        }
    };

    let novelty_config = NoveltyConfig {
        evals: args.evals.iter().map(|name| name.create()).collect(),
        novelty_type: args.novelty_type,
        cutoff_type: args.cutoff_type,
        cutoff_bound: args.cutoff_bound,
        num_ops_bound: args.num_ops_bound,
        num_ops_relative_bound: args.num_ops_relative_bound,
        multiplier: args.multiplier,
        dump_value: args.dump,
        use_preferred_operators: args.pref,
        seed: args.seed,
    };
    let heuristic = match args.heuristic.create(novelty_config, &task) {
        Ok(heuristic) => heuristic,
        Err(error) => {
            error!("{error}");
            return ExitCode::from(EXIT_INPUT_ERROR);
        }
    };

    let termination_condition = TerminationCondition::new(args.time_limit, args.memory_limit_mb);
    let mut engine = args.search_engine.create();
    let (result, statistics) = engine.search(&task, heuristic, termination_condition);
    statistics.log();

    match result {
        SearchResult::Success(plan) => {
            info!(plan_length = plan.len(), valid = validate(&task, &plan));
            println!("{}", plan.to_string(&task));
            ExitCode::from(EXIT_PLAN_FOUND)
        }
        SearchResult::ProvablyUnsolvable => {
            info!("task is provably unsolvable");
            ExitCode::from(EXIT_UNSOLVABLE)
        }
        SearchResult::TimeLimitExceeded | SearchResult::MemoryLimitExceeded => {
            info!("search ran out of resources");
            ExitCode::from(EXIT_OUT_OF_RESOURCES)
        }
    }
}
