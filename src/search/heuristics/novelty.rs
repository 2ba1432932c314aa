use crate::search::novelty::{
    CutoffType, NoveltyTable, NoveltyType, OperatorValueTable, PreferredOperatorSelector,
    ScoreModel,
};
use crate::search::{
    Heuristic, HeuristicValue, OperatorId, RandomNumberGenerator, State, Task, DEAD_END,
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("the novelty heuristic needs at least one underlying evaluator")]
    NoEvaluators,
    #[error("multiplier must be at least 1, got {0}")]
    MultiplierOutOfBounds(HeuristicValue),
    #[error("num_ops_bound must be at least 1")]
    NumOpsBoundOutOfBounds,
    #[error("num_ops_relative_bound must be in (0, 1], got {0}")]
    RelativeBoundOutOfBounds(f64),
}

/// Configuration record of the novelty heuristic. Immutable once the
/// heuristic is constructed.
#[derive(Debug)]
pub struct NoveltyConfig {
    /// Underlying evaluators whose values are tracked. Must be non-empty.
    pub evals: Vec<Box<dyn Heuristic>>,
    pub novelty_type: NoveltyType,
    pub cutoff_type: CutoffType,
    /// Delta threshold used by the all-random and all-ordered cutoffs.
    /// `HeuristicValue::MIN` means no threshold.
    pub cutoff_bound: HeuristicValue,
    /// Cap on the preferred operators emitted per evaluator per state.
    pub num_ops_bound: Option<usize>,
    /// Fraction of the original candidate-set size used as a secondary cap.
    pub num_ops_relative_bound: f64,
    /// Weight of a single novel fact.
    pub multiplier: HeuristicValue,
    /// Log the score of every evaluated state.
    pub dump_value: bool,
    pub use_preferred_operators: bool,
    /// RNG seed for preferred-operator sampling; OS entropy if unset.
    pub seed: Option<u64>,
}

impl Default for NoveltyConfig {
    fn default() -> Self {
        Self {
            evals: vec![],
            novelty_type: NoveltyType::Basic,
            cutoff_type: CutoffType::NoCutoff,
            cutoff_bound: HeuristicValue::MIN,
            num_ops_bound: None,
            num_ops_relative_bound: 1.0,
            multiplier: 1,
            dump_value: false,
            use_preferred_operators: false,
            seed: None,
        }
    }
}

/// Scores a state by how novel it is relative to all previously seen
/// states: for every fact of the state and every underlying evaluator, the
/// best evaluator value ever observed for that fact is tracked, and states
/// that improve on those records score lower.
///
/// Evaluation updates the tracking tables, so evaluating the same state
/// twice generally yields different scores.
#[derive(Debug)]
pub struct NoveltyHeuristic {
    evals: Vec<Box<dyn Heuristic>>,
    facts: NoveltyTable,
    /// Best value per (operator, evaluator), only allocated when preferred
    /// operators are emitted under a per-operator cutoff policy.
    operator_values: Option<OperatorValueTable>,
    selector: PreferredOperatorSelector,
    score_model: ScoreModel,
    dump_value: bool,
    use_preferred_operators: bool,
    /// Running maximum of any finite evaluator value ever observed.
    largest_value: Option<HeuristicValue>,
    /// The operator that produced the state under evaluation, delivered via
    /// [`Heuristic::notify_state_transition`].
    reached_by: Option<OperatorId>,
    rng: RandomNumberGenerator,
    preferred: Vec<OperatorId>,
}

impl NoveltyHeuristic {
    pub fn new(config: NoveltyConfig, task: &Task) -> Result<Self, ConfigError> {
        let NoveltyConfig {
            evals,
            novelty_type,
            cutoff_type,
            cutoff_bound,
            num_ops_bound,
            num_ops_relative_bound,
            multiplier,
            dump_value,
            use_preferred_operators,
            seed,
        } = config;

        if evals.is_empty() {
            return Err(ConfigError::NoEvaluators);
        }
        if multiplier < 1 {
            return Err(ConfigError::MultiplierOutOfBounds(multiplier));
        }
        if num_ops_bound == Some(0) {
            return Err(ConfigError::NumOpsBoundOutOfBounds);
        }
        if !(num_ops_relative_bound > 0.0 && num_ops_relative_bound <= 1.0) {
            return Err(ConfigError::RelativeBoundOutOfBounds(num_ops_relative_bound));
        }

        info!(
            num_evals = evals.len(),
            ?novelty_type,
            ?cutoff_type,
            "initializing novelty heuristic"
        );
        let selector = PreferredOperatorSelector::new(
            cutoff_type,
            cutoff_bound,
            num_ops_bound,
            num_ops_relative_bound,
        );
        let facts = NoveltyTable::new(task, evals.len());
        let operator_values = if use_preferred_operators && selector.requires_operator_values() {
            info!("allocating heuristic value storage per operator");
            Some(OperatorValueTable::new(task, evals.len()))
        } else {
            None
        };
        let rng = match seed {
            Some(seed) => RandomNumberGenerator::from_seed(seed),
            None => RandomNumberGenerator::new(),
        };

        Ok(Self {
            evals,
            facts,
            operator_values,
            selector,
            score_model: ScoreModel::new(novelty_type, multiplier),
            dump_value,
            use_preferred_operators,
            largest_value: None,
            reached_by: None,
            rng,
            preferred: vec![],
        })
    }

    fn stores_operator_values(&self) -> bool {
        self.operator_values.is_some()
    }

    fn update_largest_value(&mut self, value: HeuristicValue) {
        if self.largest_value.map_or(true, |largest| value > largest) {
            self.largest_value = Some(value);
        }
    }
}

impl Heuristic for NoveltyHeuristic {
    fn evaluate(&mut self, state: &State, task: &Task) -> HeuristicValue {
        self.preferred.clear();

        let mut values = Vec::with_capacity(self.evals.len());
        for evaluator_index in 0..self.evals.len() {
            let value = self.evals[evaluator_index].evaluate(state, task);
            if value == DEAD_END {
                self.preferred.clear();
                return DEAD_END;
            }
            values.push(value);
            self.update_largest_value(value);

            if self.use_preferred_operators {
                // Record the value for the operator that reached this state.
                if let (Some(reached_by), Some(operator_values)) =
                    (self.reached_by, self.operator_values.as_mut())
                {
                    operator_values.improve(reached_by, evaluator_index, value);
                }

                let candidates = self.evals[evaluator_index].preferred_operators().to_vec();
                self.selector.select(
                    &candidates,
                    value,
                    evaluator_index,
                    self.operator_values.as_ref(),
                    &mut self.rng,
                    &mut self.preferred,
                );
            }
        }

        let mut novel_sum = 0;
        let mut non_novel_sum = 0;
        let mut novel_for_fact = vec![0; self.evals.len()];
        let mut non_novel_for_fact = vec![0; self.evals.len()];
        for fact in state.facts() {
            novel_for_fact.fill(0);
            non_novel_for_fact.fill(0);

            for (evaluator_index, &value) in values.iter().enumerate() {
                let previous = self.facts.improve(&fact, evaluator_index, value);
                match previous {
                    None => {
                        novel_for_fact[evaluator_index] =
                            self.score_model
                                .estimate_novel(None, value, self.largest_value);
                    }
                    Some(p) if p > value => {
                        novel_for_fact[evaluator_index] =
                            self.score_model
                                .estimate_novel(previous, value, self.largest_value);
                    }
                    Some(p) if p < value => {
                        non_novel_for_fact[evaluator_index] =
                            self.score_model
                                .estimate_non_novel(p, value, self.largest_value);
                    }
                    Some(_) => {}
                }
            }

            novel_sum += ScoreModel::aggregate(&novel_for_fact);
            non_novel_sum += ScoreModel::aggregate(&non_novel_for_fact);
        }

        let score = self
            .score_model
            .score(task.num_variables(), novel_sum, non_novel_sum);
        if self.dump_value {
            info!("NoveltyValue {score}");
        }
        score
    }

    fn preferred_operators(&self) -> &[OperatorId] {
        &self.preferred
    }

    fn notify_state_transition(&mut self, _parent: &State, op: OperatorId, _child: &State) {
        if self.stores_operator_values() {
            self.reached_by = Some(op);
        }
    }
}
