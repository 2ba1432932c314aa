use crate::search::novelty::OperatorValueTable;
use crate::search::{HeuristicValue, OperatorId, RandomNumberGenerator};
use itertools::Itertools;

/// How an evaluator's preferred-operator candidates are filtered against the
/// stored per-operator values before emission.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum CutoffType {
    /// Keep the candidates whose stored value equals the maximum over the
    /// candidate set, where any unseen candidate makes the maximum unseen.
    Argmax,
    /// Keep candidates above the cutoff bound, ordered by stored value
    /// descending.
    AllOrdered,
    /// Keep candidates above the cutoff bound; a uniform subset is drawn
    /// when a size cap applies.
    AllRandom,
    /// Keep every candidate. No operator values are stored in this mode.
    NoCutoff,
}

/// Applies the cutoff policy, size caps, and sampling that choose which of
/// an evaluator's candidate operators are emitted as preferred.
#[derive(Debug)]
pub struct PreferredOperatorSelector {
    cutoff_type: CutoffType,
    cutoff_bound: HeuristicValue,
    num_ops_bound: Option<usize>,
    num_ops_relative_bound: f64,
}

impl PreferredOperatorSelector {
    pub fn new(
        cutoff_type: CutoffType,
        cutoff_bound: HeuristicValue,
        num_ops_bound: Option<usize>,
        num_ops_relative_bound: f64,
    ) -> Self {
        Self {
            cutoff_type,
            cutoff_bound,
            num_ops_bound,
            num_ops_relative_bound,
        }
    }

    /// True if the cutoff policy reads stored per-operator values, i.e. if
    /// the operator value table has to exist.
    pub fn requires_operator_values(&self) -> bool {
        self.cutoff_type != CutoffType::NoCutoff
    }

    /// Select from `candidates` under the cutoff policy, given the
    /// evaluator's value for the current state, and push the chosen
    /// operators onto `preferred`.
    ///
    /// `operator_values` must be present unless the policy is
    /// [`CutoffType::NoCutoff`].
    pub fn select(
        &self,
        candidates: &[OperatorId],
        value: HeuristicValue,
        evaluator_index: usize,
        operator_values: Option<&OperatorValueTable>,
        rng: &mut RandomNumberGenerator,
        preferred: &mut Vec<OperatorId>,
    ) {
        let filtered = self.filter(candidates, value, evaluator_index, operator_values);

        // Both caps are computed against the original candidate count, not
        // the filtered count.
        let mut num_to_select = filtered.len();
        if self.num_ops_relative_bound < 1.0 {
            num_to_select = num_to_select
                .min((self.num_ops_relative_bound * candidates.len() as f64) as usize);
        }
        if let Some(bound) = self.num_ops_bound {
            num_to_select = num_to_select.min(bound);
        }
        if num_to_select == 0 {
            return;
        }

        if self.cutoff_type != CutoffType::AllOrdered && num_to_select < filtered.len() {
            preferred.extend(rng.sample(&filtered, num_to_select));
        } else {
            preferred.extend(filtered.into_iter().take(num_to_select));
        }
    }

    fn filter(
        &self,
        candidates: &[OperatorId],
        value: HeuristicValue,
        evaluator_index: usize,
        operator_values: Option<&OperatorValueTable>,
    ) -> Vec<OperatorId> {
        let stored = |op: OperatorId| {
            operator_values
                .expect("operator values are stored whenever a cutoff policy is active")
                .get(op, evaluator_index)
        };
        // An unseen candidate always survives the bound check.
        let above_bound = |op: &OperatorId| match stored(*op) {
            None => true,
            Some(stored) => stored - value > self.cutoff_bound,
        };

        match self.cutoff_type {
            CutoffType::Argmax => {
                let mut max_value = Some(HeuristicValue::MIN);
                for &op in candidates {
                    match stored(op) {
                        // Any unseen candidate makes the maximum unseen.
                        None => {
                            max_value = None;
                            break;
                        }
                        Some(v) => {
                            if let Some(current_max) = max_value {
                                if v > current_max {
                                    max_value = Some(v);
                                }
                            }
                        }
                    }
                }
                candidates
                    .iter()
                    .copied()
                    .filter(|&op| stored(op) == max_value)
                    .collect()
            }
            CutoffType::AllRandom => candidates.iter().copied().filter(above_bound).collect(),
            CutoffType::AllOrdered => {
                // Descending by stored value; unseen entries sort after all
                // seen values.
                candidates
                    .iter()
                    .copied()
                    .filter(above_bound)
                    .map(|op| (stored(op), op))
                    .sorted_by(|a, b| b.0.cmp(&a.0))
                    .map(|(_, op)| op)
                    .collect()
            }
            CutoffType::NoCutoff => candidates.to_vec(),
        }
    }
}
