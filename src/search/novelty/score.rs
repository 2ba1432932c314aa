use crate::search::HeuristicValue;

/// How per-fact novelty bookkeeping is turned into a scalar state score.
/// All modes yield lower scores for more-novel states.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum NoveltyType {
    /// 0 if any fact improved, 1 otherwise.
    Basic,
    /// Subtract the summed novel estimates from the best possible score.
    SeparateNovel,
    /// Like separate-novel, but states with no novel fact are additionally
    /// penalized by their non-novel estimates.
    SeparateBoth,
    /// Like separate-both, with estimates scaled by the improvement relative
    /// to the largest value ever seen.
    SeparateBothAggregate,
}

/// Maps per-fact novelty deltas to estimates and the summed estimates to the
/// final state score.
#[derive(Debug, Clone, Copy)]
pub struct ScoreModel {
    novelty_type: NoveltyType,
    multiplier: HeuristicValue,
}

impl ScoreModel {
    pub fn new(novelty_type: NoveltyType, multiplier: HeuristicValue) -> Self {
        Self {
            novelty_type,
            multiplier,
        }
    }

    /// Estimate for a fact whose table entry was unseen (`previous` is
    /// `None`) or strictly greater than the current evaluator value.
    ///
    /// `largest` is the largest finite evaluator value observed so far; it is
    /// recorded before any fact is scored, so it is present whenever this is
    /// called.
    pub fn estimate_novel(
        &self,
        previous: Option<HeuristicValue>,
        value: HeuristicValue,
        largest: Option<HeuristicValue>,
    ) -> HeuristicValue {
        let Some(previous) = previous else {
            return self.multiplier;
        };
        match self.novelty_type {
            NoveltyType::Basic | NoveltyType::SeparateNovel | NoveltyType::SeparateBoth => {
                self.multiplier
            }
            NoveltyType::SeparateBothAggregate => {
                // Scaled to [0, multiplier]; the truncation can collapse a
                // small improvement to 0.
                let largest = largest.expect("a value is recorded before any fact is scored");
                let diff = f64::from(previous - value) / f64::from(largest);
                (f64::from(self.multiplier) * diff) as HeuristicValue
            }
        }
    }

    /// Estimate for a fact whose table entry was strictly smaller than the
    /// current evaluator value.
    pub fn estimate_non_novel(
        &self,
        previous: HeuristicValue,
        value: HeuristicValue,
        largest: Option<HeuristicValue>,
    ) -> HeuristicValue {
        if previous == value {
            return 0;
        }
        match self.novelty_type {
            NoveltyType::Basic | NoveltyType::SeparateNovel => 0,
            NoveltyType::SeparateBoth => self.multiplier,
            NoveltyType::SeparateBothAggregate => {
                let largest = largest.expect("a value is recorded before any fact is scored");
                let diff = f64::from(value - previous) / f64::from(largest);
                (f64::from(self.multiplier) * diff) as HeuristicValue
            }
        }
    }

    /// Reduce the per-evaluator estimates for a single fact to one number by
    /// taking the maximum, in particular 0 if all entries are 0.
    pub fn aggregate(values: &[HeuristicValue]) -> HeuristicValue {
        values.iter().copied().fold(0, HeuristicValue::max)
    }

    /// Final scalar score from the summed novel (`novel_sum`) and non-novel
    /// (`non_novel_sum`) estimates over all facts of the state.
    pub fn score(
        &self,
        num_variables: usize,
        novel_sum: HeuristicValue,
        non_novel_sum: HeuristicValue,
    ) -> HeuristicValue {
        let base = self.multiplier * num_variables as HeuristicValue;
        match self.novelty_type {
            NoveltyType::Basic => {
                if novel_sum > 0 {
                    0
                } else {
                    1
                }
            }
            NoveltyType::SeparateNovel => base - novel_sum,
            NoveltyType::SeparateBoth | NoveltyType::SeparateBothAggregate => {
                if novel_sum > 0 {
                    base - novel_sum
                } else {
                    base + non_novel_sum
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_facts_are_worth_the_multiplier_in_every_mode() {
        for novelty_type in [
            NoveltyType::Basic,
            NoveltyType::SeparateNovel,
            NoveltyType::SeparateBoth,
            NoveltyType::SeparateBothAggregate,
        ] {
            let model = ScoreModel::new(novelty_type, 3);
            assert_eq!(model.estimate_novel(None, 5, Some(5)), 3);
        }
    }

    #[test]
    fn aggregate_mode_scales_the_improvement() {
        let model = ScoreModel::new(NoveltyType::SeparateBothAggregate, 10);

        // improvement 10 -> 2 against a largest value of 10
        assert_eq!(model.estimate_novel(Some(10), 2, Some(10)), 8);
        // worsening 2 -> 10
        assert_eq!(model.estimate_non_novel(2, 10, Some(10)), 8);
    }

    #[test]
    fn aggregate_mode_can_truncate_a_small_improvement_to_zero() {
        let model = ScoreModel::new(NoveltyType::SeparateBothAggregate, 1);
        assert_eq!(model.estimate_novel(Some(10), 9, Some(100)), 0);
    }

    #[test]
    fn non_novel_estimates_are_zero_unless_both_deltas_are_scored() {
        assert_eq!(
            ScoreModel::new(NoveltyType::Basic, 2).estimate_non_novel(3, 5, Some(5)),
            0
        );
        assert_eq!(
            ScoreModel::new(NoveltyType::SeparateNovel, 2).estimate_non_novel(3, 5, Some(5)),
            0
        );
        assert_eq!(
            ScoreModel::new(NoveltyType::SeparateBoth, 2).estimate_non_novel(3, 5, Some(5)),
            2
        );
    }

    #[test]
    fn per_fact_aggregation_takes_the_maximum() {
        assert_eq!(ScoreModel::aggregate(&[0, 4, 2]), 4);
        assert_eq!(ScoreModel::aggregate(&[0, 0]), 0);
        assert_eq!(ScoreModel::aggregate(&[]), 0);
    }

    #[test]
    fn basic_score_is_boolean() {
        let model = ScoreModel::new(NoveltyType::Basic, 1);
        assert_eq!(model.score(4, 3, 0), 0);
        assert_eq!(model.score(4, 0, 2), 1);
    }

    #[test]
    fn separate_novel_subtracts_from_the_base() {
        let model = ScoreModel::new(NoveltyType::SeparateNovel, 2);
        // base = 2 * 3
        assert_eq!(model.score(3, 4, 0), 2);
        assert_eq!(model.score(3, 0, 5), 6);
    }

    #[test]
    fn separate_both_penalizes_non_novel_states() {
        let model = ScoreModel::new(NoveltyType::SeparateBoth, 1);
        assert_eq!(model.score(1, 1, 0), 0);
        assert_eq!(model.score(1, 0, 1), 2);
    }
}
