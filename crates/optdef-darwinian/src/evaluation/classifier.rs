//! Slope classifier evaluation
//!
//! A candidate slope `s` predicts the direction of the optimal defense
//! change from a perturbation: with `predicted = s × Δp`, the optimum is
//! expected to fall when `predicted > ΔH0` and to rise when
//! `predicted < ΔH0`. Samples whose optimum did not move are ignored.
//!
//! Every slope is scored per scenario; the first slope reaching the highest
//! correct count wins that scenario.

use optdef_common::{
    Direction, EvaluationError, Grid, ResultRecord, Scenario, ScenarioScore, SCENARIO_COUNT,
};

use crate::sampling::Sample;

/// Correct and eligible counts for one slope, indexed by scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlopeTally {
    pub correct: [usize; SCENARIO_COUNT],
    pub total: [usize; SCENARIO_COUNT],
}

/// Whether the line predicts the observed direction
#[inline]
pub fn is_correct(predicted: f32, dh: f32, direction: Direction) -> bool {
    (predicted > dh && direction == Direction::Decrease)
        || (predicted < dh && direction == Direction::Increase)
}

/// Sweeps a fixed slope grid over one cell's samples
pub struct ClassifierEvaluator<'a> {
    slopes: &'a Grid,
}

impl<'a> ClassifierEvaluator<'a> {
    pub fn new(slopes: &'a Grid) -> Self {
        Self { slopes }
    }

    /// Score a single slope
    pub fn tally(&self, slope: f32, samples: &[Sample]) -> SlopeTally {
        let mut tally = SlopeTally::default();

        for sample in samples {
            if sample.direction == Direction::Unchanged {
                continue;
            }
            let k = sample.scenario.index();
            if is_correct(slope * sample.dp, sample.dh, sample.direction) {
                tally.correct[k] += 1;
            }
            tally.total[k] += 1;
        }

        tally
    }

    /// Best slope and accuracy per scenario
    ///
    /// Eligible totals do not depend on the slope; a divergence between
    /// slopes is reported instead of dividing by whichever count came last.
    pub fn evaluate(&self, samples: &[Sample]) -> Result<ResultRecord, EvaluationError> {
        if self.slopes.is_empty() {
            return Err(EvaluationError::NoSlopes);
        }

        let mut best_correct = [0usize; SCENARIO_COUNT];
        let mut best_slope: [Option<f32>; SCENARIO_COUNT] = [None; SCENARIO_COUNT];
        let mut totals: Option<[usize; SCENARIO_COUNT]> = None;

        for &slope in self.slopes {
            let tally = self.tally(slope, samples);

            match totals {
                None => totals = Some(tally.total),
                Some(expected) => {
                    if let Some(k) = (0..SCENARIO_COUNT).find(|&k| expected[k] != tally.total[k]) {
                        return Err(EvaluationError::InconsistentTotals {
                            scenario: k,
                            expected: expected[k],
                            actual: tally.total[k],
                            slope,
                        });
                    }
                }
            }

            for k in 0..SCENARIO_COUNT {
                if tally.correct[k] > best_correct[k] {
                    best_correct[k] = tally.correct[k];
                    best_slope[k] = Some(slope);
                }
            }
        }

        let totals = totals.unwrap_or_default();
        let mut record = ResultRecord::default();
        for scenario in Scenario::ALL {
            let k = scenario.index();
            record.scores[k] = ScenarioScore {
                accuracy: (totals[k] > 0).then(|| best_correct[k] as f32 / totals[k] as f32),
                best_slope: best_slope[k],
                best_correct: best_correct[k],
                total: totals[k],
            };
        }

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::ScenarioSampler;
    use crate::surface::Surface;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn half_steps() -> Grid {
        Grid::from_values((-20..=20).map(|i| i as f32 * 0.5).collect())
    }

    fn planted(dp: f32, eps: f32, scenario: Scenario) -> Sample {
        Sample {
            dh: 2.0 * dp + eps,
            dp,
            direction: if eps > 0.0 {
                Direction::Increase
            } else {
                Direction::Decrease
            },
            scenario,
        }
    }

    #[test]
    fn test_is_correct() {
        assert!(is_correct(1.0, 0.5, Direction::Decrease));
        assert!(is_correct(0.0, 0.5, Direction::Increase));
        assert!(!is_correct(0.5, 0.5, Direction::Increase));
        assert!(!is_correct(0.5, 0.5, Direction::Decrease));
        assert!(!is_correct(1.0, 0.5, Direction::Increase));
        assert!(!is_correct(1.0, 0.5, Direction::Unchanged));
    }

    #[test]
    fn test_recovers_planted_slope() {
        let mut samples = Vec::new();
        for &dp in &[-1.0f32, -0.5, 0.5, 1.0] {
            for &eps in &[0.01f32, -0.01] {
                samples.push(planted(dp, eps, Scenario::Mixed));
            }
        }

        let slopes = half_steps();
        let record = ClassifierEvaluator::new(&slopes).evaluate(&samples).unwrap();
        let mixed = record.score(Scenario::Mixed);

        assert_eq!(mixed.best_slope, Some(2.0));
        assert_eq!(mixed.accuracy, Some(1.0));
        assert_eq!(mixed.total, 8);
    }

    #[test]
    fn test_empty_scenario_is_undefined() {
        let samples = vec![planted(1.0, 0.01, Scenario::Rising)];
        let slopes = half_steps();
        let record = ClassifierEvaluator::new(&slopes).evaluate(&samples).unwrap();

        assert_eq!(record.score(Scenario::NonRising).accuracy, None);
        assert_eq!(record.score(Scenario::NonRising).best_slope, None);
        assert_eq!(record.score(Scenario::Mixed).accuracy, None);
        assert_eq!(record.score(Scenario::Rising).accuracy, Some(1.0));
    }

    #[test]
    fn test_unchanged_samples_are_ignored() {
        let samples = vec![
            Sample {
                dh: 0.0,
                dp: 0.0,
                direction: Direction::Unchanged,
                scenario: Scenario::NonRising,
            };
            5
        ];
        let slopes = half_steps();
        let record = ClassifierEvaluator::new(&slopes).evaluate(&samples).unwrap();
        assert_eq!(record.score(Scenario::NonRising).total, 0);
        assert_eq!(record.score(Scenario::NonRising).accuracy, None);
    }

    #[test]
    fn test_first_slope_wins_ties() {
        // Δp = 0 makes the prediction 0 for every slope, so all slopes tie
        let samples = vec![Sample {
            dh: 1.0,
            dp: 0.0,
            direction: Direction::Increase,
            scenario: Scenario::NonRising,
        }];
        let slopes = Grid::from_values(vec![-3.0, 0.0, 4.0]);
        let record = ClassifierEvaluator::new(&slopes).evaluate(&samples).unwrap();
        assert_eq!(record.score(Scenario::NonRising).best_slope, Some(-3.0));
        assert_eq!(record.score(Scenario::NonRising).accuracy, Some(1.0));
    }

    #[test]
    fn test_never_correct_has_no_slope() {
        // Δp = 0 and ΔH0 = 0: neither strict inequality can hold
        let samples = vec![Sample {
            dh: 0.0,
            dp: 0.0,
            direction: Direction::Decrease,
            scenario: Scenario::Rising,
        }];
        let slopes = half_steps();
        let score = *ClassifierEvaluator::new(&slopes)
            .evaluate(&samples)
            .unwrap()
            .score(Scenario::Rising);
        assert_eq!(score.best_slope, None);
        assert_eq!(score.accuracy, Some(0.0));
        assert_eq!(score.total, 1);
    }

    #[test]
    fn test_no_slopes_is_error() {
        let slopes = Grid::from_values(Vec::new());
        let err = ClassifierEvaluator::new(&slopes).evaluate(&[]).unwrap_err();
        assert_eq!(err, EvaluationError::NoSlopes);
    }

    #[test]
    fn test_totals_are_slope_independent() {
        let h0 = Grid::linspace("h", 0.0, 2.0, 5).unwrap();
        let p = Grid::linspace("p", 0.0, 1.0, 5).unwrap();
        let surface = Surface::from_rows(vec![
            vec![0.0, 0.1, 0.1, 0.3, 0.2],
            vec![0.2, 0.2, 0.4, 0.4, 0.5],
            vec![0.5, 0.3, 0.3, 0.6, 0.6],
            vec![0.1, 0.1, 0.7, 0.2, 0.9],
            vec![0.9, 0.8, 0.8, 0.8, 1.0],
        ]);
        let diff = crate::surface::differentiate(&surface).unwrap();
        let sampler = ScenarioSampler::new(&surface, &diff, &h0, &p);
        let samples = sampler.sample(&mut StdRng::seed_from_u64(3), 5_000);

        let slopes = Grid::linspace("slope", -10.0, 10.0, 200).unwrap();
        let evaluator = ClassifierEvaluator::new(&slopes);
        let first = evaluator.tally(slopes[0], &samples).total;
        for &s in &slopes {
            assert_eq!(evaluator.tally(s, &samples).total, first);
        }

        let record = evaluator.evaluate(&samples).unwrap();
        for scenario in Scenario::ALL {
            let score = record.score(scenario);
            assert_eq!(score.total, first[scenario.index()]);
            assert!(score.best_correct <= score.total);
        }
    }
}
