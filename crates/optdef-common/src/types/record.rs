//! Scenario labels, defense-shift directions, and per-cell result records

use serde::{Deserialize, Serialize};

/// Region of the (H0, p) plane a sampled pair falls into, judged by the
/// sign of the surface's p-derivative at both endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Both endpoints sit where the optimum is flat or falling in p
    NonRising = 0,
    /// One endpoint rising, the other not
    Mixed = 1,
    /// Both endpoints sit where the optimum rises with p
    Rising = 2,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::NonRising, Scenario::Mixed, Scenario::Rising];

    /// Classify from the two p-derivative values
    #[inline]
    pub fn classify(first: f32, second: f32) -> Self {
        if first > 0.0 && second > 0.0 {
            Scenario::Rising
        } else if first <= 0.0 && second <= 0.0 {
            Scenario::NonRising
        } else {
            Scenario::Mixed
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column suffix used in the CSV header (a, b, c)
    pub fn label(self) -> &'static str {
        match self {
            Scenario::NonRising => "a",
            Scenario::Mixed => "b",
            Scenario::Rising => "c",
        }
    }
}

/// Sign of the change in optimal defense level between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Decrease = -1,
    Unchanged = 0,
    Increase = 1,
}

impl Direction {
    #[inline]
    pub fn of(delta: f32) -> Self {
        if delta > 0.0 {
            Direction::Increase
        } else if delta < 0.0 {
            Direction::Decrease
        } else {
            Direction::Unchanged
        }
    }

    #[inline]
    pub fn signum(self) -> i8 {
        self as i8
    }
}

/// Best slope and its accuracy for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioScore {
    /// Fraction of eligible samples the best slope predicts; `None` when the
    /// scenario drew no sample with a non-zero defense shift
    pub accuracy: Option<f32>,
    /// First slope reaching the best correct count; `None` when no slope
    /// predicted any sample correctly
    pub best_slope: Option<f32>,
    /// Correct predictions at the best slope
    pub best_correct: usize,
    /// Samples with a non-zero defense shift in this scenario
    pub total: usize,
}

/// Six-value outcome of one (a, b, c, l) cell, in scenario order 0, 1, 2
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultRecord {
    pub scores: [ScenarioScore; 3],
}

impl ResultRecord {
    pub fn score(&self, scenario: Scenario) -> &ScenarioScore {
        &self.scores[scenario.index()]
    }

    /// (accuracy, slope) pairs flattened in output column order
    pub fn fields(&self) -> [Option<f32>; 6] {
        let [s0, s1, s2] = self.scores;
        [
            s0.accuracy,
            s0.best_slope,
            s1.accuracy,
            s1.best_slope,
            s2.accuracy,
            s2.best_slope,
        ]
    }
}
