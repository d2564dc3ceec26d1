//! Exhaustive argmax of fitness over the defense grid, for every (H0, p)
//!
//! The landscape is not assumed smooth or unimodal, so every defense level
//! is evaluated; there is no bracketing or gradient step.

use optdef_common::Grid;

use super::Surface;
use crate::fitness::{FitnessModel, FitnessParams};

/// Index of the first maximum under a strict greater-than scan
///
/// Ties resolve to the earliest index. Returns 0 for an empty slice or when
/// the first value is NaN.
pub fn argmax(values: &[f32]) -> usize {
    let mut best = 0;
    let mut best_value = match values.first() {
        Some(&v) => v,
        None => return 0,
    };

    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > best_value {
            best_value = v;
            best = i;
        }
    }
    best
}

/// Builds the optimal surface for one (a, b, c, λ) cell
pub struct OptimalSurfaceSolver<'a> {
    h0: &'a Grid,
    p: &'a Grid,
}

impl<'a> OptimalSurfaceSolver<'a> {
    pub fn new(h0: &'a Grid, p: &'a Grid) -> Self {
        Self { h0, p }
    }

    /// Optimal defense level for every (H0, p) pair
    pub fn solve(&self, model: &FitnessModel<'_>, c: f32, l: f32) -> Surface {
        let levels = model.defense_levels();
        let mut fitness = vec![0.0f32; model.len()];
        let mut surface = Surface::zeros(self.h0.len(), self.p.len());

        for (hi, &h0) in self.h0.iter().enumerate() {
            for (pi, &p) in self.p.iter().enumerate() {
                model.evaluate(&FitnessParams { h0, p, c, l }, &mut fitness);
                surface.set(hi, pi, levels[argmax(&fitness)]);
            }
        }

        surface
    }
}
