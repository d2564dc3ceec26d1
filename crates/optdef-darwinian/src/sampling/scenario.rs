//! Scenario sampler
//!
//! Each draw picks two (H0, p) grid points uniformly and independently, with
//! replacement, and records:
//! 1. the perturbation (ΔH0, Δp) between them,
//! 2. the direction the optimal defense level moved,
//! 3. the scenario, from the p-derivative sign at both points.
//!
//! The random source is passed in by the caller. Indices are drawn in the
//! order h1, h2, p1, p2 so a seeded generator reproduces a cell exactly.

use optdef_common::{Direction, Grid, Scenario};
use rand::Rng;

use crate::surface::Surface;

/// One Monte Carlo draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// ΔH0 = H0[h2] - H0[h1]
    pub dh: f32,
    /// Δp = p[p2] - p[p1]
    pub dp: f32,
    /// Sign of the optimal defense change from point 1 to point 2
    pub direction: Direction,
    pub scenario: Scenario,
}

/// Draws perturbation samples against one cell's surfaces
pub struct ScenarioSampler<'a> {
    surface: &'a Surface,
    diff: &'a Surface,
    h0: &'a Grid,
    p: &'a Grid,
}

impl<'a> ScenarioSampler<'a> {
    pub fn new(surface: &'a Surface, diff: &'a Surface, h0: &'a Grid, p: &'a Grid) -> Self {
        debug_assert_eq!(surface.rows(), h0.len());
        debug_assert_eq!(surface.cols(), p.len());
        debug_assert_eq!(surface.rows(), diff.rows());
        debug_assert_eq!(surface.cols(), diff.cols());
        Self {
            surface,
            diff,
            h0,
            p,
        }
    }

    /// Classify and measure the pair (h1, p1) → (h2, p2)
    pub fn sample_at(&self, h1: usize, h2: usize, p1: usize, p2: usize) -> Sample {
        let scenario = Scenario::classify(self.diff.get(h1, p1), self.diff.get(h2, p2));
        let delta = self.surface.get(h2, p2) - self.surface.get(h1, p1);

        Sample {
            dh: self.h0[h2] - self.h0[h1],
            dp: self.p[p2] - self.p[p1],
            direction: Direction::of(delta),
            scenario,
        }
    }

    /// One random draw
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Sample {
        let h1 = rng.gen_range(0..self.h0.len());
        let h2 = rng.gen_range(0..self.h0.len());
        let p1 = rng.gen_range(0..self.p.len());
        let p2 = rng.gen_range(0..self.p.len());
        self.sample_at(h1, h2, p1, p2)
    }

    /// `count` independent draws
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Sample> {
        (0..count).map(|_| self.draw(rng)).collect()
    }
}
