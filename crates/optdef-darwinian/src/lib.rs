//! # Darwinian
//!
//! Optimal defense level engine for the host/defense fitness model.
//!
//! ## Fitness Formula
//!
//! ```text
//! W(γ) = -γ^b - H0 × (pg + ps + λ × pg × ps)
//! pg   = p × (1 - γ)
//! ps   = (1 - p) × (1 - γ^a + c × (γ - γ^a))
//! ```
//!
//! Where:
//! - γ: Defense level (0-1)
//! - H0: Host investment
//! - p: Probability
//! - a, b: Exponents of benefit and cost
//! - c: Cost coefficient
//! - λ: Interaction between the two loss terms
//!
//! ## Monte Carlo Evaluation
//!
//! For each (a, b, c, λ) cell the optimal surface over (H0, p) is solved
//! exhaustively, random perturbations are classified into three scenarios by
//! the sign of the surface's p-derivative, and a sweep of linear thresholds
//! `s × Δp` vs `ΔH0` picks the slope that best predicts the direction the
//! optimum moves.

pub mod boundary;
pub mod evaluation;
pub mod fitness;
pub mod landscape;
pub mod pipeline;
pub mod sampling;
pub mod surface;

use optdef_common::{AxisSpec, SAMPLE_SIZE, SLOPE_AXIS};
use serde::{Deserialize, Serialize};

pub use boundary::{BoundaryPoint, BoundaryScan};
pub use landscape::{GridSpecs, Landscape, SideParams};
pub use pipeline::{cell_seed, cells, CellIndex, CellOutcome, MonteCarlo};

/// Monte Carlo stage configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    /// Draws per cell
    pub sample_size: usize,
    /// Slope candidates swept by the classifier
    pub slopes: AxisSpec,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            sample_size: SAMPLE_SIZE,
            slopes: SLOPE_AXIS,
        }
    }
}
