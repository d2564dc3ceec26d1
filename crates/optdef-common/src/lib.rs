//! # Optdef Common
//!
//! Shared types and errors for the optimal defense level sweep.
//!
//! ## Core Types
//!
//! - [`Grid`]: uniformly spaced axis (defense level, H0, p, side parameters, slopes)
//! - [`AxisSpec`]: declarative `start / end / size` description of a grid
//! - [`PowerTable`]: precomputed `x^e` lookup rows
//! - [`Axis`] / [`AxisRanges`]: named axes and the slice of each a run covers
//! - [`Scenario`] / [`Direction`]: sample classification labels
//! - [`ResultRecord`]: best slope and accuracy per scenario for one cell

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ArgumentError, EvaluationError, GridError, OptdefError, Result};
pub use types::{
    axis::{Axis, AxisRanges, AxisSizes},
    grid::{AxisSpec, Grid},
    power_table::PowerTable,
    record::{Direction, ResultRecord, Scenario, ScenarioScore},
};

/// Optdef version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of scenarios a sample can fall into
pub const SCENARIO_COUNT: usize = 3;

/// Defense-level grid
pub const X_AXIS: AxisSpec = AxisSpec::new(0.0, 1.0, 1000);

/// Host investment H0
pub const H_AXIS: AxisSpec = AxisSpec::new(0.0, 2.0, 20);

/// Probability p
pub const P_AXIS: AxisSpec = AxisSpec::new(0.0, 1.0, 10);

/// Exponent a
pub const A_AXIS: AxisSpec = AxisSpec::new(1.0, 3.0, 20);

/// Exponent b for the Monte Carlo sweep
pub const B_AXIS: AxisSpec = AxisSpec::new(1.0, 3.0, 20);

/// Exponent b for the boundary scan
pub const BOUNDARY_B_AXIS: AxisSpec = AxisSpec::new(0.0, 3.0, 30);

/// Cost c
pub const C_AXIS: AxisSpec = AxisSpec::new(0.0, 1.0, 10);

/// Interaction λ
pub const L_AXIS: AxisSpec = AxisSpec::new(-1.0, 1.0, 20);

/// Slope candidates for the classifier sweep
pub const SLOPE_AXIS: AxisSpec = AxisSpec::new(-10.0, 10.0, 200);

/// Monte Carlo draws per cell
pub const SAMPLE_SIZE: usize = 10_000;

/// Boundary scan keeps only cells with b at or below this value
pub const BOUNDARY_B_LIMIT: f32 = 1.0;
