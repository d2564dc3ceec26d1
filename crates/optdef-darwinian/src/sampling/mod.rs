//! Monte Carlo perturbation sampling
pub mod scenario;

pub use self::scenario::{Sample, ScenarioSampler};
