//! Slope classifier evaluation
pub mod classifier;

pub use self::classifier::{ClassifierEvaluator, SlopeTally};
