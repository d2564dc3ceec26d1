//! Fitness module
pub mod model;

pub use self::model::{FitnessModel, FitnessParams};
