//! Core data types for the optimal defense sweep

pub mod axis;
pub mod grid;
pub mod power_table;
pub mod record;
