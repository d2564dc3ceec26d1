//! Error types for the optimal defense sweep
//!
//! Provides a unified error type and domain-specific error variants

use thiserror::Error;

/// Result type alias using OptdefError
pub type Result<T> = std::result::Result<T, OptdefError>;

/// Unified error type for sweep operations
#[derive(Debug, Error)]
pub enum OptdefError {
    // Grid construction errors
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    // Invocation errors
    #[error("Invalid argument: {0}")]
    Argument(#[from] ArgumentError),

    // Classifier evaluation errors
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    // Output sink errors
    #[error("Output error on {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Grid construction errors
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("Degenerate grid '{axis}': size {size} (need at least 2 points)")]
    Degenerate { axis: String, size: usize },

    #[error("Fixed-point grid '{axis}' must have start == end, got [{start}, {end}]")]
    SpreadFixedPoint { axis: String, start: f32, end: f32 },

    #[error("Non-finite bound on grid '{axis}': [{start}, {end}]")]
    NonFinite { axis: String, start: f32, end: f32 },

    #[error("Grid '{axis}' needs at least {minimum} points for this stage, got {size}")]
    TooSmall {
        axis: String,
        size: usize,
        minimum: usize,
    },
}

/// Command-line and partitioning errors
#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    #[error("Unrecognized split axis '{token}' (expected one of: {allowed})")]
    UnknownAxis { token: String, allowed: String },

    #[error("Split axis '{axis}' requires both a shift and a length")]
    MissingRange { axis: char },

    #[error("Cannot parse {field} '{value}' as a non-negative integer")]
    Unparsable { field: &'static str, value: String },

    #[error("Slice length must be at least 1 on axis '{axis}'")]
    EmptySlice { axis: char },

    #[error("Slice [{shift}, {end}) exceeds axis '{axis}' of size {size}")]
    OutOfRange {
        axis: char,
        shift: usize,
        end: usize,
        size: usize,
    },

    #[error("Sample size must be positive")]
    NoSamples,
}

/// Slope sweep bookkeeping errors
#[derive(Debug, Error, PartialEq)]
pub enum EvaluationError {
    #[error("No slope candidates to sweep")]
    NoSlopes,

    #[error(
        "Scenario {scenario} total changed across slopes: {expected} at first slope, {actual} at slope {slope}"
    )]
    InconsistentTotals {
        scenario: usize,
        expected: usize,
        actual: usize,
        slope: f32,
    },
}

impl OptdefError {
    /// Wrap an I/O failure with the path it happened on
    pub fn output(path: impl Into<String>, source: std::io::Error) -> Self {
        OptdefError::Output {
            path: path.into(),
            source,
        }
    }
}

impl From<anyhow::Error> for OptdefError {
    fn from(err: anyhow::Error) -> Self {
        OptdefError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OptdefError::Grid(GridError::Degenerate {
            axis: "x".to_string(),
            size: 1,
        });
        assert!(err.to_string().contains("size 1"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = ArgumentError::OutOfRange {
            axis: 'a',
            shift: 18,
            end: 22,
            size: 20,
        };
        assert!(err.to_string().contains("[18, 22)"));
        assert!(err.to_string().contains("size 20"));
    }

    #[test]
    fn test_output_error_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = OptdefError::output("/tmp/out.csv", io);
        assert!(err.to_string().contains("/tmp/out.csv"));
    }
}
