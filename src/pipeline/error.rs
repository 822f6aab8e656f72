//! Validation errors raised before any filter stage touches the data.

use thiserror::Error;

/// Errors for thresholds, bands and datasets the filters refuse to score.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    /// A negative missing-value threshold would flag every column.
    #[error("nulls threshold must be non-negative, got {0}")]
    NegativeNullsThreshold(f64),

    /// NaN thresholds make every comparison false.
    #[error("nulls threshold must be a number, got {0}")]
    NonFiniteNullsThreshold(f64),

    /// A band endpoint is NaN.
    #[error("{name} band endpoints must be numbers, got [{low}, {high}]")]
    InvalidBand {
        name: &'static str,
        low: f64,
        high: f64,
    },

    /// A band was given with the wrong number of endpoints.
    #[error("{name} band needs exactly 2 values, got {got}")]
    BandArity { name: &'static str, got: usize },

    /// Logarithm base outside (0, 1) U (1, inf).
    #[error("entropy log base must be finite, positive and different from 1, got {0}")]
    InvalidLogBase(f64),

    /// Proportions over zero rows are undefined.
    #[error("dataset has no rows; missing-value proportions are undefined")]
    EmptyDataset,
}
