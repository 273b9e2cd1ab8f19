//! Error types.
//!
//! Every user-visible failure is a rejected input: a malformed distance
//! matrix or an out-of-range parameter. Once a run has started it always
//! produces a result.

use thiserror::Error;

/// Errors surfaced by the ACO solver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// The distance matrix or configuration was rejected before any
    /// simulation started.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// The specific reason an input was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A row has the wrong number of entries.
    #[error("distance matrix is not square: expected {expected} entries in row {row}, got {actual}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A flat row-major buffer does not hold `size * size` values.
    #[error("flat distance buffer for {size} cities must hold size * size values, got {actual}")]
    BufferLength { size: usize, actual: usize },

    /// Fewer than two cities.
    #[error("at least 2 cities are required, got {0}")]
    TooFewCities(usize),

    /// `distance(i, i)` is not zero.
    #[error("diagonal entry ({index}, {index}) must be 0, got {value}")]
    NonZeroDiagonal { index: usize, value: f64 },

    /// An off-diagonal distance is zero, negative, or not finite.
    #[error("distance ({from}, {to}) must be positive and finite, got {value}")]
    NonPositiveDistance { from: usize, to: usize, value: f64 },

    /// `distance(i, j)` and `distance(j, i)` differ by more than the tolerance.
    #[error("distance matrix is asymmetric at ({from}, {to}): {forward} vs {backward}")]
    Asymmetric {
        from: usize,
        to: usize,
        forward: f64,
        backward: f64,
    },

    /// A solver parameter is outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl InputError {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        InputError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
