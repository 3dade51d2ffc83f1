//! Configuration error taxonomy.
//!
//! A chart run either starts with valid parameters or not at all: every
//! sigma-bound rule degenerates when the standard deviation is zero or
//! negative, so parameter problems are rejected before the first value is
//! processed rather than surfacing later as NaN-laden output.

use thiserror::Error;

/// Errors detected while validating chart parameters.
///
/// These are fail-fast errors: no input values are processed once one is
/// raised. Rule-fired diagnostics are not errors and never pass through
/// this type.
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    /// The centerline was NaN or infinite.
    #[error("centerline must be finite, got {0}")]
    NonFiniteCenterline(f64),

    /// The standard deviation was zero, negative, NaN, or infinite.
    #[error("standard deviation must be positive and finite, got {0}")]
    InvalidStdev(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offending_value() {
        let err = ChartError::InvalidStdev(-2.0);
        assert_eq!(
            err.to_string(),
            "standard deviation must be positive and finite, got -2"
        );

        let err = ChartError::NonFiniteCenterline(f64::INFINITY);
        assert_eq!(err.to_string(), "centerline must be finite, got inf");
    }
}
