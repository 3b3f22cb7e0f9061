// src/error.rs
use thiserror::Error;

/// Error types for the gbm-mc library
#[derive(Debug, Error)]
pub enum GbmError {
    /// Invalid parameter values
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration (counts, sweeps, grids)
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// Option kind outside the closed {Call, Put} set
    #[error("Unsupported option kind '{kind}': expected call (1) or put (2)")]
    UnsupportedOptionKind { kind: String },

    /// Computation is undefined for the given inputs (e.g. σ√T = 0)
    #[error("Numerically degenerate result in {method}: {reason}")]
    NumericalDegenerate { method: String, reason: String },

    /// Failure writing a report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure serialising a CSV record
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure reading a configuration file
    #[error("Configuration file error: {0}")]
    Config(#[from] toml::de::Error),
}

impl GbmError {
    /// True for errors raised at an operation boundary because of bad input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GbmError::InvalidParameters { .. }
                | GbmError::InvalidConfiguration { .. }
                | GbmError::UnsupportedOptionKind { .. }
        )
    }
}

/// Result type alias for gbm-mc operations
pub type GbmResult<T> = Result<T, GbmError>;

/// Validation utilities
pub mod validation {
    use super::{GbmError, GbmResult};

    /// Validate that a parameter is strictly positive and finite
    pub fn validate_positive(name: &str, value: f64) -> GbmResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(GbmError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative and finite
    pub fn validate_non_negative(name: &str, value: f64) -> GbmResult<()> {
        validate_finite(name, value)?;
        if value < 0.0 {
            Err(GbmError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> GbmResult<()> {
        if !value.is_finite() {
            Err(GbmError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate a sample/trial/run count
    pub fn validate_count(field: &str, count: usize) -> GbmResult<()> {
        if count == 0 {
            Err(GbmError::InvalidConfiguration {
                field: field.to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("sigma", 0.2).is_ok());
        assert!(validate_positive("sigma", 0.0).is_err());
        assert!(validate_positive("sigma", -0.1).is_err());
        assert!(validate_positive("sigma", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("sigma", 0.0).is_ok());
        assert!(validate_non_negative("sigma", -1e-12).is_err());
        assert!(validate_non_negative("sigma", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_count() {
        assert!(validate_count("n", 1).is_ok());
        let err = validate_count("n", 0).unwrap_err();
        assert!(matches!(err, GbmError::InvalidConfiguration { .. }));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_error_display() {
        let error = GbmError::InvalidParameters {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_degenerate_is_not_invalid_input() {
        let error = GbmError::NumericalDegenerate {
            method: "Black-Scholes".to_string(),
            reason: "σ√T = 0".to_string(),
        };
        assert!(!error.is_invalid_input());
        assert!(error.to_string().contains("Black-Scholes"));
    }
}
