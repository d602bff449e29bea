//! Error types for QSense
//!
//! Gantree: L0_Foundation → Errors
//!
//! Numerical domain issues (Ramsey wrap-around, probability drift) are not
//! errors. Only caller contract violations on construction parameters are.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for QSense
/// Gantree: QsenseError // enum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QsenseError {
    // ========================================================================
    // Sequence Errors
    // ========================================================================
    /// Multi-echo sequence requested with no echo phases
    /// Gantree: EmptyEchoPhases // 빈 에코 위상
    #[error("Multi-spin-echo requires at least one echo phase, got an empty list")]
    EmptyEchoPhases,

    /// Wait duration negative or not finite
    /// Gantree: InvalidDuration(f64) // 대기 시간
    #[error("Invalid duration {0}: must be finite and >= 0")]
    InvalidDuration(f64),

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Named numeric parameter out of its domain
    #[error("Invalid parameter {name} = {value}: must be finite")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Invalid axis step
    #[error("Invalid axis step: {0}")]
    InvalidStep(String),

    /// Experiment configuration rejected
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(String),
}

/// Result type alias for QSense operations
/// Gantree: QsenseResult<T> // type alias
pub type QsenseResult<T> = Result<T, QsenseError>;

// ============================================================================
// Error Conversion Helpers
// ============================================================================

impl From<serde_json::Error> for QsenseError {
    fn from(err: serde_json::Error) -> Self {
        QsenseError::JsonError(err.to_string())
    }
}

// ============================================================================
// Error Helpers
// ============================================================================

impl QsenseError {
    /// Check if error is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            QsenseError::EmptyEchoPhases
                | QsenseError::InvalidDuration(_)
                | QsenseError::InvalidParameter { .. }
                | QsenseError::InvalidStep(_)
                | QsenseError::InvalidConfig(_)
        )
    }

    /// Require a finite value for a named parameter
    pub fn check_finite(name: &'static str, value: f64) -> QsenseResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(QsenseError::InvalidParameter { name, value })
        }
    }

    /// Require a finite, non-negative duration
    pub fn check_duration(duration: f64) -> QsenseResult<f64> {
        if duration.is_finite() && duration >= 0.0 {
            Ok(duration)
        } else {
            Err(QsenseError::InvalidDuration(duration))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QsenseError::InvalidDuration(-1.5);
        assert!(err.to_string().contains("-1.5"));

        let err = QsenseError::InvalidParameter {
            name: "detuning_strength",
            value: f64::NAN,
        };
        assert!(err.to_string().contains("detuning_strength"));
    }

    #[test]
    fn test_empty_echo_message() {
        let msg = QsenseError::EmptyEchoPhases.to_string();
        assert!(msg.contains("at least one echo phase"));
    }

    #[test]
    fn test_is_validation_error() {
        assert!(QsenseError::EmptyEchoPhases.is_validation_error());
        assert!(QsenseError::InvalidDuration(-1.0).is_validation_error());
        assert!(!QsenseError::JsonError("eof".into()).is_validation_error());
    }

    #[test]
    fn test_checks() {
        assert_eq!(QsenseError::check_duration(0.0), Ok(0.0));
        assert!(QsenseError::check_duration(-0.1).is_err());
        assert!(QsenseError::check_duration(f64::INFINITY).is_err());
        assert!(QsenseError::check_finite("x", f64::NAN).is_err());
        assert_eq!(QsenseError::check_finite("x", -2.0), Ok(-2.0));
    }

    #[test]
    fn test_from_json_error() {
        let err: QsenseError = serde_json::from_str::<f64>("not json").unwrap_err().into();
        assert!(matches!(err, QsenseError::JsonError(_)));
    }
}
