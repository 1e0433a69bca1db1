//! Application layer errors.
//!
//! These errors represent failures in orchestration, not validation.
//! A form that fails validation is reported through `ValidationReport`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The form body could not be decoded.
    #[error("Malformed form body: {reason}")]
    MalformedInput { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedInput { reason } => vec![
                format!("Could not parse the form body: {}", reason),
                "Check that the input is valid JSON".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedInput { .. } => ErrorCategory::Validation,
        }
    }
}
