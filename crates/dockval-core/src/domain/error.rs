// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================
//
// A field that fails validation is NOT an error: it is an entry in
// `ValidationErrors`. These variants cover input that cannot be validated at
// all, and typed construction of entities from a form that did not pass.

use thiserror::Error;

use crate::domain::validation::ValidationErrors;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("form failed validation: {0}")]
    InvalidForm(ValidationErrors),

    #[error("form body must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("unknown form kind '{0}'")]
    UnknownFormKind(String),

    #[error("unknown docking status '{0}'")]
    UnknownDockingStatus(String),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidForm(errors) => errors
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect(),
            Self::NotAnObject { found } => vec![
                format!("The form body is a JSON {found}"),
                "Send the fields as a JSON object, e.g. {\"bayId\": 42}".into(),
            ],
            Self::UnknownFormKind(kind) => vec![
                format!("'{kind}' is not a known form"),
                "Known forms: spacecraft, docking".into(),
            ],
            Self::UnknownDockingStatus(status) => vec![
                format!("'{status}' is not a docking status"),
                "Known statuses: scheduled, docked, departing".into(),
            ],
            Self::MissingRequiredField { .. } => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidForm(_)
            | Self::NotAnObject { .. }
            | Self::UnknownFormKind(_)
            | Self::UnknownDockingStatus(_) => ErrorCategory::Validation,
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_form_suggestions_list_each_field() {
        let errors: ValidationErrors = [("bayId", "Bay ID must be a number")].into_iter().collect();
        let err = DomainError::InvalidForm(errors);
        assert_eq!(err.suggestions(), vec!["bayId: Bay ID must be a number".to_owned()]);
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn missing_field_after_validation_is_internal() {
        let err = DomainError::MissingRequiredField { field: "name" };
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
