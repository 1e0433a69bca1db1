//! Validation Service - validate a submitted form end to end.
//!
//! This service coordinates one validation pass:
//! 1. Decode the form body (JSON text or value)
//! 2. Pick the domain validator for the form kind
//! 3. Evaluate against the injected clock
//!
//! A form that fails validation is a successful call: the failures are in
//! the returned [`ValidationReport`].

use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Clock},
    domain::{FormData, FormKind, ValidationErrors, validate_docking_at, validate_spacecraft},
    error::DockvalResult,
};

/// Outcome of validating one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub kind: FormKind,
    pub valid: bool,
    pub errors: ValidationErrors,
}

impl ValidationReport {
    fn new(kind: FormKind, errors: ValidationErrors) -> Self {
        Self {
            kind,
            valid: errors.is_valid(),
            errors,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Validates forms against an injected clock.
pub struct ValidationService {
    clock: Box<dyn Clock>,
}

impl ValidationService {
    /// Create a new validation service with the given clock.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dockval_core::application::{SystemClock, ValidationService};
    /// use dockval_core::domain::{FormData, FormKind};
    ///
    /// let service = ValidationService::new(Box::new(SystemClock));
    /// let report = service.validate(FormKind::Spacecraft, &FormData::new());
    /// assert_eq!(report.errors.len(), 3);
    /// ```
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Validate an already-decoded form.
    #[instrument(skip_all, fields(kind = %kind))]
    pub fn validate(&self, kind: FormKind, data: &FormData) -> ValidationReport {
        let errors = match kind {
            FormKind::Spacecraft => validate_spacecraft(data),
            FormKind::Docking => validate_docking_at(data, self.clock.now()),
        };

        info!(failed = errors.len(), "Form validated");
        ValidationReport::new(kind, errors)
    }

    /// Validate a JSON value. It must be an object.
    pub fn validate_value(&self, kind: FormKind, value: Value) -> DockvalResult<ValidationReport> {
        let data = FormData::try_from(value)?;
        Ok(self.validate(kind, &data))
    }

    /// Validate a JSON document.
    pub fn validate_json(&self, kind: FormKind, body: &str) -> DockvalResult<ValidationReport> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| ApplicationError::MalformedInput {
                reason: e.to_string(),
            })?;
        self.validate_value(kind, value)
    }
}
