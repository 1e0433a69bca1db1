//! Field extraction shared by the entity constructors.
//!
//! These run after the matching domain validator has passed, so a failure
//! here means the validator and the entity disagree about the form.

use crate::domain::error::DomainError;
use crate::domain::value_objects::{FieldDescriptor, FieldValue, FormData};

pub(crate) fn text_field(data: &FormData, field: FieldDescriptor) -> Result<String, DomainError> {
    data.get(field.key)
        .and_then(FieldValue::as_str)
        .map(str::to_owned)
        .ok_or(DomainError::MissingRequiredField { field: field.key })
}

pub(crate) fn number_field(data: &FormData, field: FieldDescriptor) -> Result<f64, DomainError> {
    data.get(field.key)
        .and_then(FieldValue::as_f64)
        .ok_or(DomainError::MissingRequiredField { field: field.key })
}
