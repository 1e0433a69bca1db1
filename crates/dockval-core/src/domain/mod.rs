// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for dockval.
//!
//! This module contains pure validation logic.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: every check is synchronous
//! - **No I/O**: the only outside input is the `now` instant, passed in
//! - **No shared state**: validators are built fresh for every call
//! - **Errors as data**: field failures are entries in `ValidationErrors`,
//!   never `Err`
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod forms;
pub mod rules;
pub mod validation;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{DockingRequest, DockingStatus, Spacecraft};

pub use error::{DomainError, ErrorCategory};

pub use forms::{
    create_string_field_validator, validate_docking, validate_docking_at, validate_spacecraft,
};

pub use validation::{ValidationErrors, ValidationRule, Validator};

pub use value_objects::{FieldDescriptor, FieldValue, FormData, FormKind};
