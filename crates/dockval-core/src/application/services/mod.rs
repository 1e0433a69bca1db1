//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "validate this submitted form".

pub mod validation_service;

pub use validation_service::{ValidationReport, ValidationService};
