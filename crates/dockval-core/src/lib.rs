//! dockval Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for validating
//! space station docking forms, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           dockval-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Clock)                    │
//! └──────────────────┬──────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Validator, rules, form validators)    │
//! │             No I/O                      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use dockval_core::domain::{FormData, validate_spacecraft};
//!
//! let form = FormData::new()
//!     .with("name", "Voyager")
//!     .with("type", "Explorer")
//!     .with("captain", "Janeway@Delta");
//!
//! let errors = validate_spacecraft(&form);
//! assert_eq!(errors.get("captain"), Some("Captain name contains invalid characters"));
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Clock, FixedClock, SystemClock, ValidationReport, ValidationService,
    };
    pub use crate::domain::{
        DockingRequest, DockingStatus, FieldDescriptor, FieldValue, FormData, FormKind,
        Spacecraft, ValidationErrors, ValidationRule, Validator, create_string_field_validator,
        rules, validate_docking, validate_docking_at, validate_spacecraft,
    };
    pub use crate::error::{DockvalError, DockvalResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
