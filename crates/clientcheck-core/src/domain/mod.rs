// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for clientcheck.
//!
//! This module contains pure validation logic with no I/O. Records reach the
//! domain already in memory; loading them is the job of the
//! [`RecordSource`](crate::application::ports::RecordSource) port.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Stateless**: Checkers are pure functions; compiled patterns are immutable
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod rules;
pub mod value_objects;

mod validation;

pub use entities::ClientRecord;
pub use error::ValidationError;
pub use rules::{
    Checker, validate_birthday, validate_cpf, validate_cpf_strict, validate_email, validate_name,
};
pub use validation::{FieldValidator, validate_all, validate_field, validate_properties};
pub use value_objects::{ClientField, UnknownField, ValidationPolicy};
