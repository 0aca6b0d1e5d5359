//! Application services (use case orchestrators).
//!
//! Services coordinate domain logic and driven ports.

pub mod validation_service;

pub use validation_service::ValidationService;
