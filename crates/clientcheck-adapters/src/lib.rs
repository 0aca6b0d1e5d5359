//! Infrastructure adapters for clientcheck.
//!
//! This crate implements the ports defined in `clientcheck-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod record_source;

// Re-export commonly used adapters
pub use record_source::{FileRecordSource, InMemoryRecordSource, RecordFormat};
