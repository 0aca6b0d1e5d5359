//! Application ports (traits) for external dependencies.
//!
//! Driven ports are called by the application and implemented by
//! infrastructure in `clientcheck-adapters`.

use crate::domain::ClientRecord;
use crate::error::CoreResult;

/// Port for loading client records.
///
/// Implemented by:
/// - `clientcheck_adapters::FileRecordSource` (JSON / TOML files)
/// - `clientcheck_adapters::InMemoryRecordSource` (testing, embedding)
#[cfg_attr(test, mockall::automock)]
pub trait RecordSource: Send + Sync {
    /// Load the record identified by `location`.
    ///
    /// What a location means is up to the adapter: a file path, a key, etc.
    fn load(&self, location: &str) -> CoreResult<ClientRecord>;
}
