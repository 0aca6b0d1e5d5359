//! Record source adapters.

mod file;
mod memory;

pub use file::{FileRecordSource, RecordFormat};
pub use memory::InMemoryRecordSource;
