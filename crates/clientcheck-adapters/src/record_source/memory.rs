//! In-memory record source for tests and embedding.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use clientcheck_core::{
    application::{ApplicationError, ports::RecordSource},
    domain::ClientRecord,
    error::CoreResult,
};

/// Thread-safe keyed store of client records.
#[derive(Clone, Default)]
pub struct InMemoryRecordSource {
    inner: Arc<RwLock<HashMap<String, ClientRecord>>>,
}

impl InMemoryRecordSource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record stored under `key`.
    pub fn insert(&self, key: impl Into<String>, record: ClientRecord) -> CoreResult<()> {
        let key = key.into();
        let mut inner = self.inner.write().map_err(|_| lock_error(&key))?;
        inner.insert(key, record);
        Ok(())
    }

    /// Remove and return the record stored under `key`.
    pub fn remove(&self, key: &str) -> CoreResult<Option<ClientRecord>> {
        let mut inner = self.inner.write().map_err(|_| lock_error(key))?;
        Ok(inner.remove(key))
    }

    /// Number of stored records.
    pub fn len(&self) -> CoreResult<usize> {
        let inner = self.inner.read().map_err(|_| lock_error("in-memory store"))?;
        Ok(inner.len())
    }

    pub fn is_empty(&self) -> CoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl RecordSource for InMemoryRecordSource {
    fn load(&self, location: &str) -> CoreResult<ClientRecord> {
        let inner = self.inner.read().map_err(|_| lock_error(location))?;

        inner.get(location).cloned().ok_or_else(|| {
            ApplicationError::RecordNotFound {
                location: location.to_owned(),
            }
            .into()
        })
    }
}

fn lock_error(location: &str) -> ApplicationError {
    ApplicationError::SourceFailed {
        location: location.to_owned(),
        reason: "record store lock poisoned".into(),
    }
}
