use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use crate::{Backend, StoreError};

/// Volatile store, e.g. for tests or when no data directory is available.
#[derive(Debug)]
pub struct InMemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    available: AtomicBool,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Let all subsequent operations fail with [`StoreError::Unavailable`] while unset.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.available.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(StoreError::Unavailable)
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.check_available()?;
        let entries = self.entries.lock().map_err(|_| StoreError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.check_available()?;
        let mut entries = self.entries.lock().map_err(|_| StoreError::Unavailable)?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
