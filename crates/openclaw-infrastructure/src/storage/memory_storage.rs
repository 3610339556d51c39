//! In-memory key/value storage for tests and ephemeral consoles.

use std::collections::HashMap;
use std::sync::Mutex;

use openclaw_core::error::Result;
use openclaw_core::storage::{KeyValueStorage, validate_key};

/// `KeyValueStorage` kept entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStorage {
    items: Mutex<HashMap<String, String>>,
}

impl InMemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing key validation. Used to simulate records
    /// written by other versions.
    pub fn with_item(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for InMemoryKeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        let items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.remove(key);
        Ok(())
    }
}
