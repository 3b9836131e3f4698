use crate::{KeyValueStore, Result as StoreErrorResult, StoreError};

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// In-process store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[track_caller]
    fn items(&self) -> StoreErrorResult<MutexGuard<'_, BTreeMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| StoreError::unavailable("memory store lock poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreErrorResult<Option<String>> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreErrorResult<()> {
        self.items()?.remove(key);
        Ok(())
    }

    fn remove_items(&self, keys: &[&str]) -> StoreErrorResult<()> {
        let mut items = self.items()?;
        for key in keys {
            items.remove(*key);
        }
        Ok(())
    }

    fn all_keys(&self) -> StoreErrorResult<Vec<String>> {
        Ok(self.items()?.keys().cloned().collect())
    }
}
