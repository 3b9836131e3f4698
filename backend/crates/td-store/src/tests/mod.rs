
use crate::{KeyValueStore, MemoryStore, Result as StoreErrorResult, StoreError};

/// Store double that can be told to fail specific operations.
#[derive(Default)]
pub(crate) struct FlakyStore {
    pub(crate) inner: MemoryStore,
    pub(crate) fail_reads: bool,
    pub(crate) fail_writes: bool,
    pub(crate) fail_multi_remove: bool,
}

impl KeyValueStore for FlakyStore {
    fn get_item(&self, key: &str) -> StoreErrorResult<Option<String>> {
        if self.fail_reads {
            return Err(StoreError::unavailable("reads disabled"));
        }
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        if self.fail_writes {
            return Err(StoreError::unavailable("writes disabled"));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StoreErrorResult<()> {
        self.inner.remove_item(key)
    }

    fn remove_items(&self, keys: &[&str]) -> StoreErrorResult<()> {
        if self.fail_multi_remove {
            return Err(StoreError::unavailable("multi remove disabled"));
        }
        self.inner.remove_items(keys)
    }

    fn all_keys(&self) -> StoreErrorResult<Vec<String>> {
        self.inner.all_keys()
    }
}
