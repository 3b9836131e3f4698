//! Single-file JSON store.
//!
//! All keys live in one JSON object at `path`. Every mutation rewrites the
//! whole document to `<path>.tmp` and renames it over the original, so a
//! reader never sees a half-written file and `remove_items` is all or
//! nothing. A document that no longer parses is replaced on the next write.

use crate::{KeyValueStore, Result as StoreErrorResult, StoreError};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::warn;

type Items = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileStore {
    /// Open a store at `path`. The file is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> StoreErrorResult<Self> {
        let path = path.into();
        Self::ensure_parent_dir(&path)?;
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(path: &Path) -> StoreErrorResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }
        Ok(())
    }

    fn load(&self) -> StoreErrorResult<Items> {
        if !self.path.exists() {
            return Ok(Items::new());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        if content.trim().is_empty() {
            return Ok(Items::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| StoreError::corrupt(self.path.display().to_string(), e))
    }

    fn save(&self, items: &Items) -> StoreErrorResult<()> {
        let content = serde_json::to_string_pretty(items)
            .map_err(|e| StoreError::corrupt(self.path.display().to_string(), e))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, content).map_err(|e| StoreError::io(&tmp, e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))
    }

    fn update<F>(&self, mutate: F) -> StoreErrorResult<()>
    where
        F: FnOnce(&mut Items),
    {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| StoreError::unavailable("file store lock poisoned"))?;
        let mut items = match self.load() {
            Err(StoreError::Corrupt { source, .. }) => {
                warn!(
                    "Discarding unreadable store {}: {}",
                    self.path.display(),
                    source
                );
                Items::new()
            }
            loaded => loaded?,
        };
        mutate(&mut items);
        self.save(&items)
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> StoreErrorResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreErrorResult<()> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> StoreErrorResult<()> {
        self.update(|items| {
            items.remove(key);
        })
    }

    fn remove_items(&self, keys: &[&str]) -> StoreErrorResult<()> {
        self.update(|items| {
            for key in keys {
                items.remove(*key);
            }
        })
    }

    /// A corrupt document has no usable keys; the next write replaces it.
    fn all_keys(&self) -> StoreErrorResult<Vec<String>> {
        match self.load() {
            Ok(items) => Ok(items.into_keys().collect()),
            Err(StoreError::Corrupt { source, .. }) => {
                warn!(
                    "Unreadable store {} lists no keys: {}",
                    self.path.display(),
                    source
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
