use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_FILENAME};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Session file, relative to the config directory
    pub file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_STORAGE_FILENAME),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file.is_empty() {
            return Err(ConfigError::storage("storage.file cannot be empty"));
        }

        if Path::new(&self.file).is_absolute() || self.file.contains("..") {
            return Err(ConfigError::storage(
                "storage.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
