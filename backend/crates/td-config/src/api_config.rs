use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS,
    DEFAULT_MOCK_ANALYSIS, MAX_API_TIMEOUT_SECS, MIN_API_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Analysis backend connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Always show the built-in mock analysis, even when the backend answers
    pub mock_analysis: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            mock_analysis: DEFAULT_MOCK_ANALYSIS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if !(MIN_API_TIMEOUT_SECS..=MAX_API_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_API_TIMEOUT_SECS, MAX_API_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
