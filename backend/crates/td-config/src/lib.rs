mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "TD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".tonedown";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_API_TIMEOUT_SECS: u64 = 5;
const MIN_API_TIMEOUT_SECS: u64 = 1;
const MAX_API_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MOCK_ANALYSIS: bool = false;

const DEFAULT_STORAGE_FILENAME: &str = "session.json";

const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
