use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] td_config::ConfigError),

    #[error("{0}")]
    Core(#[from] td_core::CoreError),

    #[error("Storage error: {0}")]
    Store(#[from] td_store::StoreError),

    #[error("Backend error: {0}")]
    Client(#[from] td_client::ClientError),

    #[error("Terminal I/O error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for CliError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
