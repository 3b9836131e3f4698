use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid answer for {question}: {value} {location}")]
    InvalidAnswer {
        question: String,
        value: String,
        location: ErrorLocation,
    },

    #[error("Step {step} does not accept {action} {location}")]
    InvalidStep {
        step: String,
        action: &'static str,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an invalid answer error
    #[track_caller]
    pub fn invalid_answer<Q: ToString, V: ToString>(question: Q, value: V) -> Self {
        CoreError::InvalidAnswer {
            question: question.to_string(),
            value: value.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an error for an action the current step cannot perform
    #[track_caller]
    pub fn invalid_step<S: ToString>(step: S, action: &'static str) -> Self {
        CoreError::InvalidStep {
            step: step.to_string(),
            action,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
