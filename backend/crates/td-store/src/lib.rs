//! Durable session state for the questionnaire.

pub mod error;
pub mod file_store;
pub mod key_value_store;
pub mod memory_store;
pub mod session_store;

#[cfg(test)]
mod tests;

pub use error::{Result, StoreError};
pub use file_store::FileStore;
pub use key_value_store::KeyValueStore;
pub use memory_store::MemoryStore;
pub use session_store::{
    QUESTION_RESPONSES_KEY, SELECTED_INTERVENTION_KEY, SESSION_KEYS, SETUP_COMPLETE_KEY,
    SessionStore, USER_DATA_KEY, USER_INFO_KEY,
};
