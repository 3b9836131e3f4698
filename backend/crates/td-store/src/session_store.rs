//! Session persistence for profile, answers and selected intervention.
//!
//! Reads never fail: missing, unreadable or corrupt values come back as
//! absent or empty and are logged. Writes of profile and answers are best
//! effort. Only `reset_all` and `clear_all` surface store errors, since a
//! silent partial reset would leave the user stuck with stale data.

use crate::{KeyValueStore, Result as StoreErrorResult, StoreError};

use td_core::{Answer, AnswerSet, QuestionId, UserProfile};

use chrono::Utc;
use log::{debug, error, info, warn};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

pub const USER_DATA_KEY: &str = "userData";
pub const QUESTION_RESPONSES_KEY: &str = "questionResponses";
pub const SELECTED_INTERVENTION_KEY: &str = "selectedIntervention";
pub const SETUP_COMPLETE_KEY: &str = "setupComplete";
pub const USER_INFO_KEY: &str = "userInfo";

/// Keys removed by `reset_all`
pub const SESSION_KEYS: [&str; 5] = [
    USER_DATA_KEY,
    QUESTION_RESPONSES_KEY,
    SELECTED_INTERVENTION_KEY,
    SETUP_COMPLETE_KEY,
    USER_INFO_KEY,
];

pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying key/value store
    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Persist the profile, assigning an id if it has none.
    ///
    /// A profile without an id keeps the id already stored, so identity is
    /// derived exactly once. On store failure the profile is still returned.
    pub fn save_profile(&self, mut profile: UserProfile) -> UserProfile {
        if profile.id.is_none() {
            profile.id = self.get_profile().and_then(|stored| stored.id);
        }
        if profile.id.is_none() && !profile.name.is_empty() {
            profile.id = Some(UserProfile::derive_id(&profile.name, Utc::now()));
        }

        if let Err(e) = self.write_json(USER_DATA_KEY, &profile) {
            error!("Error saving user data: {e}");
        }
        profile
    }

    pub fn get_profile(&self) -> Option<UserProfile> {
        self.read_json(USER_DATA_KEY)
    }

    /// Toggle privacy mode on the stored profile.
    pub fn set_privacy(&self, is_private: bool) -> Option<UserProfile> {
        let Some(profile) = self.get_profile() else {
            warn!("Cannot set privacy mode: no user profile stored");
            return None;
        };

        Some(self.save_profile(UserProfile {
            is_private,
            ..profile
        }))
    }

    // =========================================================================
    // Answers
    // =========================================================================

    /// Set one answer, leaving the others untouched.
    ///
    /// Stored entries are merged as raw JSON, so entries this version cannot
    /// parse are written back unchanged.
    pub fn save_answer(&self, question: QuestionId, answer: Answer) {
        let mut responses = self.read_responses();
        let value = match serde_json::to_value(&answer) {
            Ok(value) => value,
            Err(e) => {
                error!("Error saving question response for {question}: {e}");
                return;
            }
        };
        responses.insert(question.as_str().to_string(), value);

        match self.write_json(QUESTION_RESPONSES_KEY, &responses) {
            Ok(()) => debug!("Saved answer for {question}"),
            Err(e) => error!("Error saving question response for {question}: {e}"),
        }
    }

    /// Stored answers. Entries that do not parse are skipped, not fatal.
    pub fn get_all_answers(&self) -> AnswerSet {
        self.read_responses()
            .into_iter()
            .filter_map(|(key, value)| {
                let question = serde_json::from_value::<QuestionId>(Value::String(key.clone()));
                let answer = serde_json::from_value::<Answer>(value);
                match (question, answer) {
                    (Ok(question), Ok(answer)) => Some((question, answer)),
                    (Err(e), _) | (_, Err(e)) => {
                        warn!("Skipping stored answer '{key}': {e}");
                        None
                    }
                }
            })
            .collect()
    }

    fn read_responses(&self) -> Map<String, Value> {
        match self.read_json::<Value>(QUESTION_RESPONSES_KEY) {
            Some(Value::Object(responses)) => responses,
            Some(other) => {
                warn!("Discarding stored answers: expected an object, found {other}");
                Map::new()
            }
            None => Map::new(),
        }
    }

    // =========================================================================
    // Selected intervention
    // =========================================================================

    pub fn save_selected_intervention(&self, label: &str) {
        if let Err(e) = self.store.set_item(SELECTED_INTERVENTION_KEY, label) {
            error!("Error saving selected intervention: {e}");
        }
    }

    pub fn get_selected_intervention(&self) -> Option<String> {
        self.store
            .get_item(SELECTED_INTERVENTION_KEY)
            .unwrap_or_else(|e| {
                error!("Error retrieving selected intervention: {e}");
                None
            })
    }

    // =========================================================================
    // Onboarding flag
    // =========================================================================

    pub fn mark_setup_complete(&self) {
        if let Err(e) = self.store.set_item(SETUP_COMPLETE_KEY, "true") {
            error!("Error saving setup flag: {e}");
        }
    }

    pub fn is_setup_complete(&self) -> bool {
        matches!(self.store.get_item(SETUP_COMPLETE_KEY), Ok(Some(v)) if v == "true")
    }

    // =========================================================================
    // Reset
    // =========================================================================

    /// Remove profile, answers, selection and onboarding flags.
    ///
    /// If the store rejects the combined removal, each key is still removed
    /// on its own before the original error is returned.
    pub fn reset_all(&self) -> StoreErrorResult<()> {
        match self.store.remove_items(&SESSION_KEYS) {
            Ok(()) => {
                info!("User data reset successfully");
                Ok(())
            }
            Err(e) => {
                error!("Failed to reset user data: {e}");
                for key in SESSION_KEYS {
                    if let Err(e) = self.store.remove_item(key) {
                        warn!("Could not remove '{key}' after failed reset: {e}");
                    }
                }
                Err(e)
            }
        }
    }

    /// Remove every key in the store, including ones this module does not own.
    pub fn clear_all(&self) -> StoreErrorResult<()> {
        let keys = self.store.all_keys()?;
        let keys: Vec<&str> = keys.iter().map(String::as_str).collect();

        self.store.remove_items(&keys).inspect_err(|e| {
            error!("Error clearing data: {e}");
        })?;

        info!("All user data cleared successfully");
        Ok(())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                error!("Error retrieving '{key}': {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("{}", StoreError::corrupt(key, e));
                None
            }
        }
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> StoreErrorResult<()> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::corrupt(key, e))?;
        self.store.set_item(key, &raw)
    }
}
