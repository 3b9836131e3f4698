//! User profile captured at onboarding.

use crate::{CoreError, Result as CoreErrorResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sha2::{Digest, Sha256};

pub const SEX_OPTIONS: &[&str] = &["m", "f", "d"];

/// Profile of the person answering the questionnaire.
///
/// `id` is derived once from name and creation time and never regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub age: String,
    #[serde(default)]
    pub sex: String,
    /// Private profiles are excluded from group analysis
    #[serde(default)]
    pub is_private: bool,
}

impl UserProfile {
    pub fn new(name: &str, age: &str, sex: &str) -> Self {
        Self {
            id: None,
            name: name.trim().to_string(),
            age: age.trim().to_string(),
            sex: sex.trim().to_string(),
            is_private: false,
        }
    }

    /// All onboarding fields must be filled in.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.is_empty() || self.age.is_empty() || self.sex.is_empty() {
            return Err(CoreError::validation("Please fill in all fields"));
        }
        Ok(())
    }

    /// Hex SHA-256 of `"{name}-{unix_millis}"`.
    pub fn derive_id(name: &str, created_at: DateTime<Utc>) -> String {
        let digest = Sha256::digest(format!("{}-{}", name, created_at.timestamp_millis()));
        format!("{digest:x}")
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
