//! Flat submission record sent to the analysis backend.
//!
//! The record is rendered as a two-line CSV blob: a header row and one data
//! row. Fields are joined with commas and are **not** escaped. The backend
//! parses this format as-is, so a comma or newline in a value would shift
//! columns. `unsafe_fields` reports such values so callers can log them.

use crate::{AnswerSet, QuestionId, UserProfile};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

pub const ANONYMOUS_UID: &str = "anonymous";

pub const CSV_HEADERS: [&str; 10] = [
    "uid",
    "tinnitus-initial",
    "stress",
    "sleep",
    "noise",
    "intoxication",
    "location",
    "feedback",
    "is_private",
    "timestamp",
];

/// Derived at submission time, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub uid: String,
    pub tinnitus: String,
    pub stress: String,
    pub sleep: String,
    pub noise: String,
    pub intoxication: String,
    pub location: String,
    pub feedback: String,
    pub is_private: String,
    pub timestamp: String,
    #[serde(skip)]
    pub with_feedback: bool,
}

impl SubmissionRecord {
    /// Build a record stamped with the current time.
    pub fn build(profile: Option<&UserProfile>, answers: &AnswerSet, include_feedback: bool) -> Self {
        Self::build_at(profile, answers, include_feedback, Utc::now())
    }

    /// Build a record stamped with `timestamp`.
    ///
    /// Without `include_feedback` the feedback column stays empty, even if an
    /// earlier pass left a feedback answer behind.
    pub fn build_at(
        profile: Option<&UserProfile>,
        answers: &AnswerSet,
        include_feedback: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let uid = profile
            .and_then(|p| p.id.clone())
            .unwrap_or_else(|| ANONYMOUS_UID.to_string());
        let is_private = profile.map(|p| p.is_private).unwrap_or(false);
        let feedback = if include_feedback {
            answers.field(QuestionId::Feedback)
        } else {
            String::new()
        };

        Self {
            uid,
            tinnitus: answers.field(QuestionId::Tinnitus),
            stress: answers.field(QuestionId::Stress),
            sleep: answers.field(QuestionId::Sleep),
            noise: answers.field(QuestionId::Noise),
            intoxication: answers.field(QuestionId::Intoxication),
            location: answers.field(QuestionId::Location),
            feedback,
            is_private: is_private.to_string(),
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            with_feedback: include_feedback,
        }
    }

    /// Fields in column order
    pub fn fields(&self) -> [&str; 10] {
        [
            self.uid.as_str(),
            self.tinnitus.as_str(),
            self.stress.as_str(),
            self.sleep.as_str(),
            self.noise.as_str(),
            self.intoxication.as_str(),
            self.location.as_str(),
            self.feedback.as_str(),
            self.is_private.as_str(),
            self.timestamp.as_str(),
        ]
    }

    pub fn to_csv(&self) -> String {
        format!("{}\n{}", CSV_HEADERS.join(","), self.fields().join(","))
    }

    /// Column names whose value would corrupt the unescaped CSV row.
    pub fn unsafe_fields(&self) -> Vec<&'static str> {
        CSV_HEADERS
            .iter()
            .zip(self.fields())
            .filter(|(_, value)| value.contains([',', '\n', '\r']))
            .map(|(header, _)| *header)
            .collect()
    }
}
