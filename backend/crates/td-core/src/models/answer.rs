use crate::{CoreError, QuestionId, QuestionKind, Result as CoreErrorResult, SCALE_MAX, SCALE_MIN};

use serde::{Deserialize, Serialize};

/// A single answer value.
///
/// Serialized untagged so the stored JSON matches what the app wrote:
/// sliders as bare numbers, button choices as bare strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Scale(f64),
    Choice(String),
}

impl Answer {
    /// Parse raw user input for a question, normalizing choice labels.
    #[track_caller]
    pub fn parse(question: QuestionId, raw: &str) -> CoreErrorResult<Self> {
        let raw = raw.trim();
        match question.kind() {
            QuestionKind::Scale => {
                let value: f64 = raw
                    .parse()
                    .map_err(|_| CoreError::invalid_answer(question, raw))?;
                let answer = Answer::Scale(value);
                answer.validate(question)?;
                Ok(answer)
            }
            QuestionKind::Choice(options) => options
                .iter()
                .find(|option| option.eq_ignore_ascii_case(raw))
                .map(|option| Answer::Choice((*option).to_string()))
                .ok_or_else(|| CoreError::invalid_answer(question, raw)),
        }
    }

    /// Check that this value fits the question's scale or option list.
    #[track_caller]
    pub fn validate(&self, question: QuestionId) -> CoreErrorResult<()> {
        let valid = match (question.kind(), self) {
            (QuestionKind::Scale, Answer::Scale(v)) => {
                v.is_finite() && (SCALE_MIN..=SCALE_MAX).contains(v)
            }
            (QuestionKind::Choice(options), Answer::Choice(label)) => {
                options.contains(&label.as_str())
            }
            _ => false,
        };

        if valid {
            Ok(())
        } else {
            Err(CoreError::invalid_answer(question, self))
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Scale(v) => write!(f, "{v}"),
            Answer::Choice(label) => write!(f, "{label}"),
        }
    }
}

impl From<f64> for Answer {
    fn from(value: f64) -> Self {
        Answer::Scale(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Choice(value.to_string())
    }
}
