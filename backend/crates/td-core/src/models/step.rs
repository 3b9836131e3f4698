use crate::{Answer, CoreError, QuestionId, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// Steps never pre-fill from a previously saved answer. Every pass re-asks
/// each question starting from `Step::initial_value`.
pub const HYDRATE_PREVIOUS_ANSWERS: bool = false;

const SCALE_DEFAULT: f64 = 3.0;
const INTOXICATION_DEFAULT: &str = "Smoke";
const LOCATION_DEFAULT: &str = "Work";

/// Position in the linear questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Onboarding, writes the user profile
    #[default]
    Profile,
    Tinnitus,
    Stress,
    Sleep,
    Noise,
    Intoxication,
    /// Last question, submits the record on advance
    Location,
    Results,
    Feedback,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Tinnitus => "tinnitus",
            Self::Stress => "stress",
            Self::Sleep => "sleep",
            Self::Noise => "noise",
            Self::Intoxication => "intoxication",
            Self::Location => "location",
            Self::Results => "results",
            Self::Feedback => "feedback",
        }
    }

    /// Fixed successor. Feedback starts a new pass.
    pub fn next(&self) -> Step {
        match self {
            Self::Profile => Self::Tinnitus,
            Self::Tinnitus => Self::Stress,
            Self::Stress => Self::Sleep,
            Self::Sleep => Self::Noise,
            Self::Noise => Self::Intoxication,
            Self::Intoxication => Self::Location,
            Self::Location => Self::Results,
            Self::Results => Self::Feedback,
            Self::Feedback => Self::Tinnitus,
        }
    }

    /// Question answered at this step, if any
    pub fn question(&self) -> Option<QuestionId> {
        match self {
            Self::Tinnitus => Some(QuestionId::Tinnitus),
            Self::Stress => Some(QuestionId::Stress),
            Self::Sleep => Some(QuestionId::Sleep),
            Self::Noise => Some(QuestionId::Noise),
            Self::Intoxication => Some(QuestionId::Intoxication),
            Self::Location => Some(QuestionId::Location),
            Self::Feedback => Some(QuestionId::Feedback),
            Self::Profile | Self::Results => None,
        }
    }

    /// Value shown when the step opens.
    pub fn initial_value(&self) -> Option<Answer> {
        match self.question()? {
            QuestionId::Intoxication => Some(Answer::from(INTOXICATION_DEFAULT)),
            QuestionId::Location => Some(Answer::from(LOCATION_DEFAULT)),
            _ => Some(Answer::Scale(SCALE_DEFAULT)),
        }
    }

    /// Whether advancing from this step submits a record
    pub fn submits(&self) -> bool {
        matches!(self, Self::Location | Self::Feedback)
    }

    /// Validate an answer for this step and return the question it belongs to.
    #[track_caller]
    pub fn accept(&self, answer: &Answer) -> CoreErrorResult<QuestionId> {
        let question = self
            .question()
            .ok_or_else(|| CoreError::invalid_step(self, "an answer"))?;
        answer.validate(question)?;
        Ok(question)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
