use serde::{Deserialize, Serialize};

pub const INTOXICATION_OPTIONS: &[&str] = &["Alcohol", "Drugs", "Smoke", "Am Clean"];
pub const LOCATION_OPTIONS: &[&str] = &["Home", "Work", "Other"];

pub const SCALE_MIN: f64 = 1.0;
pub const SCALE_MAX: f64 = 5.0;

/// Questions asked during one questionnaire pass.
///
/// Declaration order is the column order of the submission record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Tinnitus,
    Stress,
    Sleep,
    Noise,
    Intoxication,
    Location,
    Feedback,
}

/// What shape of answer a question takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Slider from 1 to 5
    Scale,
    /// One of a fixed set of labels
    Choice(&'static [&'static str]),
}

impl QuestionId {
    pub const ALL: [QuestionId; 7] = [
        Self::Tinnitus,
        Self::Stress,
        Self::Sleep,
        Self::Noise,
        Self::Intoxication,
        Self::Location,
        Self::Feedback,
    ];

    /// Storage key representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tinnitus => "tinnitus",
            Self::Stress => "stress",
            Self::Sleep => "sleep",
            Self::Noise => "noise",
            Self::Intoxication => "intoxication",
            Self::Location => "location",
            Self::Feedback => "feedback",
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::Intoxication => QuestionKind::Choice(INTOXICATION_OPTIONS),
            Self::Location => QuestionKind::Choice(LOCATION_OPTIONS),
            _ => QuestionKind::Scale,
        }
    }

    /// Prompt shown to the user
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Tinnitus => "How loud is your tinnitus right now?",
            Self::Stress => "How stressed do you feel?",
            Self::Sleep => "How well did you sleep?",
            Self::Noise => "How much loud noise were you exposed to recently?",
            Self::Intoxication => "Have you consumed any of the following?",
            Self::Location => "Where are you at the moment?",
            Self::Feedback => "How helpful was the intervention?",
        }
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
