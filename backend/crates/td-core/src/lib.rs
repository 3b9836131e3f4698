pub mod error;
pub mod models;
pub mod record;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::analysis::{Analysis, AnalysisSource, InterventionScore, MOCK_ANALYSIS};
pub use models::answer::Answer;
pub use models::answer_set::AnswerSet;
pub use models::question_id::{
    INTOXICATION_OPTIONS, LOCATION_OPTIONS, QuestionId, QuestionKind, SCALE_MAX, SCALE_MIN,
};
pub use models::step::{HYDRATE_PREVIOUS_ANSWERS, Step};
pub use models::user_profile::{SEX_OPTIONS, UserProfile};
pub use record::{ANONYMOUS_UID, CSV_HEADERS, SubmissionRecord};
