pub mod analysis;
pub mod answer;
pub mod answer_set;
pub mod question_id;
pub mod step;
pub mod user_profile;
