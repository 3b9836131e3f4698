mod analysis;
mod answer;
mod answer_set;
mod question_id;
mod step;
mod user_profile;
