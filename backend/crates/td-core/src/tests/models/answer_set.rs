use crate::{Answer, AnswerSet, QuestionId};

#[test]
fn test_later_insert_overwrites() {
    let mut answers = AnswerSet::new();
    answers.insert(QuestionId::Stress, Answer::Scale(2.0));
    let previous = answers.insert(QuestionId::Stress, Answer::Scale(5.0));

    assert_eq!(previous, Some(Answer::Scale(2.0)));
    assert_eq!(answers.get(QuestionId::Stress), Some(&Answer::Scale(5.0)));
    assert_eq!(answers.len(), 1);
}

#[test]
fn test_missing_field_renders_empty() {
    let answers = AnswerSet::new();
    assert_eq!(answers.field(QuestionId::Feedback), "");
}

#[test]
fn test_json_uses_question_keys() {
    let answers: AnswerSet = [
        (QuestionId::Tinnitus, Answer::Scale(4.0)),
        (QuestionId::Location, Answer::from("Home")),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_value(&answers).unwrap();
    assert_eq!(json["tinnitus"], 4.0);
    assert_eq!(json["location"], "Home");

    let parsed: AnswerSet = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, answers);
}
