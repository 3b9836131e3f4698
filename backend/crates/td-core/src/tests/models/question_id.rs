use crate::{QuestionId, QuestionKind};

#[test]
fn test_question_id_display_matches_serialized_key() {
    for question in QuestionId::ALL {
        let json = serde_json::to_string(&question).unwrap();
        assert_eq!(json, format!("\"{question}\""));
    }
}

#[test]
fn test_question_id_kinds() {
    assert_eq!(QuestionId::Tinnitus.kind(), QuestionKind::Scale);
    assert_eq!(QuestionId::Feedback.kind(), QuestionKind::Scale);
    assert!(matches!(
        QuestionId::Location.kind(),
        QuestionKind::Choice(options) if options == ["Home", "Work", "Other"]
    ));
}

#[test]
fn test_question_id_serializes_as_storage_key() {
    let json = serde_json::to_string(&QuestionId::Intoxication).unwrap();
    assert_eq!(json, "\"intoxication\"");
}
