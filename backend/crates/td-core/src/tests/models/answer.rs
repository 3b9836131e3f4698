use crate::{Answer, QuestionId};

#[test]
fn test_parse_scale_answer() {
    assert_eq!(
        Answer::parse(QuestionId::Stress, "2").unwrap(),
        Answer::Scale(2.0)
    );
    assert_eq!(
        Answer::parse(QuestionId::Feedback, " 3.5 ").unwrap(),
        Answer::Scale(3.5)
    );
}

#[test]
fn test_parse_scale_out_of_range_is_rejected() {
    assert!(Answer::parse(QuestionId::Sleep, "0").is_err());
    assert!(Answer::parse(QuestionId::Sleep, "6").is_err());
    assert!(Answer::parse(QuestionId::Sleep, "NaN").is_err());
    assert!(Answer::parse(QuestionId::Sleep, "loud").is_err());
}

#[test]
fn test_parse_choice_normalizes_label() {
    assert_eq!(
        Answer::parse(QuestionId::Intoxication, "am clean").unwrap(),
        Answer::from("Am Clean")
    );
    assert!(Answer::parse(QuestionId::Location, "Beach").is_err());
}

#[test]
fn test_validate_rejects_wrong_shape() {
    assert!(Answer::Scale(3.0).validate(QuestionId::Location).is_err());
    assert!(Answer::from("Home").validate(QuestionId::Tinnitus).is_err());
}

#[test]
fn test_display_renders_whole_numbers_without_fraction() {
    assert_eq!(Answer::Scale(4.0).to_string(), "4");
    assert_eq!(Answer::Scale(2.5).to_string(), "2.5");
    assert_eq!(Answer::from("Home").to_string(), "Home");
}

#[test]
fn test_untagged_json_matches_app_format() {
    let scale: Answer = serde_json::from_str("4").unwrap();
    let choice: Answer = serde_json::from_str("\"Home\"").unwrap();
    assert_eq!(scale, Answer::Scale(4.0));
    assert_eq!(choice, Answer::from("Home"));
}
