use crate::{Answer, HYDRATE_PREVIOUS_ANSWERS, QuestionId, Step};

#[test]
fn test_step_sequence_is_linear() {
    let mut step = Step::Profile;
    let mut visited = vec![step];
    while step != Step::Feedback {
        step = step.next();
        visited.push(step);
    }

    assert_eq!(
        visited,
        vec![
            Step::Profile,
            Step::Tinnitus,
            Step::Stress,
            Step::Sleep,
            Step::Noise,
            Step::Intoxication,
            Step::Location,
            Step::Results,
            Step::Feedback,
        ]
    );
    assert_eq!(Step::Feedback.next(), Step::Tinnitus);
}

#[test]
fn test_initial_values_are_fresh_defaults() {
    assert!(!HYDRATE_PREVIOUS_ANSWERS);
    assert_eq!(Step::Tinnitus.initial_value(), Some(Answer::Scale(3.0)));
    assert_eq!(Step::Feedback.initial_value(), Some(Answer::Scale(3.0)));
    assert_eq!(Step::Location.initial_value(), Some(Answer::from("Work")));
    assert_eq!(Step::Intoxication.initial_value(), Some(Answer::from("Smoke")));
    assert_eq!(Step::Profile.initial_value(), None);
    assert_eq!(Step::Results.initial_value(), None);
}

#[test]
fn test_initial_values_are_valid_answers() {
    for step in [
        Step::Tinnitus,
        Step::Stress,
        Step::Sleep,
        Step::Noise,
        Step::Intoxication,
        Step::Location,
        Step::Feedback,
    ] {
        let value = step.initial_value().unwrap();
        assert!(step.accept(&value).is_ok(), "{step} default rejected");
    }
}

#[test]
fn test_accept_returns_question() {
    assert_eq!(
        Step::Noise.accept(&Answer::Scale(1.0)).unwrap(),
        QuestionId::Noise
    );
    assert!(Step::Results.accept(&Answer::Scale(1.0)).is_err());
    assert!(Step::Location.accept(&Answer::from("Beach")).is_err());
}

#[test]
fn test_only_location_and_feedback_submit() {
    assert!(Step::Location.submits());
    assert!(Step::Feedback.submits());
    assert!(!Step::Intoxication.submits());
    assert!(!Step::Results.submits());
}
