use crate::run_survey;
use crate::tests::{FakeBackend, backend_analysis, questionnaire};

use td_core::{Answer, QuestionId, Step};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, ok, some};

async fn run(backend: &FakeBackend, script: &str) -> (Step, String, td_core::AnswerSet) {
    let mut q = questionnaire(backend);
    let mut input = script.as_bytes();
    let mut out = Vec::new();

    let result = run_survey(&mut q, &mut input, &mut out).await;
    assert_that!(result, ok(anything()));

    (
        q.current_step(),
        String::from_utf8(out).unwrap(),
        q.session().get_all_answers(),
    )
}

#[tokio::test]
async fn given_full_script_when_survey_then_one_pass_completed() {
    // Given
    let backend = FakeBackend::serving(backend_analysis());
    let script = "Ana\n34\nf\n4\n2\n5\n1\nalcohol\nhome\n1\n4\nn\n";

    // When
    let (step, out, answers) = run(&backend, script).await;

    // Then
    assert_that!(step, eq(Step::Tinnitus));
    assert_that!(out, contains_substring("1. White noise"));
    assert_that!(out, contains_substring("Thank you for your feedback!"));
    assert_eq!(answers.get(QuestionId::Intoxication), Some(&Answer::from("Alcohol")));
    assert_eq!(answers.get(QuestionId::Feedback), Some(&Answer::Scale(4.0)));

    let uploads = backend.uploads();
    assert_that!(uploads.len(), eq(2));
    assert!(!uploads[0].with_feedback);
    assert!(uploads[1].with_feedback);
}

#[tokio::test]
async fn given_empty_lines_when_survey_then_defaults_used() {
    // Given
    let backend = FakeBackend::default();
    let script = "Ana\n34\nf\n\n\n\n\n\n\n";

    // When
    let (step, out, answers) = run(&backend, script).await;

    // Then
    assert_that!(step, eq(Step::Results));
    assert_that!(out, contains_substring("[3]"));
    assert_eq!(answers.get(QuestionId::Tinnitus), Some(&Answer::Scale(3.0)));
    assert_eq!(answers.get(QuestionId::Intoxication), Some(&Answer::from("Smoke")));
    assert_eq!(answers.get(QuestionId::Location), Some(&Answer::from("Work")));
}

#[tokio::test]
async fn given_blank_profile_field_when_survey_then_asked_again() {
    // Given
    let backend = FakeBackend::default();
    let script = "Ana\n\nf\nAna\n34\nf\n";

    // When
    let (step, out, _) = run(&backend, script).await;

    // Then
    assert_that!(out, contains_substring("Please fill in all fields."));
    assert_that!(step, eq(Step::Tinnitus));
}

#[tokio::test]
async fn given_invalid_answer_when_survey_then_reprompted() {
    // Given
    let backend = FakeBackend::default();
    let script = "Ana\n34\nf\n9\nloud\n2\n";

    // When
    let (step, out, answers) = run(&backend, script).await;

    // Then
    assert_that!(out, contains_substring("Please enter a number from 1 to 5."));
    assert_that!(step, eq(Step::Stress));
    assert_eq!(answers.get(QuestionId::Tinnitus), Some(&Answer::Scale(2.0)));
}

#[tokio::test]
async fn given_unknown_intervention_when_survey_then_reprompted() {
    // Given
    let backend = FakeBackend::offline();
    let script = "Ana\n34\nf\n\n\n\n\n\n\n7\nTake a walk\n";

    // When
    let (step, out, _) = run(&backend, script).await;

    // Then
    assert_that!(out, contains_substring("Please pick one of the listed interventions."));
    assert_that!(out, contains_substring("Try this now: Take a walk"));
    assert_that!(step, eq(Step::Feedback));
}

#[tokio::test]
async fn given_end_of_input_when_survey_then_stops_cleanly() {
    // Given
    let backend = FakeBackend::default();

    // When
    let (step, out, answers) = run(&backend, "Ana\n").await;

    // Then
    assert_that!(step, eq(Step::Profile));
    assert_that!(out, contains_substring("Survey ended."));
    assert!(answers.is_empty());
}

#[tokio::test]
async fn given_another_pass_when_survey_then_profile_not_asked_again() {
    // Given
    let backend = FakeBackend::offline();
    let script = "Ana\n34\nf\n\n\n\n\n\n\n1\n5\ny\n4\n";

    // When
    let (step, out, answers) = run(&backend, script).await;

    // Then
    assert_that!(step, eq(Step::Stress));
    assert_eq!(out.matches("Name:").count(), 1);
    assert_eq!(answers.get(QuestionId::Tinnitus), Some(&Answer::Scale(4.0)));
    assert_that!(
        answers.get(QuestionId::Feedback).map(ToString::to_string),
        some(eq("5"))
    );
}
