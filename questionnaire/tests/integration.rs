//! Integration tests for questionnaire

use questionnaire::{
    Action, AnswerMap, Question, QuestionId, QuestionSet, QuestionnaireBackend,
    QuestionnaireError, ScriptedBackend, onboarding,
};

#[test]
fn test_onboarding_definition() {
    let questions = onboarding().unwrap();

    assert_eq!(questions.len(), 3);
    assert_eq!(questions.questions()[0].prompt(), "What's your name?");
    assert_eq!(questions.questions()[1].prompt(), "How did you hear about us?");
    assert_eq!(questions.questions()[2].prompt(), "What brings you here today?");
    assert!(questions.questions()[0].is_text());
    assert!(questions.questions()[1].kind().is_choice());
}

#[test]
fn test_full_run_with_scripted_backend() {
    let answers = onboarding()
        .unwrap()
        .run(
            ScriptedBackend::new()
                .then(Action::typed("Alice"))
                .then(Action::Submit)
                .then(Action::choose("Friend"))
                .then(Action::typed("Looking for a new tool"))
                .then(Action::Submit)
                .require_complete(),
        )
        .unwrap();

    let expected: AnswerMap = [
        (QuestionId(1), "Alice"),
        (QuestionId(2), "Friend"),
        (QuestionId(3), "Looking for a new tool"),
    ]
    .into_iter()
    .collect();
    assert_eq!(answers, expected);
}

#[test]
fn test_revising_an_earlier_answer() {
    let answers = onboarding()
        .unwrap()
        .run(ScriptedBackend::new().with_actions([
            Action::typed("Alice"),
            Action::Submit,
            Action::choose("Friend"),
            Action::Previous,
            Action::Previous,
            Action::typed("Alicia"),
            Action::Submit,
            Action::choose("Other"),
        ]))
        .unwrap();

    assert_eq!(answers.get(QuestionId(1)), Some("Alicia"));
    assert_eq!(answers.get(QuestionId(2)), Some("Other"));
    assert_eq!(answers.get(QuestionId(3)), None);
}

#[test]
fn test_skipping_leaves_questions_unanswered() {
    let answers = onboarding()
        .unwrap()
        .run(ScriptedBackend::new().with_actions([
            Action::Next,
            Action::Next,
            Action::typed("Browsing"),
            Action::Submit,
        ]))
        .unwrap();

    assert_eq!(answers.len(), 1);
    assert_eq!(answers.get(QuestionId(3)), Some("Browsing"));
}

#[test]
fn test_incomplete_run_is_backend_error() {
    let err = onboarding()
        .unwrap()
        .run(ScriptedBackend::new().then(Action::Next).require_complete())
        .unwrap_err();

    assert!(matches!(err, QuestionnaireError::Backend(_)));
    assert_eq!(
        err.to_string(),
        "Backend error: Script ended with unanswered questions: 1, 2, 3"
    );
}

#[test]
fn test_ignored_actions_do_not_record() {
    let nav = ScriptedBackend::new()
        .with_actions([
            Action::Submit,
            Action::typed("   "),
            Action::Submit,
            Action::choose("Friend"),
        ])
        .replay(&onboarding().unwrap());

    assert_eq!(nav.current_index(), 0);
    assert!(nav.answers().is_empty());
}

struct CancellingBackend;

impl QuestionnaireBackend for CancellingBackend {
    type Error = QuestionnaireError;

    fn collect(&self, _questions: &QuestionSet) -> Result<AnswerMap, Self::Error> {
        Err(QuestionnaireError::Cancelled)
    }
}

#[test]
fn test_cancellation_passes_through() {
    let questions = QuestionSet::new(vec![Question::text(1, "Anything?")]).unwrap();
    let err = questions.run(&CancellingBackend).unwrap_err();
    assert!(err.is_cancelled());
}
