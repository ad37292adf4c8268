use crate::{Question, QuestionSet, QuestionSetError};

/// The built-in onboarding questionnaire.
///
/// 1. "What's your name?" (text)
/// 2. "How did you hear about us?" (choice)
/// 3. "What brings you here today?" (text)
pub fn onboarding() -> Result<QuestionSet, QuestionSetError> {
    QuestionSet::new(vec![
        Question::text(1, "What's your name?"),
        Question::choice(
            2,
            "How did you hear about us?",
            ["Social Media", "Friend", "Search Engine", "Other"],
        ),
        Question::text(3, "What brings you here today?"),
    ])
}
