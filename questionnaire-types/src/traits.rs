use crate::{AnswerMap, QuestionSet, QuestionnaireError};

/// Trait for backend implementations that run a questionnaire.
///
/// Backends receive a `QuestionSet`, drive a `Navigator` over it in response
/// to user input, and return the recorded `AnswerMap`. They decide how to
/// present the questions (full-screen terminal, line prompts, scripted, etc.)
/// and re-read the navigator state after every operation.
pub trait QuestionnaireBackend {
    /// The error type for this backend.
    ///
    /// Backends map their own cancellation onto `QuestionnaireError::Cancelled`
    /// and everything else onto `QuestionnaireError::Backend`.
    type Error: Into<QuestionnaireError>;

    /// Run the questionnaire and collect answers.
    ///
    /// # Returns
    /// * `Ok(answers)` once the user finishes the questionnaire
    /// * `Err` on cancellation or backend failure
    fn collect(&self, questions: &QuestionSet) -> Result<AnswerMap, Self::Error>;
}

impl<B: QuestionnaireBackend + ?Sized> QuestionnaireBackend for &B {
    type Error = B::Error;

    fn collect(&self, questions: &QuestionSet) -> Result<AnswerMap, Self::Error> {
        (**self).collect(questions)
    }
}
