use crate::QuestionId;

/// Error type for questionnaire runs.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    /// User cancelled the questionnaire (Esc, Ctrl+C, closed window, etc.)
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    /// Backend-specific failure (I/O, terminal setup, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl QuestionnaireError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Reasons a list of questions cannot form a `QuestionSet`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionSetError {
    #[error("A question set needs at least one question")]
    Empty,

    #[error("Question id {0} is used more than once")]
    DuplicateId(QuestionId),

    #[error("Choice question {0} has no options")]
    NoOptions(QuestionId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_message() {
        let err = QuestionnaireError::Cancelled;
        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "Questionnaire cancelled by user");
    }

    #[test]
    fn backend_wraps_anyhow() {
        let err = QuestionnaireError::backend(anyhow::anyhow!("terminal went away"));
        assert!(!err.is_cancelled());
        assert_eq!(err.to_string(), "Backend error: terminal went away");
    }

    #[test]
    fn set_error_messages() {
        assert_eq!(
            QuestionSetError::DuplicateId(QuestionId(2)).to_string(),
            "Question id 2 is used more than once"
        );
        assert_eq!(
            QuestionSetError::NoOptions(QuestionId(5)).to_string(),
            "Choice question 5 has no options"
        );
    }
}
