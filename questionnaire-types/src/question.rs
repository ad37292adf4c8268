use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// A single question in a questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// The key under which this question's answer is recorded.
    id: QuestionId,

    /// The prompt text shown to the user.
    text: String,

    /// The kind of question (free text or a fixed set of options).
    kind: QuestionKind,
}

impl Question {
    /// Create a new question.
    pub fn new(id: u32, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: QuestionId(id),
            text: text.into(),
            kind,
        }
    }

    /// Create a free-text question.
    pub fn text(id: u32, text: impl Into<String>) -> Self {
        Self::new(id, text, QuestionKind::Text)
    }

    /// Create a multiple-choice question.
    pub fn choice<I, S>(id: u32, text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            id,
            text,
            QuestionKind::Choice(options.into_iter().map(Into::into).collect()),
        )
    }

    /// Get the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.text
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Check if this is a free-text question.
    pub fn is_text(&self) -> bool {
        self.kind.is_text()
    }

    /// The declared options. Empty for text questions.
    pub fn options(&self) -> &[String] {
        match &self.kind {
            QuestionKind::Text => &[],
            QuestionKind::Choice(options) => options,
        }
    }

    /// Check whether `option` is one of the declared options.
    pub fn has_option(&self, option: &str) -> bool {
        self.options().iter().any(|o| o == option)
    }
}

/// The kind of question, determining how it is answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "options", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Single-line free-text answer.
    Text,

    /// Pick exactly one of the listed options.
    Choice(Vec<String>),
}

impl QuestionKind {
    /// Check if this is a Text kind.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Check if this is a Choice kind.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_question_has_no_options() {
        let q = Question::text(1, "What's your name?");
        assert!(q.is_text());
        assert!(q.options().is_empty());
        assert!(!q.has_option(""));
    }

    #[test]
    fn choice_question_keeps_option_order() {
        let q = Question::choice(2, "Pick", ["b", "a", "c"]);
        assert!(q.kind().is_choice());
        assert_eq!(q.options(), ["b", "a", "c"]);
        assert!(q.has_option("a"));
        assert!(!q.has_option("A"));
    }

    #[test]
    fn kind_serializes_with_tag() {
        let json = serde_json::to_string(&QuestionKind::Choice(vec!["x".into()])).unwrap();
        assert_eq!(json, r#"{"type":"choice","options":["x"]}"#);
        let json = serde_json::to_string(&QuestionKind::Text).unwrap();
        assert_eq!(json, r#"{"type":"text"}"#);
    }
}
