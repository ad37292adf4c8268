use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// Answers recorded during a questionnaire session.
///
/// A question that has not been answered has no entry. Entries are only ever
/// overwritten, never removed, so there is intentionally no `remove`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap {
    values: BTreeMap<QuestionId, String>,
}

impl AnswerMap {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Record an answer, replacing any previous answer for the same question.
    pub fn insert(&mut self, id: QuestionId, answer: impl Into<String>) {
        self.values.insert(id, answer.into());
    }

    /// Get the answer recorded for a question.
    pub fn get(&self, id: QuestionId) -> Option<&str> {
        self.values.get(&id).map(String::as_str)
    }

    /// Check if an answer exists for a question.
    pub fn contains(&self, id: QuestionId) -> bool {
        self.values.contains_key(&id)
    }

    /// Iterate over all answers in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.values.iter().map(|(id, answer)| (*id, answer.as_str()))
    }

    /// Get the number of recorded answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(QuestionId, S)> for AnswerMap {
    fn from_iter<T: IntoIterator<Item = (QuestionId, S)>>(iter: T) -> Self {
        let mut answers = AnswerMap::new();
        for (id, answer) in iter {
            answers.insert(id, answer);
        }
        answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites() {
        let mut answers = AnswerMap::new();
        answers.insert(QuestionId(1), "Alice");
        answers.insert(QuestionId(1), "Bob");
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get(QuestionId(1)), Some("Bob"));
    }

    #[test]
    fn missing_answer_is_none() {
        let answers = AnswerMap::new();
        assert!(answers.is_empty());
        assert_eq!(answers.get(QuestionId(9)), None);
        assert!(!answers.contains(QuestionId(9)));
    }

    #[test]
    fn iterates_in_id_order() {
        let answers: AnswerMap = [
            (QuestionId(3), "c"),
            (QuestionId(1), "a"),
            (QuestionId(2), "b"),
        ]
        .into_iter()
        .collect();
        let ids: Vec<u32> = answers.iter().map(|(id, _)| id.get()).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn serializes_as_object() {
        let answers: AnswerMap = [(QuestionId(1), "Alice"), (QuestionId(2), "Friend")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"1":"Alice","2":"Friend"}"#);
    }
}
