use std::collections::HashSet;

use serde::Serialize;

use crate::{
    AnswerMap, Question, QuestionId, QuestionKind, QuestionSetError, QuestionnaireBackend,
    QuestionnaireError,
};

/// The ordered, immutable list of questions a questionnaire walks through.
///
/// A question set always holds at least one question, ids are unique and
/// every choice question has at least one option. Index 0 is shown first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Create a question set, checking the structural guarantees.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuestionSetError::DuplicateId(question.id()));
            }
            if let QuestionKind::Choice(options) = question.kind()
                && options.is_empty()
            {
                return Err(QuestionSetError::NoOptions(question.id()));
            }
        }

        Ok(Self { questions })
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question at `index`.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Find a question by id.
    pub fn by_id(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Index of the last question.
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    /// Get the number of questions. Never zero.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Run this questionnaire with the given backend.
    pub fn run<B: QuestionnaireBackend>(
        &self,
        backend: B,
    ) -> Result<AnswerMap, QuestionnaireError> {
        log::info!("Starting questionnaire with {} questions", self.len());
        let answers = backend.collect(self).map_err(Into::into)?;
        log::info!("Questionnaire finished with {} answers", answers.len());
        Ok(answers)
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert_eq!(QuestionSet::new(Vec::new()), Err(QuestionSetError::Empty));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = QuestionSet::new(vec![
            Question::text(1, "first"),
            Question::text(2, "second"),
            Question::text(1, "again"),
        ]);
        assert_eq!(result, Err(QuestionSetError::DuplicateId(QuestionId(1))));
    }

    #[test]
    fn rejects_choice_without_options() {
        let result = QuestionSet::new(vec![Question::choice(
            4,
            "pick",
            Vec::<String>::new(),
        )]);
        assert_eq!(result, Err(QuestionSetError::NoOptions(QuestionId(4))));
    }

    #[test]
    fn lookup_by_index_and_id() {
        let set = QuestionSet::new(vec![
            Question::text(10, "a"),
            Question::choice(20, "b", ["x", "y"]),
        ])
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.last_index(), 1);
        assert_eq!(set.get(1).map(Question::id), Some(QuestionId(20)));
        assert_eq!(set.by_id(QuestionId(10)).map(Question::prompt), Some("a"));
        assert!(set.by_id(QuestionId(30)).is_none());
        assert!(set.get(2).is_none());
    }
}
