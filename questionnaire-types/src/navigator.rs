//! Step-by-step navigation over a `QuestionSet`.
//!
//! The navigator owns the whole session state: which question is shown,
//! what has been answered so far, and the uncommitted text of the current
//! text question. Every operation runs to completion and leaves the state
//! consistent; calls whose preconditions do not hold are ignored.

use crate::{AnswerMap, Question, QuestionId, QuestionSet};

/// Session state for one run through a questionnaire.
#[derive(Debug, Clone)]
pub struct Navigator {
    questions: QuestionSet,
    current_index: usize,
    answers: AnswerMap,
    draft_text: String,
}

impl Navigator {
    /// Start a new session on the first question with nothing answered.
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            current_index: 0,
            answers: AnswerMap::new(),
            draft_text: String::new(),
        }
    }

    // === Operations ===

    /// Replace the draft text.
    pub fn set_draft_text(&mut self, value: impl Into<String>) {
        self.draft_text = value.into();
    }

    /// Commit the draft as the answer to the current text question and advance.
    ///
    /// Ignored unless the current question is a text question and the draft
    /// contains something other than whitespace. The draft is stored as typed.
    pub fn submit_text(&mut self) {
        if !self.can_submit() {
            log::debug!(
                "Ignoring submit on question {}: not a text question or blank draft",
                self.current_question().id()
            );
            return;
        }

        let id = self.current_question().id();
        let answer = std::mem::take(&mut self.draft_text);
        log::debug!("Recorded text answer for question {id}");
        self.answers.insert(id, answer);
        self.current_index = self.clamped_next();
    }

    /// Record `option` as the answer to the current choice question and advance.
    ///
    /// Ignored unless the current question is a choice question that declares
    /// `option`. Any stray draft is dropped; landing on an answered text
    /// question restores its answer, as `go_next` does.
    pub fn select_choice(&mut self, option: &str) {
        let question = self.current_question();
        if !question.has_option(option) {
            log::debug!(
                "Ignoring choice {option:?} on question {}: not a declared option",
                question.id()
            );
            return;
        }

        let id = question.id();
        log::debug!("Recorded choice {option:?} for question {id}");
        self.answers.insert(id, option);
        self.current_index = self.clamped_next();
        self.sync_draft();
    }

    /// Move to the next question without answering the current one.
    pub fn go_next(&mut self) {
        let next = self.clamped_next();
        if next == self.current_index {
            log::debug!("Already on the last question");
            return;
        }
        self.current_index = next;
        self.sync_draft();
    }

    /// Move back one question, restoring a recorded text answer into the draft.
    pub fn go_previous(&mut self) {
        if self.current_index == 0 {
            log::debug!("Already on the first question");
            return;
        }
        self.current_index -= 1;
        self.sync_draft();
    }

    /// Position indicator for a progress bar: `current_index / len`.
    ///
    /// This is the position of the question being shown, not the share of
    /// questions answered, so the last question displays `(n - 1) / n`.
    pub fn progress_fraction(&self) -> f64 {
        self.current_index as f64 / self.questions.len() as f64
    }

    // === Accessors ===

    /// The question currently shown.
    pub fn current_question(&self) -> &Question {
        &self.questions.questions()[self.current_index]
    }

    /// Index of the question currently shown.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The uncommitted text of the current text question.
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    /// All answers recorded so far.
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// The question set this session walks through.
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// Consume the session and keep only the answers.
    pub fn into_answers(self) -> AnswerMap {
        self.answers
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_last()
    }

    pub fn is_last(&self) -> bool {
        self.current_index == self.questions.last_index()
    }

    /// Whether `submit_text` would record an answer right now.
    pub fn can_submit(&self) -> bool {
        self.current_question().is_text() && !self.draft_text.trim().is_empty()
    }

    /// The answer recorded for a question, if any.
    pub fn answer_for(&self, id: QuestionId) -> Option<&str> {
        self.answers.get(id)
    }

    /// The answer recorded for the current question, if any.
    pub fn current_answer(&self) -> Option<&str> {
        self.answer_for(self.current_question().id())
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Whether every question in the set has an answer.
    pub fn is_complete(&self) -> bool {
        self.questions
            .questions()
            .iter()
            .all(|q| self.answers.contains(q.id()))
    }

    fn clamped_next(&self) -> usize {
        (self.current_index + 1).min(self.questions.last_index())
    }

    // The draft only tracks the current text question.
    fn sync_draft(&mut self) {
        let question = self.current_question();
        self.draft_text = if question.is_text() {
            self.answers.get(question.id()).unwrap_or_default().to_string()
        } else {
            String::new()
        };
    }
}
