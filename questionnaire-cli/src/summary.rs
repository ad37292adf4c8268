use std::fmt;

use questionnaire::{AnswerMap, QuestionId, QuestionSet};
use serde::Serialize;

/// Answers paired with the questions they belong to, in question order.
#[derive(Debug, Serialize)]
pub struct Summary {
    answers: Vec<Entry>,
}

#[derive(Debug, Serialize)]
struct Entry {
    id: QuestionId,
    question: String,
    answer: Option<String>,
}

impl Summary {
    pub fn new(questions: &QuestionSet, answers: &AnswerMap) -> Self {
        let answers = questions
            .questions()
            .iter()
            .map(|q| Entry {
                id: q.id(),
                question: q.prompt().to_string(),
                answer: answers.get(q.id()).map(str::to_string),
            })
            .collect();
        Self { answers }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.answers {
            writeln!(f, "{}", entry.question)?;
            match &entry.answer {
                Some(answer) => writeln!(f, "  {answer}")?,
                None => writeln!(f, "  (skipped)")?,
            }
        }
        Ok(())
    }
}
