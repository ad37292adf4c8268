//! Scripted backend for running questionnaires without user interaction.
//!
//! `ScriptedBackend` replays a fixed list of user actions against a fresh
//! `Navigator`, exactly as an interactive backend would issue them. This is
//! useful for testing anything built on top of a questionnaire.
//!
//! # Example
//!
//! ```rust
//! use questionnaire::{Action, QuestionId, ScriptedBackend, onboarding};
//!
//! let answers = onboarding()
//!     .unwrap()
//!     .run(
//!         ScriptedBackend::new()
//!             .then(Action::typed("Alice"))
//!             .then(Action::Submit)
//!             .then(Action::Next)
//!             .then(Action::typed("Curiosity"))
//!             .then(Action::Submit),
//!     )
//!     .unwrap();
//!
//! assert_eq!(answers.get(QuestionId(2)), None);
//! assert_eq!(answers.get(QuestionId(3)), Some("Curiosity"));
//! ```

use crate::{
    AnswerMap, Navigator, QuestionId, QuestionSet, QuestionnaireBackend, QuestionnaireError,
};

/// One user action, mapped onto a single navigator operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the draft text (`set_draft_text`).
    Type(String),
    /// Commit the draft (`submit_text`).
    Submit,
    /// Pick an option (`select_choice`).
    Choose(String),
    /// Skip forward (`go_next`).
    Next,
    /// Step back (`go_previous`).
    Previous,
}

impl Action {
    pub fn typed(text: impl Into<String>) -> Self {
        Self::Type(text.into())
    }

    pub fn choose(option: impl Into<String>) -> Self {
        Self::Choose(option.into())
    }

    /// Apply this action to a navigator.
    pub fn apply(&self, navigator: &mut Navigator) {
        match self {
            Self::Type(text) => navigator.set_draft_text(text.clone()),
            Self::Submit => navigator.submit_text(),
            Self::Choose(option) => navigator.select_choice(option),
            Self::Next => navigator.go_next(),
            Self::Previous => navigator.go_previous(),
        }
    }
}

/// A backend that replays a fixed script of actions.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    actions: Vec<Action>,
    require_complete: bool,
}

/// Error type for ScriptedBackend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Script ended with unanswered questions: {}", join_ids(.missing))]
    Incomplete { missing: Vec<QuestionId> },
}

fn join_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<ScriptError> for QuestionnaireError {
    fn from(err: ScriptError) -> Self {
        QuestionnaireError::backend(err)
    }
}

impl ScriptedBackend {
    /// Create a new backend with an empty script.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
            require_complete: false,
        }
    }

    /// Append an action to the script.
    pub fn then(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Append several actions to the script.
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Fail unless every question is answered when the script ends.
    pub fn require_complete(mut self) -> Self {
        self.require_complete = true;
        self
    }

    /// Replay the script and return the navigator in its final state.
    pub fn replay(&self, questions: &QuestionSet) -> Navigator {
        let mut navigator = Navigator::new(questions.clone());
        for action in &self.actions {
            log::trace!("Replaying {action:?}");
            action.apply(&mut navigator);
        }
        navigator
    }
}

impl QuestionnaireBackend for ScriptedBackend {
    type Error = ScriptError;

    fn collect(&self, questions: &QuestionSet) -> Result<AnswerMap, Self::Error> {
        let navigator = self.replay(questions);

        if self.require_complete && !navigator.is_complete() {
            let missing = questions
                .questions()
                .iter()
                .map(|q| q.id())
                .filter(|id| navigator.answer_for(*id).is_none())
                .collect();
            return Err(ScriptError::Incomplete { missing });
        }

        Ok(navigator.into_answers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding;

    #[test]
    fn empty_script_answers_nothing() {
        let answers = ScriptedBackend::new()
            .collect(&onboarding().unwrap())
            .unwrap();
        assert!(answers.is_empty());
    }

    #[test]
    fn replay_exposes_final_state() {
        let nav = ScriptedBackend::new()
            .with_actions([Action::typed("Alice"), Action::Submit, Action::Next])
            .replay(&onboarding().unwrap());
        assert_eq!(nav.current_index(), 2);
        assert_eq!(nav.answer_for(QuestionId(1)), Some("Alice"));
    }

    #[test]
    fn incomplete_script_lists_missing_ids() {
        let err = ScriptedBackend::new()
            .then(Action::typed("Alice"))
            .then(Action::Submit)
            .require_complete()
            .collect(&onboarding().unwrap())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Script ended with unanswered questions: 2, 3"
        );
    }

    #[test]
    fn script_error_is_backend_failure() {
        let err: QuestionnaireError = ScriptError::Incomplete {
            missing: vec![QuestionId(1)],
        }
        .into();
        assert!(!err.is_cancelled());
    }
}
