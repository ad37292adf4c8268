//! Dialoguer backend implementation for QuestionnaireBackend trait.

use dialoguer::{
    Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use questionnaire::{
    AnswerMap, Navigator, QuestionSet, QuestionnaireBackend, QuestionnaireError,
};
use thiserror::Error;

const BACK_COMMAND: &str = ":back";
const SKIP_COMMAND: &str = ":skip";
const PROGRESS_WIDTH: usize = 20;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the questionnaire (e.g., pressed Ctrl+C or Escape).
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<DialoguerError> for QuestionnaireError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => QuestionnaireError::Cancelled,
            other => QuestionnaireError::backend(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// Dialoguer backend for interactive CLI prompts.
///
/// This backend uses the `dialoguer` library to present one question at a
/// time in a command-line interface.
#[derive(Debug, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

/// What a line typed at a text prompt means.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TextEntry {
    Back,
    Skip,
    Answer(String),
}

impl TextEntry {
    fn parse(line: String) -> Self {
        let command = line.trim();
        if command == BACK_COMMAND {
            Self::Back
        } else if command == SKIP_COMMAND {
            Self::Skip
        } else {
            Self::Answer(line)
        }
    }
}

/// One entry in the select list of a choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ChoiceItem {
    Option(String),
    Previous,
    Skip,
}

impl ChoiceItem {
    fn label(&self) -> String {
        match self {
            Self::Option(option) => option.clone(),
            Self::Previous => "← Previous".to_string(),
            Self::Skip => "Skip →".to_string(),
        }
    }
}

fn choice_items(navigator: &Navigator) -> Vec<ChoiceItem> {
    let mut items: Vec<ChoiceItem> = navigator
        .current_question()
        .options()
        .iter()
        .cloned()
        .map(ChoiceItem::Option)
        .collect();
    if navigator.can_go_previous() {
        items.push(ChoiceItem::Previous);
    }
    if navigator.can_go_next() {
        items.push(ChoiceItem::Skip);
    }
    items
}

/// Text progress bar filled to `progress_fraction`, e.g. `[██████░░░░] 2/3`.
fn progress_line(navigator: &Navigator) -> String {
    let filled = (navigator.progress_fraction() * PROGRESS_WIDTH as f64) as usize;
    format!(
        "[{}{}] {}/{}",
        "█".repeat(filled),
        "░".repeat(PROGRESS_WIDTH - filled),
        navigator.current_index() + 1,
        navigator.questions().len()
    )
}

/// Run an answering operation. Returns `true` once the last question was
/// just answered with nothing left open.
fn commit(navigator: &mut Navigator, answer: impl FnOnce(&mut Navigator)) -> bool {
    let was_last = navigator.is_last();
    answer(navigator);
    was_last && navigator.is_complete()
}

impl Default for DialoguerBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Prompt for the current text question. Returns `true` when finished.
    fn ask_text(&self, navigator: &mut Navigator) -> Result<bool, DialoguerError> {
        let theme = self.theme();
        let result = Input::<String>::with_theme(&*theme)
            .with_prompt(navigator.current_question().prompt())
            .with_initial_text(navigator.draft_text())
            .allow_empty(true)
            .interact_text();

        let line = match result {
            Ok(line) => line,
            Err(e) if is_cancelled(&e) => return Err(DialoguerError::Cancelled),
            Err(e) => return Err(DialoguerError::Dialoguer(e)),
        };

        match TextEntry::parse(line) {
            TextEntry::Back => navigator.go_previous(),
            TextEntry::Skip => navigator.go_next(),
            TextEntry::Answer(text) => {
                navigator.set_draft_text(text);
                return Ok(commit(navigator, Navigator::submit_text));
            }
        }
        Ok(false)
    }

    /// Prompt for the current choice question. Returns `true` when finished.
    fn ask_choice(&self, navigator: &mut Navigator) -> Result<bool, DialoguerError> {
        let items = choice_items(navigator);
        let labels: Vec<String> = items.iter().map(ChoiceItem::label).collect();
        let default = navigator
            .current_answer()
            .and_then(|answer| {
                items
                    .iter()
                    .position(|item| matches!(item, ChoiceItem::Option(o) if o == answer))
            })
            .unwrap_or(0);

        let theme = self.theme();
        let result = Select::with_theme(&*theme)
            .with_prompt(navigator.current_question().prompt())
            .items(&labels)
            .default(default)
            .interact_opt();

        let index = match result {
            Ok(Some(index)) => index,
            Ok(None) => return Err(DialoguerError::Cancelled),
            Err(e) if is_cancelled(&e) => return Err(DialoguerError::Cancelled),
            Err(e) => return Err(DialoguerError::Dialoguer(e)),
        };

        match items.get(index) {
            Some(ChoiceItem::Option(option)) => {
                return Ok(commit(navigator, |nav| nav.select_choice(option)));
            }
            Some(ChoiceItem::Previous) => navigator.go_previous(),
            Some(ChoiceItem::Skip) => navigator.go_next(),
            None => {}
        }
        Ok(false)
    }
}

impl QuestionnaireBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn collect(&self, questions: &QuestionSet) -> Result<AnswerMap, Self::Error> {
        let mut navigator = Navigator::new(questions.clone());
        println!("Type {BACK_COMMAND} to go back, {SKIP_COMMAND} to skip a question.\n");

        loop {
            println!("{}", progress_line(&navigator));

            let finished = if navigator.current_question().is_text() {
                self.ask_text(&mut navigator)?
            } else {
                self.ask_choice(&mut navigator)?
            };
            if finished {
                break;
            }

            if navigator.is_last() && navigator.current_answer().is_some() {
                let open = navigator.questions().len() - navigator.answered_count();
                if open > 0 {
                    println!(
                        "{open} question(s) still unanswered, use {BACK_COMMAND} to revisit."
                    );
                }
            }
        }

        log::info!("Collected {} answers", navigator.answered_count());
        Ok(navigator.into_answers())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire::{QuestionId, onboarding};

    fn navigator() -> Navigator {
        Navigator::new(onboarding().unwrap())
    }

    #[test]
    fn backend_creation() {
        assert!(DialoguerBackend::new().colorful);
        assert!(!DialoguerBackend::plain().colorful);
        assert!(DialoguerBackend::default().colorful);
    }

    #[test]
    fn error_types() {
        let err = DialoguerError::Cancelled;
        assert_eq!(err.to_string(), "Questionnaire cancelled by user");
        assert!(QuestionnaireError::from(err).is_cancelled());
    }

    #[test]
    fn interrupted_io_is_cancellation() {
        let interrupted = dialoguer::Error::IO(std::io::Error::from(
            std::io::ErrorKind::Interrupted,
        ));
        assert!(is_cancelled(&interrupted));
        let other = dialoguer::Error::IO(std::io::Error::other("broken pipe"));
        assert!(!is_cancelled(&other));
    }

    #[test]
    fn text_entry_commands() {
        assert_eq!(TextEntry::parse(":back".into()), TextEntry::Back);
        assert_eq!(TextEntry::parse("  :skip ".into()), TextEntry::Skip);
        assert_eq!(
            TextEntry::parse(" Alice ".into()),
            TextEntry::Answer(" Alice ".into())
        );
    }

    #[test]
    fn choice_items_include_navigation() {
        let mut nav = navigator();
        nav.go_next();
        let items = choice_items(&nav);
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], ChoiceItem::Option("Friend".into()));
        assert_eq!(items[4], ChoiceItem::Previous);
        assert_eq!(items[5], ChoiceItem::Skip);
        assert_eq!(items[5].label(), "Skip →");
    }

    #[test]
    fn progress_line_uses_position() {
        let mut nav = navigator();
        assert_eq!(progress_line(&nav), format!("[{}] 1/3", "░".repeat(20)));
        nav.go_next();
        assert!(progress_line(&nav).starts_with(&format!("[{}░", "█".repeat(6))));
        assert!(progress_line(&nav).ends_with("] 2/3"));
    }

    #[test]
    fn commit_finishes_only_on_complete_last() {
        let mut nav = navigator();
        nav.set_draft_text("Alice");
        assert!(!commit(&mut nav, Navigator::submit_text));
        assert!(!commit(&mut nav, |n| n.select_choice("Other")));
        nav.set_draft_text("Reasons");
        assert!(commit(&mut nav, Navigator::submit_text));
        assert_eq!(nav.answer_for(QuestionId(3)), Some("Reasons"));
    }

    #[test]
    fn commit_on_last_with_gaps_keeps_going() {
        let mut nav = navigator();
        nav.go_next();
        nav.go_next();
        nav.set_draft_text("Only this");
        assert!(!commit(&mut nav, Navigator::submit_text));
    }
}
