//! # questionnaire
//!
//! Step-by-step questionnaires with free-text and multiple-choice answers.
//! Backend-agnostic.
//!
//! A questionnaire is a fixed `QuestionSet`. A `Navigator` walks through it one
//! question at a time, recording answers keyed by question id; backends turn
//! user input into navigator operations and render its state.
//!
//! ## Usage
//!
//! ```rust
//! use questionnaire::{Action, QuestionId, ScriptedBackend, onboarding};
//!
//! let questions = onboarding().unwrap();
//! let answers = questions
//!     .run(
//!         ScriptedBackend::new()
//!             .then(Action::typed("Alice"))
//!             .then(Action::Submit)
//!             .then(Action::choose("Friend")),
//!     )
//!     .unwrap();
//!
//! assert_eq!(answers.get(QuestionId(1)), Some("Alice"));
//! assert_eq!(answers.get(QuestionId(2)), Some("Friend"));
//! ```
//!
//! ## Navigator operations
//!
//! - `set_draft_text` - Replace the uncommitted text of a text question
//! - `submit_text` - Commit a non-blank draft and advance
//! - `select_choice` - Record one of the declared options and advance
//! - `go_next` / `go_previous` - Move without answering (clamped at both ends)
//! - `progress_fraction` - `current_index / len` for a progress bar
//!
//! ## Backends
//!
//! Backends are separate crates that implement `QuestionnaireBackend`:
//! - `questionnaire-ratatui` - Full-screen TUI wizard
//! - `questionnaire-dialoguer` - Line-by-line CLI prompts via dialoguer

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

mod onboarding;
pub use onboarding::onboarding;

// Scripted backend for running questionnaires without user interaction
mod scripted;
pub use scripted::{Action, ScriptError, ScriptedBackend};
