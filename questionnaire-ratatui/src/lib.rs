//! # questionnaire-ratatui
//!
//! Ratatui backend for questionnaire.
//!
//! Questions are shown one at a time in a full-screen terminal UI with a thin
//! progress bar along the top. Text questions get an editable input line,
//! choice questions a selectable list of options.
//!
//! ## Keys
//!
//! - `Enter` - submit the typed answer / pick the highlighted option
//! - `↑`/`↓` or `1`-`9` - move through / pick options
//! - `PgUp`/`PgDn` - previous / next question without answering
//! - `Backspace` on an empty input - previous question
//! - `Esc` - cancel
//!
//! ## Example
//!
//! ```rust,ignore
//! use questionnaire::onboarding;
//! use questionnaire_ratatui::RatatuiBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let backend = RatatuiBackend::new().with_title("Welcome");
//!     let answers = onboarding()?.run(backend)?;
//!     for (id, answer) in answers.iter() {
//!         println!("{id}: {answer}");
//!     }
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{RatatuiBackend, RatatuiError, Theme};
