//! # questionnaire-dialoguer
//!
//! Dialoguer backend for questionnaire.
//!
//! This crate runs a questionnaire as a sequence of command-line prompts
//! using the `dialoguer` library. Text questions are plain input lines
//! (`:back` and `:skip` navigate), choice questions are arrow-key selects
//! with extra "Previous"/"Skip" entries.
//!
//! ## Example
//!
//! ```rust,ignore
//! use questionnaire::onboarding;
//! use questionnaire_dialoguer::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let answers = onboarding()?.run(DialoguerBackend::new())?;
//!     println!("{answers:#?}");
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError};
