//! Core types for the questionnaire crate.
//!
//! This crate provides the foundational types for running a questionnaire:
//! - `QuestionSet` - The fixed, ordered list of questions
//! - `Question` and `QuestionKind` - Individual questions and their input type
//! - `AnswerMap` and `QuestionId` - Recorded answers keyed by question id
//! - `Navigator` - The step-by-step navigation state every backend drives
//! - `QuestionnaireBackend` trait - For implementing presentation backends

mod question_id;
pub use question_id::QuestionId;

mod answers;
pub use answers::AnswerMap;

mod question;
pub use question::{Question, QuestionKind};

mod question_set;
pub use question_set::QuestionSet;

mod navigator;
pub use navigator::Navigator;

mod error;
pub use error::{QuestionSetError, QuestionnaireError};

mod traits;
pub use traits::QuestionnaireBackend;
