use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a question, e.g. `QuestionId(2)`.
///
/// Used as the key in `AnswerMap`. Ids are unique within a `QuestionSet`
/// and do not have to be contiguous or ordered.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl QuestionId {
    /// Get the raw integer value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_number() {
        assert_eq!(QuestionId(42).to_string(), "42");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&QuestionId(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn ordering_follows_number() {
        assert!(QuestionId(1) < QuestionId(2));
        assert_eq!(QuestionId::from(3).get(), 3);
    }
}
