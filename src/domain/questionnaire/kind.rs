//! QuestionKind enum - fixes the answer type and completion policy per slot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The structural kind of a question slot.
///
/// A slot's kind never changes across renders; it determines which
/// [`AnswerValue`](super::AnswerValue) variant the slot accepts and which
/// completion policy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// The dietary-style selector that unlocks the variant tracks.
    BranchChoice,
    /// Ordinary free-text question.
    FreeText,
    /// Terminal consent checkbox.
    Consent,
    /// Compound multi-field "excluded foods" question (variant tracks only).
    ExcludedFoods,
}

impl QuestionKind {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            QuestionKind::BranchChoice => "Branch Choice",
            QuestionKind::FreeText => "Free Text",
            QuestionKind::Consent => "Consent",
            QuestionKind::ExcludedFoods => "Excluded Foods",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_human_readable_name() {
        assert_eq!(format!("{}", QuestionKind::BranchChoice), "Branch Choice");
        assert_eq!(format!("{}", QuestionKind::ExcludedFoods), "Excluded Foods");
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&QuestionKind::ExcludedFoods).unwrap(),
            "\"excluded_foods\""
        );
    }
}
