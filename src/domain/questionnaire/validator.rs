//! CompletionValidator - decides whether a question counts as answered.
//!
//! This gates forward navigation only; backward navigation is never
//! validated. A failed check surfaces as a disabled affordance at the
//! rendering boundary, never as an error.

use super::resolver::{BranchResolver, BRANCH_SLOT};
use super::{AnswerKey, AnswerSheet, AnswerValue, DietBranch, QuestionKind};

/// Pure answerability policy, by question kind.
pub struct CompletionValidator;

impl CompletionValidator {
    /// Returns true if the question at a display index is answered.
    ///
    /// Policy:
    /// - branch choice: a [`DietBranch`] has been recorded
    /// - terminal consent: the stored flag is exactly `true`
    /// - compound excluded-foods: always answered (every sub-field optional)
    /// - free text: stored text is non-empty after trimming
    pub fn is_answered(display_index: usize, branch: DietBranch, sheet: &AnswerSheet) -> bool {
        let kind = BranchResolver::kind_at(display_index, branch);
        if kind == QuestionKind::ExcludedFoods {
            return true;
        }
        let logical = BranchResolver::content_index(display_index, branch);
        Self::is_value_answered(kind, sheet.get(&AnswerKey::question(logical)))
    }

    /// Per-kind policy over a single stored value.
    pub fn is_value_answered(kind: QuestionKind, value: Option<&AnswerValue>) -> bool {
        match kind {
            QuestionKind::BranchChoice => {
                matches!(value, Some(AnswerValue::Choice(_)))
            }
            QuestionKind::Consent => {
                matches!(value, Some(AnswerValue::Flag(true)))
            }
            QuestionKind::ExcludedFoods => true,
            QuestionKind::FreeText => match value {
                Some(AnswerValue::Text(s)) => !s.trim().is_empty(),
                Some(AnswerValue::Flag(_)) => true,
                _ => false,
            },
        }
    }

    /// Returns the recorded branch choice, if any.
    pub fn recorded_branch(sheet: &AnswerSheet) -> Option<DietBranch> {
        sheet.choice_at(BRANCH_SLOT)
    }
}
