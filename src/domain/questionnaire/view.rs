//! Rendering boundary - read-only view structs the engine exposes per state.
//!
//! The UI renders these without reaching into engine internals: markup,
//! section heading, numbering, progress, whether advance/submit is enabled,
//! and which input affordance to show.

use crate::domain::foundation::ProgressFraction;

use super::DietBranch;

/// The input control the current question needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAffordance {
    /// Dietary-style selector with the three branch options.
    BranchSelector {
        options: &'static [DietBranch; 3],
    },
    /// Plain free-text field.
    FreeText,
    /// Terminal consent checkbox.
    ConsentCheckbox,
    /// One text field per excluded-foods category.
    ExcludedFoods {
        categories: &'static [&'static str],
    },
}

/// Everything the UI needs to render one question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    /// Renderable markup for the question body.
    pub markup: String,
    /// Section heading for the current position.
    pub section: &'static str,
    /// 1-based number shown to the user.
    pub display_number: usize,
    /// Total question count for the active branch.
    pub total: usize,
    /// Completion fraction, recomputed on every state change.
    pub progress: ProgressFraction,
    /// Whether the advance control is enabled.
    pub can_advance: bool,
    /// Whether the submit control is enabled (final question only).
    pub can_submit: bool,
    /// Which input control to show.
    pub affordance: InputAffordance,
}

/// The wizard's full renderable state.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardView {
    /// Introductory screen, before the first question.
    Intro {
        total: usize,
        progress: ProgressFraction,
    },
    /// One question of the active branch.
    Question(QuestionView),
    /// Terminal state after a successful submit.
    Submitted,
}

impl WizardView {
    /// Returns the question view, if currently at a question.
    pub fn as_question(&self) -> Option<&QuestionView> {
        match self {
            WizardView::Question(view) => Some(view),
            _ => None,
        }
    }
}
