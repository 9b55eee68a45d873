//! IntakeWizard aggregate - navigation state machine for one session.
//!
//! Owns the answer sheet and the current position, enforces validator gating
//! on advance, triggers the branch-switch reset, and assembles the rendering
//! boundary views. One instance exists per session; no ambient globals.

use crate::domain::foundation::{DomainError, ErrorCode, ProgressFraction, SessionId, Timestamp};

use super::resolver::{BranchResolver, BRANCH_SLOT, EXCLUDED_FOODS_SLOT};
use super::{
    AnswerKey, AnswerSheet, AnswerValue, CompletionValidator, DietBranch, InputAffordance,
    QuestionCatalog, QuestionKind, QuestionView, SectionLabeler, WizardView,
};

/// Where the wizard currently is.
///
/// The introductory screen sits before question 0 and is never persisted as a
/// position; `Submitted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPosition {
    Intro,
    Question(usize),
    Submitted,
}

/// The intake wizard for one session.
///
/// # Invariants
///
/// - `Question(i)` always satisfies `i < total_questions(branch)`
/// - A branch switch never leaks answers from a previously explored branch
/// - Advance is gated by the completion validator; retreat never is
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeWizard {
    /// Session this wizard belongs to.
    session_id: SessionId,

    /// Current position in the sequence.
    position: WizardPosition,

    /// All recorded answers.
    answers: AnswerSheet,

    /// When the wizard was created.
    created_at: Timestamp,

    /// When the wizard last changed.
    updated_at: Timestamp,
}

impl IntakeWizard {
    /// Creates a fresh wizard at the introductory screen.
    pub fn new(session_id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            session_id,
            position: WizardPosition::Intro,
            answers: AnswerSheet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a wizard from persisted state.
    ///
    /// A persisted display index resumes at that question, clamped into the
    /// active branch's range; no persisted index resumes at the intro.
    pub fn reconstitute(
        session_id: SessionId,
        answers: AnswerSheet,
        position: Option<usize>,
    ) -> Self {
        let branch = CompletionValidator::recorded_branch(&answers).unwrap_or_default();
        let position = match position {
            Some(display) => WizardPosition::Question(BranchResolver::clamp_display(display, branch)),
            None => WizardPosition::Intro,
        };
        let now = Timestamp::now();
        Self {
            session_id,
            position,
            answers,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Returns the current position.
    pub fn position(&self) -> WizardPosition {
        self.position
    }

    /// Returns the current display index, if at a question.
    pub fn display_index(&self) -> Option<usize> {
        match self.position {
            WizardPosition::Question(i) => Some(i),
            _ => None,
        }
    }

    /// Returns the recorded answers.
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    /// Returns the active branch (default until one is chosen).
    pub fn branch(&self) -> DietBranch {
        CompletionValidator::recorded_branch(&self.answers).unwrap_or_default()
    }

    /// Returns the question total for the active branch.
    pub fn total_questions(&self) -> usize {
        BranchResolver::total_questions(self.branch())
    }

    /// Returns true once the wizard has been submitted.
    pub fn is_submitted(&self) -> bool {
        self.position == WizardPosition::Submitted
    }

    /// Returns when the wizard was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the wizard last changed.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Completion fraction for the current state.
    pub fn progress(&self) -> ProgressFraction {
        match self.position {
            WizardPosition::Intro => ProgressFraction::ZERO,
            WizardPosition::Question(i) => {
                ProgressFraction::of_position(i, self.total_questions())
            }
            WizardPosition::Submitted => ProgressFraction::COMPLETE,
        }
    }

    /// True if the current question satisfies the completion validator.
    pub fn can_advance(&self) -> bool {
        match self.position {
            WizardPosition::Question(i) => {
                CompletionValidator::is_answered(i, self.branch(), &self.answers)
            }
            _ => false,
        }
    }

    /// True if at the final question with consent given.
    pub fn can_submit(&self) -> bool {
        match self.position {
            WizardPosition::Question(i) => {
                BranchResolver::is_last(i, self.branch())
                    && CompletionValidator::is_answered(i, self.branch(), &self.answers)
            }
            _ => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Leaves the introductory screen for question 0.
    ///
    /// # Errors
    ///
    /// - `AlreadyStarted` if already at a question
    /// - `AlreadySubmitted` if the wizard is finished
    pub fn start(&mut self) -> Result<(), DomainError> {
        match self.position {
            WizardPosition::Intro => {
                self.position = WizardPosition::Question(0);
                self.touch();
                Ok(())
            }
            WizardPosition::Question(_) => Err(DomainError::new(
                ErrorCode::AlreadyStarted,
                "Wizard has already been started",
            )),
            WizardPosition::Submitted => Err(Self::submitted_error()),
        }
    }

    /// Advances to the next question, gated by the completion validator.
    ///
    /// Clamps at the final question rather than walking past it.
    ///
    /// # Errors
    ///
    /// - `NotStarted` if still at the intro
    /// - `AnswerRequired` if the current question is unanswered
    /// - `AlreadySubmitted` if the wizard is finished
    pub fn advance(&mut self) -> Result<WizardPosition, DomainError> {
        let current = self.current_question()?;
        if !self.can_advance() {
            return Err(DomainError::new(
                ErrorCode::AnswerRequired,
                "Current question must be answered before advancing",
            )
            .with_detail("display_index", current.to_string()));
        }
        let next = BranchResolver::clamp_display(current + 1, self.branch());
        self.position = WizardPosition::Question(next);
        self.touch();
        Ok(self.position)
    }

    /// Steps back one question. Never validated, clamped at question 0.
    ///
    /// # Errors
    ///
    /// - `AlreadySubmitted` if the wizard is finished
    pub fn retreat(&mut self) -> Result<WizardPosition, DomainError> {
        match self.position {
            WizardPosition::Intro => Ok(self.position),
            WizardPosition::Question(i) => {
                self.position = WizardPosition::Question(i.saturating_sub(1));
                self.touch();
                Ok(self.position)
            }
            WizardPosition::Submitted => Err(Self::submitted_error()),
        }
    }

    /// Finishes the wizard from the final question.
    ///
    /// # Errors
    ///
    /// - `NotStarted` if still at the intro
    /// - `NotAtFinalQuestion` if not at the last question
    /// - `ConsentRequired` unless the consent flag is exactly `true`
    /// - `AlreadySubmitted` if already finished
    pub fn submit(&mut self) -> Result<(), DomainError> {
        let current = self.current_question()?;
        if !BranchResolver::is_last(current, self.branch()) {
            return Err(DomainError::new(
                ErrorCode::NotAtFinalQuestion,
                "Submit is only available from the final question",
            ));
        }
        if !self.can_submit() {
            return Err(DomainError::new(
                ErrorCode::ConsentRequired,
                "Consent must be given before submitting",
            ));
        }
        self.position = WizardPosition::Submitted;
        self.touch();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Records an ordinary answer at a display index.
    ///
    /// The value variant must match the slot's kind; the branch slot routes
    /// through [`choose_branch`](Self::choose_branch), and the compound slot
    /// must use [`record_excluded_food`](Self::record_excluded_food).
    ///
    /// # Errors
    ///
    /// - `NotStarted` / `AlreadySubmitted` outside the question states
    /// - `WrongAnswerKind` on a value/kind mismatch
    pub fn record_answer(
        &mut self,
        display_index: usize,
        value: AnswerValue,
    ) -> Result<(), DomainError> {
        self.current_question()?;
        let branch = self.branch();
        let display = BranchResolver::clamp_display(display_index, branch);
        let kind = BranchResolver::kind_at(display, branch);
        let logical = BranchResolver::content_index(display, branch);

        match (kind, value) {
            (QuestionKind::BranchChoice, AnswerValue::Choice(choice)) => {
                return self.choose_branch(choice);
            }
            (QuestionKind::Consent, value @ AnswerValue::Flag(_)) => {
                self.answers.record(AnswerKey::question(logical), value);
            }
            (QuestionKind::FreeText, value @ AnswerValue::Text(_)) => {
                self.answers.record(AnswerKey::question(logical), value);
            }
            (kind, _) => {
                return Err(DomainError::new(
                    ErrorCode::WrongAnswerKind,
                    format!("Value does not match question kind '{}'", kind),
                )
                .with_detail("display_index", display.to_string()));
            }
        }
        self.touch();
        Ok(())
    }

    /// Records one sub-field of the compound excluded-foods question.
    ///
    /// # Errors
    ///
    /// - `BranchNotApplicable` on the default track
    /// - `OutOfRange` if the sub-index exceeds the branch's categories
    pub fn record_excluded_food(
        &mut self,
        sub_index: usize,
        text: String,
    ) -> Result<(), DomainError> {
        self.current_question()?;
        let branch = self.branch();
        let categories = QuestionCatalog::categories(branch);
        if categories.is_empty() {
            return Err(DomainError::new(
                ErrorCode::BranchNotApplicable,
                "The default track has no excluded-foods question",
            ));
        }
        if sub_index >= categories.len() {
            return Err(DomainError::new(
                ErrorCode::OutOfRange,
                format!(
                    "Sub-field index {} exceeds {} categories",
                    sub_index,
                    categories.len()
                ),
            ));
        }
        self.answers.record(
            AnswerKey::sub_field(branch, EXCLUDED_FOODS_SLOT, sub_index),
            AnswerValue::Text(text),
        );
        self.touch();
        Ok(())
    }

    /// Selects (or re-selects) the dietary branch.
    ///
    /// Overwrites the branch slot, then deletes every ordinary answer
    /// strictly after it and every compound sub-field for all branches, so a
    /// switch never leaks stale answers from a previously explored track.
    /// The current position is clamped into the new track's range.
    pub fn choose_branch(&mut self, choice: DietBranch) -> Result<(), DomainError> {
        self.current_question()?;
        self.answers
            .record(AnswerKey::question(BRANCH_SLOT), AnswerValue::Choice(choice));
        self.answers.prune_questions_after(BRANCH_SLOT);
        self.answers.prune_all_sub_fields();

        if let WizardPosition::Question(i) = self.position {
            self.position = WizardPosition::Question(BranchResolver::clamp_display(i, choice));
        }
        self.touch();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering boundary
    // ─────────────────────────────────────────────────────────────────────────

    /// Assembles the renderable view of the current state.
    pub fn view(&self) -> WizardView {
        match self.position {
            WizardPosition::Intro => WizardView::Intro {
                total: self.total_questions(),
                progress: ProgressFraction::ZERO,
            },
            WizardPosition::Submitted => WizardView::Submitted,
            WizardPosition::Question(display) => {
                let branch = self.branch();
                WizardView::Question(QuestionView {
                    markup: QuestionCatalog::content_for(display, branch, &self.answers),
                    section: SectionLabeler::label_for_index(display, branch),
                    display_number: display + 1,
                    total: self.total_questions(),
                    progress: self.progress(),
                    can_advance: self.can_advance(),
                    can_submit: self.can_submit(),
                    affordance: self.affordance_at(display, branch),
                })
            }
        }
    }

    fn affordance_at(&self, display: usize, branch: DietBranch) -> InputAffordance {
        match BranchResolver::kind_at(display, branch) {
            QuestionKind::BranchChoice => InputAffordance::BranchSelector {
                options: DietBranch::all(),
            },
            QuestionKind::FreeText => InputAffordance::FreeText,
            QuestionKind::Consent => InputAffordance::ConsentCheckbox,
            QuestionKind::ExcludedFoods => InputAffordance::ExcludedFoods {
                categories: QuestionCatalog::categories(branch),
            },
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal
    // ─────────────────────────────────────────────────────────────────────────

    fn current_question(&self) -> Result<usize, DomainError> {
        match self.position {
            WizardPosition::Question(i) => Ok(i),
            WizardPosition::Intro => Err(DomainError::new(
                ErrorCode::NotStarted,
                "Wizard has not been started",
            )),
            WizardPosition::Submitted => Err(Self::submitted_error()),
        }
    }

    fn submitted_error() -> DomainError {
        DomainError::new(ErrorCode::AlreadySubmitted, "Wizard has already been submitted")
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
