//! RecordAnswerHandler - Command handler for recording an answer.
//!
//! Covers ordinary values and single sub-fields of the compound question;
//! a branch choice sent through here routes into the branch-switch path of
//! the aggregate.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::{AnswerValue, WizardView};
use crate::ports::{AnswerStore, AnswerStoreError};

/// What is being recorded.
#[derive(Debug, Clone)]
pub enum AnswerEntry {
    /// An ordinary value for the question at the display index.
    Value(AnswerValue),
    /// One sub-field of the compound excluded-foods question.
    ExcludedFood { sub_index: usize, text: String },
}

/// Command to record an answer at a display index.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub session_id: SessionId,
    pub display_index: usize,
    pub entry: AnswerEntry,
}

/// Result of successfully recording an answer.
#[derive(Debug, Clone)]
pub struct RecordAnswerResult {
    /// View after the write, with refreshed advance/submit gating.
    pub view: WizardView,
}

/// Error type for recording an answer.
#[derive(Debug)]
pub enum RecordAnswerError {
    /// Domain error (e.g., wrong value kind for the slot).
    Domain(DomainError),
    /// Persisting the updated sheet failed.
    Storage(AnswerStoreError),
}

impl std::fmt::Display for RecordAnswerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordAnswerError::Domain(err) => write!(f, "{}", err),
            RecordAnswerError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RecordAnswerError {}

impl From<DomainError> for RecordAnswerError {
    fn from(err: DomainError) -> Self {
        RecordAnswerError::Domain(err)
    }
}

impl From<AnswerStoreError> for RecordAnswerError {
    fn from(err: AnswerStoreError) -> Self {
        RecordAnswerError::Storage(err)
    }
}

/// Handler for recording answers.
pub struct RecordAnswerHandler {
    answer_store: Arc<dyn AnswerStore>,
}

impl RecordAnswerHandler {
    pub fn new(answer_store: Arc<dyn AnswerStore>) -> Self {
        Self { answer_store }
    }

    pub async fn handle(
        &self,
        cmd: RecordAnswerCommand,
    ) -> Result<RecordAnswerResult, RecordAnswerError> {
        let mut wizard = super::load_wizard(self.answer_store.as_ref(), cmd.session_id).await;

        match cmd.entry {
            AnswerEntry::Value(value) => wizard.record_answer(cmd.display_index, value)?,
            AnswerEntry::ExcludedFood { sub_index, text } => {
                wizard.record_excluded_food(sub_index, text)?
            }
        }

        super::persist_wizard(self.answer_store.as_ref(), &wizard).await?;
        Ok(RecordAnswerResult {
            view: wizard.view(),
        })
    }
}
