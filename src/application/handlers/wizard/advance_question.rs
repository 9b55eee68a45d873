//! AdvanceQuestionHandler - Command handler for forward navigation.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::WizardView;
use crate::ports::{AnswerStore, AnswerStoreError};

/// Command to advance to the next question.
#[derive(Debug, Clone)]
pub struct AdvanceQuestionCommand {
    pub session_id: SessionId,
}

/// Result of successfully advancing.
#[derive(Debug, Clone)]
pub struct AdvanceQuestionResult {
    /// View of the question advanced to.
    pub view: WizardView,
}

/// Error type for advancing.
#[derive(Debug)]
pub enum AdvanceQuestionError {
    /// Domain error (e.g., the current question is unanswered).
    Domain(DomainError),
    /// Persisting the new position failed.
    Storage(AnswerStoreError),
}

impl std::fmt::Display for AdvanceQuestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvanceQuestionError::Domain(err) => write!(f, "{}", err),
            AdvanceQuestionError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AdvanceQuestionError {}

impl From<DomainError> for AdvanceQuestionError {
    fn from(err: DomainError) -> Self {
        AdvanceQuestionError::Domain(err)
    }
}

impl From<AnswerStoreError> for AdvanceQuestionError {
    fn from(err: AnswerStoreError) -> Self {
        AdvanceQuestionError::Storage(err)
    }
}

/// Handler for forward navigation.
pub struct AdvanceQuestionHandler {
    answer_store: Arc<dyn AnswerStore>,
}

impl AdvanceQuestionHandler {
    pub fn new(answer_store: Arc<dyn AnswerStore>) -> Self {
        Self { answer_store }
    }

    pub async fn handle(
        &self,
        cmd: AdvanceQuestionCommand,
    ) -> Result<AdvanceQuestionResult, AdvanceQuestionError> {
        let mut wizard = super::load_wizard(self.answer_store.as_ref(), cmd.session_id).await;
        wizard.advance()?;
        super::persist_wizard(self.answer_store.as_ref(), &wizard).await?;
        Ok(AdvanceQuestionResult {
            view: wizard.view(),
        })
    }
}
