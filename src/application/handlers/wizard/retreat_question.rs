//! RetreatQuestionHandler - Command handler for backward navigation.
//!
//! Backward navigation is never gated on answers and clamps at the first
//! question.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::WizardView;
use crate::ports::{AnswerStore, AnswerStoreError};

/// Command to step back one question.
#[derive(Debug, Clone)]
pub struct RetreatQuestionCommand {
    pub session_id: SessionId,
}

/// Result of stepping back.
#[derive(Debug, Clone)]
pub struct RetreatQuestionResult {
    /// View of the question stepped back to.
    pub view: WizardView,
}

/// Error type for stepping back.
#[derive(Debug)]
pub enum RetreatQuestionError {
    /// Domain error (only after submission).
    Domain(DomainError),
    /// Persisting the new position failed.
    Storage(AnswerStoreError),
}

impl std::fmt::Display for RetreatQuestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetreatQuestionError::Domain(err) => write!(f, "{}", err),
            RetreatQuestionError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RetreatQuestionError {}

impl From<DomainError> for RetreatQuestionError {
    fn from(err: DomainError) -> Self {
        RetreatQuestionError::Domain(err)
    }
}

impl From<AnswerStoreError> for RetreatQuestionError {
    fn from(err: AnswerStoreError) -> Self {
        RetreatQuestionError::Storage(err)
    }
}

/// Handler for backward navigation.
pub struct RetreatQuestionHandler {
    answer_store: Arc<dyn AnswerStore>,
}

impl RetreatQuestionHandler {
    pub fn new(answer_store: Arc<dyn AnswerStore>) -> Self {
        Self { answer_store }
    }

    pub async fn handle(
        &self,
        cmd: RetreatQuestionCommand,
    ) -> Result<RetreatQuestionResult, RetreatQuestionError> {
        let mut wizard = super::load_wizard(self.answer_store.as_ref(), cmd.session_id).await;
        wizard.retreat()?;
        super::persist_wizard(self.answer_store.as_ref(), &wizard).await?;
        Ok(RetreatQuestionResult {
            view: wizard.view(),
        })
    }
}
