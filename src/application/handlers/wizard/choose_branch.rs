//! ChooseBranchHandler - Command handler for the dietary-style choice.
//!
//! Selecting a branch rewrites the rest of the survey: question total,
//! numbering, and section boundaries all change, and answers recorded past
//! the branch question under the previous choice are discarded.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::{DietBranch, WizardView};
use crate::ports::{AnswerStore, AnswerStoreError};

/// Command to choose (or switch) the dietary branch.
#[derive(Debug, Clone)]
pub struct ChooseBranchCommand {
    pub session_id: SessionId,
    pub choice: DietBranch,
}

/// Result of successfully choosing a branch.
#[derive(Debug, Clone)]
pub struct ChooseBranchResult {
    /// View under the new branch, with recomputed totals.
    pub view: WizardView,
}

/// Error type for choosing a branch.
#[derive(Debug)]
pub enum ChooseBranchError {
    /// Domain error (e.g., session not started).
    Domain(DomainError),
    /// Persisting the rewritten sheet failed.
    Storage(AnswerStoreError),
}

impl std::fmt::Display for ChooseBranchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChooseBranchError::Domain(err) => write!(f, "{}", err),
            ChooseBranchError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ChooseBranchError {}

impl From<DomainError> for ChooseBranchError {
    fn from(err: DomainError) -> Self {
        ChooseBranchError::Domain(err)
    }
}

impl From<AnswerStoreError> for ChooseBranchError {
    fn from(err: AnswerStoreError) -> Self {
        ChooseBranchError::Storage(err)
    }
}

/// Handler for branch selection.
pub struct ChooseBranchHandler {
    answer_store: Arc<dyn AnswerStore>,
}

impl ChooseBranchHandler {
    pub fn new(answer_store: Arc<dyn AnswerStore>) -> Self {
        Self { answer_store }
    }

    pub async fn handle(
        &self,
        cmd: ChooseBranchCommand,
    ) -> Result<ChooseBranchResult, ChooseBranchError> {
        let mut wizard = super::load_wizard(self.answer_store.as_ref(), cmd.session_id).await;
        wizard.choose_branch(cmd.choice)?;
        super::persist_wizard(self.answer_store.as_ref(), &wizard).await?;
        Ok(ChooseBranchResult {
            view: wizard.view(),
        })
    }
}
