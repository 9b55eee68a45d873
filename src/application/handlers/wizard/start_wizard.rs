//! StartWizardHandler - Command handler for leaving the intro screen.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::WizardView;
use crate::ports::{AnswerStore, AnswerStoreError};

/// Command to start the wizard for a session.
#[derive(Debug, Clone)]
pub struct StartWizardCommand {
    pub session_id: SessionId,
}

/// Result of successfully starting the wizard.
#[derive(Debug, Clone)]
pub struct StartWizardResult {
    /// View of the first question.
    pub view: WizardView,
}

/// Error type for starting the wizard.
#[derive(Debug)]
pub enum StartWizardError {
    /// Domain error (e.g., already started).
    Domain(DomainError),
    /// Persisting the started wizard failed.
    Storage(AnswerStoreError),
}

impl std::fmt::Display for StartWizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartWizardError::Domain(err) => write!(f, "{}", err),
            StartWizardError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StartWizardError {}

impl From<DomainError> for StartWizardError {
    fn from(err: DomainError) -> Self {
        StartWizardError::Domain(err)
    }
}

impl From<AnswerStoreError> for StartWizardError {
    fn from(err: AnswerStoreError) -> Self {
        StartWizardError::Storage(err)
    }
}

/// Handler for starting the wizard.
pub struct StartWizardHandler {
    answer_store: Arc<dyn AnswerStore>,
}

impl StartWizardHandler {
    pub fn new(answer_store: Arc<dyn AnswerStore>) -> Self {
        Self { answer_store }
    }

    pub async fn handle(
        &self,
        cmd: StartWizardCommand,
    ) -> Result<StartWizardResult, StartWizardError> {
        let mut wizard = super::load_wizard(self.answer_store.as_ref(), cmd.session_id).await;
        wizard.start()?;
        super::persist_wizard(self.answer_store.as_ref(), &wizard).await?;
        Ok(StartWizardResult {
            view: wizard.view(),
        })
    }
}
