//! ResumeWizardHandler - Command handler for reopening a session.
//!
//! Resume never fails: missing, corrupt, or unreadable stored state all
//! degrade to a fresh wizard at the intro screen.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::WizardView;
use crate::ports::AnswerStore;

/// Command to resume the wizard for a session.
#[derive(Debug, Clone)]
pub struct ResumeWizardCommand {
    pub session_id: SessionId,
}

/// Result of resuming the wizard.
#[derive(Debug, Clone)]
pub struct ResumeWizardResult {
    /// View of wherever the session left off.
    pub view: WizardView,
}

/// Handler for resuming a session.
pub struct ResumeWizardHandler {
    answer_store: Arc<dyn AnswerStore>,
}

impl ResumeWizardHandler {
    pub fn new(answer_store: Arc<dyn AnswerStore>) -> Self {
        Self { answer_store }
    }

    pub async fn handle(&self, cmd: ResumeWizardCommand) -> ResumeWizardResult {
        let wizard = super::load_wizard(self.answer_store.as_ref(), cmd.session_id).await;
        ResumeWizardResult {
            view: wizard.view(),
        }
    }
}
