//! SubmitIntakeHandler - Command handler for the final submission.
//!
//! Submission is fire-and-forget from the client's point of view: the
//! domain gate (final question plus consent) runs synchronously, then the
//! gateway call happens in a background task while the caller already sees
//! the submitted view. A shared indicator stays active for at least a
//! configured minimum so a fast gateway response still produces visible
//! feedback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::questionnaire::WizardView;
use crate::ports::{AnswerStore, SubmissionGateway};

/// Shared flag reporting whether a submission is in flight.
#[derive(Debug, Clone, Default)]
pub struct SubmissionIndicator(Arc<AtomicBool>);

impl SubmissionIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a submission (or its minimum visibility window) runs.
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn set(&self, active: bool) {
        self.0.store(active, Ordering::SeqCst);
    }
}

/// Command to submit the completed intake.
#[derive(Debug, Clone)]
pub struct SubmitIntakeCommand {
    pub session_id: SessionId,
}

/// Result of successfully submitting.
#[derive(Debug, Clone)]
pub struct SubmitIntakeResult {
    /// Always the submitted view.
    pub view: WizardView,
    /// Indicator the caller can poll for delivery feedback.
    pub indicator: SubmissionIndicator,
}

/// Error type for submitting.
#[derive(Debug)]
pub enum SubmitIntakeError {
    /// Domain error (not at the final question, consent missing, ...).
    Domain(DomainError),
}

impl std::fmt::Display for SubmitIntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitIntakeError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SubmitIntakeError {}

impl From<DomainError> for SubmitIntakeError {
    fn from(err: DomainError) -> Self {
        SubmitIntakeError::Domain(err)
    }
}

/// Handler for final submission.
pub struct SubmitIntakeHandler {
    answer_store: Arc<dyn AnswerStore>,
    gateway: Arc<dyn SubmissionGateway>,
    indicator: SubmissionIndicator,
    min_visible: Duration,
}

impl SubmitIntakeHandler {
    pub fn new(
        answer_store: Arc<dyn AnswerStore>,
        gateway: Arc<dyn SubmissionGateway>,
        min_visible: Duration,
    ) -> Self {
        Self {
            answer_store,
            gateway,
            indicator: SubmissionIndicator::new(),
            min_visible,
        }
    }

    /// The indicator shared with every submission this handler launches.
    pub fn indicator(&self) -> SubmissionIndicator {
        self.indicator.clone()
    }

    pub async fn handle(
        &self,
        cmd: SubmitIntakeCommand,
    ) -> Result<SubmitIntakeResult, SubmitIntakeError> {
        let mut wizard = super::load_wizard(self.answer_store.as_ref(), cmd.session_id).await;
        wizard.submit()?;

        // The session is finished; stored state is no longer needed. Failure
        // here only leaves a stale file behind.
        if let Err(e) = self.answer_store.clear(cmd.session_id).await {
            tracing::warn!(
                session_id = %cmd.session_id,
                error = %e,
                "Failed to clear stored state after submission"
            );
        }

        self.indicator.set(true);
        let gateway = Arc::clone(&self.gateway);
        let indicator = self.indicator.clone();
        let answers = wizard.answers().clone();
        let min_visible = self.min_visible;
        let session_id = cmd.session_id;
        tokio::spawn(async move {
            let (result, _) = tokio::join!(
                gateway.submit(session_id, &answers),
                tokio::time::sleep(min_visible)
            );
            if let Err(e) = result {
                tracing::error!(
                    session_id = %session_id,
                    error = %e,
                    "Intake submission failed"
                );
            }
            indicator.set(false);
        });

        Ok(SubmitIntakeResult {
            view: wizard.view(),
            indicator: self.indicator.clone(),
        })
    }
}
