//! Wizard command handlers.
//!
//! Handlers are stateless: each command reconstitutes the wizard from the
//! answer store, applies one domain operation, persists, and returns the
//! renderable view. A failed or corrupt load degrades to a fresh wizard so
//! storage trouble never locks a client out of starting over; a failed save
//! is an error, because the mutation would otherwise be silently lost.

mod advance_question;
mod choose_branch;
mod record_answer;
mod resume_wizard;
mod retreat_question;
mod start_wizard;
mod submit_intake;

pub use advance_question::{
    AdvanceQuestionCommand, AdvanceQuestionError, AdvanceQuestionHandler, AdvanceQuestionResult,
};
pub use choose_branch::{
    ChooseBranchCommand, ChooseBranchError, ChooseBranchHandler, ChooseBranchResult,
};
pub use record_answer::{
    AnswerEntry, RecordAnswerCommand, RecordAnswerError, RecordAnswerHandler, RecordAnswerResult,
};
pub use resume_wizard::{ResumeWizardCommand, ResumeWizardHandler, ResumeWizardResult};
pub use retreat_question::{
    RetreatQuestionCommand, RetreatQuestionError, RetreatQuestionHandler, RetreatQuestionResult,
};
pub use start_wizard::{StartWizardCommand, StartWizardError, StartWizardHandler, StartWizardResult};
pub use submit_intake::{
    SubmissionIndicator, SubmitIntakeCommand, SubmitIntakeError, SubmitIntakeHandler,
    SubmitIntakeResult,
};

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::IntakeWizard;
use crate::ports::{AnswerStore, AnswerStoreError};

/// Rebuilds the session's wizard from the store.
///
/// Load failures are logged and treated as absent state, so the caller
/// always gets a usable wizard.
pub(crate) async fn load_wizard(store: &dyn AnswerStore, session_id: SessionId) -> IntakeWizard {
    let answers = match store.load_answers(session_id).await {
        Ok(answers) => answers,
        Err(e) => {
            tracing::warn!(
                session_id = %session_id,
                error = %e,
                "Failed to load answers; starting fresh"
            );
            None
        }
    };
    let position = match store.load_position(session_id).await {
        Ok(position) => position,
        Err(e) => {
            tracing::warn!(
                session_id = %session_id,
                error = %e,
                "Failed to load position; resuming at the intro"
            );
            None
        }
    };
    IntakeWizard::reconstitute(session_id, answers.unwrap_or_default(), position)
}

/// Persists the wizard's answers and, when at a question, its position.
pub(crate) async fn persist_wizard(
    store: &dyn AnswerStore,
    wizard: &IntakeWizard,
) -> Result<(), AnswerStoreError> {
    store
        .save_answers(wizard.session_id(), wizard.answers())
        .await?;
    if let Some(display) = wizard.display_index() {
        store.save_position(wizard.session_id(), display).await?;
    }
    Ok(())
}
