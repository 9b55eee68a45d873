//! Submission Gateway Port - Interface for handing off a completed intake.
//!
//! The wizard itself only reaches this port after consent is confirmed;
//! implementations deliver the finished answer sheet to the practice's
//! record system.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::AnswerSheet;

/// Errors that can occur while submitting a completed intake
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Port for delivering a completed, consented answer sheet
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Submit the completed intake for a session
    ///
    /// # Errors
    /// Returns `SubmissionError` if delivery fails
    async fn submit(
        &self,
        session_id: SessionId,
        answers: &AnswerSheet,
    ) -> Result<(), SubmissionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_their_cause() {
        let err = SubmissionError::Rejected("missing consent".to_string());
        assert!(err.to_string().contains("missing consent"));
        let err = SubmissionError::Transport("connection reset".to_string());
        assert!(err.to_string().contains("connection reset"));
    }
}
