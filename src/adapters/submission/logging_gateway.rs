//! Logging Submission Gateway Adapter
//!
//! Records completed intakes to the structured log instead of an external
//! record system. Used in development and as the default wiring until a
//! practice-management integration is configured.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::AnswerSheet;
use crate::ports::{SubmissionError, SubmissionGateway};

/// Gateway that logs submissions and always accepts them
#[derive(Debug, Clone, Default)]
pub struct LoggingSubmissionGateway;

impl LoggingSubmissionGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionGateway for LoggingSubmissionGateway {
    async fn submit(
        &self,
        session_id: SessionId,
        answers: &AnswerSheet,
    ) -> Result<(), SubmissionError> {
        tracing::info!(
            session_id = %session_id,
            answer_count = answers.len(),
            "Intake submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_every_submission() {
        let gateway = LoggingSubmissionGateway::new();
        let result = gateway.submit(SessionId::new(), &AnswerSheet::new()).await;
        assert!(result.is_ok());
    }
}
