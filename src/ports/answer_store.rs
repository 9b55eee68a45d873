//! Answer Store Port - Interface for persisting wizard state per session.
//!
//! This port defines how answers and the current position are saved and
//! loaded, supporting both in-memory and file-backed storage. Answers and
//! position are persisted separately so a partial write can never corrupt
//! the sheet.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::AnswerSheet;

/// Errors that can occur during answer storage operations
#[derive(Debug, thiserror::Error)]
pub enum AnswerStoreError {
    #[error("No stored state for session: {0}")]
    NotFound(SessionId),

    #[error("Failed to serialize session state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session state: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and loading a session's answers and position
#[async_trait]
pub trait AnswerStore: Send + Sync {
    /// Save the full answer sheet for a session
    ///
    /// # Errors
    /// Returns `AnswerStoreError` if save fails
    async fn save_answers(
        &self,
        session_id: SessionId,
        answers: &AnswerSheet,
    ) -> Result<(), AnswerStoreError>;

    /// Load the answer sheet for a session
    ///
    /// # Returns
    /// `None` if the session has never saved answers
    async fn load_answers(
        &self,
        session_id: SessionId,
    ) -> Result<Option<AnswerSheet>, AnswerStoreError>;

    /// Save the current display index for a session
    ///
    /// # Errors
    /// Returns `AnswerStoreError` if save fails
    async fn save_position(
        &self,
        session_id: SessionId,
        display_index: usize,
    ) -> Result<(), AnswerStoreError>;

    /// Load the saved display index for a session
    ///
    /// # Returns
    /// `None` if the session has never saved a position
    async fn load_position(
        &self,
        session_id: SessionId,
    ) -> Result<Option<usize>, AnswerStoreError>;

    /// Delete all stored state for a session
    ///
    /// # Errors
    /// Returns `AnswerStoreError` if deletion fails
    async fn clear(&self, session_id: SessionId) -> Result<(), AnswerStoreError>;
}
