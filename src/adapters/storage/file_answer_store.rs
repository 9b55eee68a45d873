//! File-based Answer Store Adapter
//!
//! Stores each session as one JSON document on disk, keyed by session ID.
//! The answer sheet serializes to a flat string-keyed object, so the files
//! stay greppable during support work.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::AnswerSheet;
use crate::ports::{AnswerStore, AnswerStoreError};

/// On-disk shape of one session.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedSession {
    answers: AnswerSheet,
    position: Option<usize>,
}

/// File-based storage for wizard session state
#[derive(Debug, Clone)]
pub struct FileAnswerStore {
    base_path: PathBuf,
}

impl FileAnswerStore {
    /// Create a new file store with a base directory
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn session_file_path(&self, session_id: SessionId) -> PathBuf {
        self.base_path.join(format!("{}.json", session_id))
    }

    async fn ensure_base_dir(&self) -> Result<(), AnswerStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| AnswerStoreError::IoError(e.to_string()))
    }

    /// Reads a session document, treating a missing or unreadable file as
    /// absent state. A corrupt file is logged and discarded rather than
    /// blocking the session from restarting.
    async fn read_session(&self, session_id: SessionId) -> Option<PersistedSession> {
        let path = self.session_file_path(session_id);
        let raw = fs::read_to_string(&path).await.ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(
                    session_id = %session_id,
                    error = %e,
                    "Discarding corrupt session file"
                );
                None
            }
        }
    }

    async fn write_session(
        &self,
        session_id: SessionId,
        session: &PersistedSession,
    ) -> Result<(), AnswerStoreError> {
        self.ensure_base_dir().await?;
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AnswerStoreError::SerializationFailed(e.to_string()))?;
        fs::write(self.session_file_path(session_id), json)
            .await
            .map_err(|e| AnswerStoreError::IoError(e.to_string()))
    }
}

#[async_trait]
impl AnswerStore for FileAnswerStore {
    async fn save_answers(
        &self,
        session_id: SessionId,
        answers: &AnswerSheet,
    ) -> Result<(), AnswerStoreError> {
        let mut session = self.read_session(session_id).await.unwrap_or_default();
        session.answers = answers.clone();
        self.write_session(session_id, &session).await
    }

    async fn load_answers(
        &self,
        session_id: SessionId,
    ) -> Result<Option<AnswerSheet>, AnswerStoreError> {
        Ok(self
            .read_session(session_id)
            .await
            .map(|session| session.answers))
    }

    async fn save_position(
        &self,
        session_id: SessionId,
        display_index: usize,
    ) -> Result<(), AnswerStoreError> {
        let mut session = self.read_session(session_id).await.unwrap_or_default();
        session.position = Some(display_index);
        self.write_session(session_id, &session).await
    }

    async fn load_position(
        &self,
        session_id: SessionId,
    ) -> Result<Option<usize>, AnswerStoreError> {
        Ok(self
            .read_session(session_id)
            .await
            .and_then(|session| session.position))
    }

    async fn clear(&self, session_id: SessionId) -> Result<(), AnswerStoreError> {
        let path = self.session_file_path(session_id);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AnswerStoreError::IoError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::{AnswerKey, AnswerValue, DietBranch};
    use tempfile::TempDir;

    fn store() -> (TempDir, FileAnswerStore) {
        let dir = TempDir::new().unwrap();
        let store = FileAnswerStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn round_trips_a_session_document() {
        let (_dir, store) = store();
        let session_id = SessionId::new();

        let mut sheet = AnswerSheet::new();
        sheet.record(AnswerKey::question(0), AnswerValue::Text("Jane".into()));
        sheet.record(
            AnswerKey::question(10),
            AnswerValue::Choice(DietBranch::Vegan),
        );
        sheet.record(
            AnswerKey::sub_field(DietBranch::Vegan, 11, 2),
            AnswerValue::Text("fish on holidays".into()),
        );

        store.save_answers(session_id, &sheet).await.unwrap();
        store.save_position(session_id, 12).await.unwrap();

        assert_eq!(store.load_answers(session_id).await.unwrap(), Some(sheet));
        assert_eq!(store.load_position(session_id).await.unwrap(), Some(12));
    }

    #[tokio::test]
    async fn saving_position_preserves_answers() {
        let (_dir, store) = store();
        let session_id = SessionId::new();

        let mut sheet = AnswerSheet::new();
        sheet.record(AnswerKey::question(3), AnswerValue::Text("a friend".into()));
        store.save_answers(session_id, &sheet).await.unwrap();
        store.save_position(session_id, 4).await.unwrap();

        assert_eq!(store.load_answers(session_id).await.unwrap(), Some(sheet));
    }

    #[tokio::test]
    async fn missing_session_loads_as_none() {
        let (_dir, store) = store();
        assert_eq!(store.load_answers(SessionId::new()).await.unwrap(), None);
        assert_eq!(store.load_position(SessionId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_file_is_treated_as_absent() {
        let (dir, store) = store();
        let session_id = SessionId::new();
        std::fs::write(
            dir.path().join(format!("{}.json", session_id)),
            "{not json at all",
        )
        .unwrap();

        assert_eq!(store.load_answers(session_id).await.unwrap(), None);
        // A save afterwards starts from a clean document
        store
            .save_answers(session_id, &AnswerSheet::new())
            .await
            .unwrap();
        assert_eq!(
            store.load_answers(session_id).await.unwrap(),
            Some(AnswerSheet::new())
        );
    }

    #[tokio::test]
    async fn clear_deletes_the_session_file_and_is_idempotent() {
        let (dir, store) = store();
        let session_id = SessionId::new();

        store
            .save_answers(session_id, &AnswerSheet::new())
            .await
            .unwrap();
        assert!(dir.path().join(format!("{}.json", session_id)).exists());

        store.clear(session_id).await.unwrap();
        assert!(!dir.path().join(format!("{}.json", session_id)).exists());
        store.clear(session_id).await.unwrap();
    }

    #[tokio::test]
    async fn persisted_answers_are_a_flat_string_keyed_object() {
        let (dir, store) = store();
        let session_id = SessionId::new();

        let mut sheet = AnswerSheet::new();
        sheet.record(AnswerKey::question(7), AnswerValue::Text("none".into()));
        store.save_answers(session_id, &sheet).await.unwrap();

        let raw =
            std::fs::read_to_string(dir.path().join(format!("{}.json", session_id))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value["answers"]["7"]["text"].is_string());
    }
}
