//! In-Memory Answer Store Adapter
//!
//! Stores answer sheets and positions in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::SessionId;
use crate::domain::questionnaire::AnswerSheet;
use crate::ports::{AnswerStore, AnswerStoreError};

/// In-memory storage for wizard session state
#[derive(Debug, Clone)]
pub struct InMemoryAnswerStore {
    answers: Arc<RwLock<HashMap<SessionId, AnswerSheet>>>,
    positions: Arc<RwLock<HashMap<SessionId, usize>>>,
}

impl InMemoryAnswerStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            answers: Arc::new(RwLock::new(HashMap::new())),
            positions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear_all(&self) {
        self.answers.write().await.clear();
        self.positions.write().await.clear();
    }

    /// Get the number of sessions with stored answers
    pub async fn session_count(&self) -> usize {
        self.answers.read().await.len()
    }
}

impl Default for InMemoryAnswerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnswerStore for InMemoryAnswerStore {
    async fn save_answers(
        &self,
        session_id: SessionId,
        answers: &AnswerSheet,
    ) -> Result<(), AnswerStoreError> {
        let mut map = self.answers.write().await;
        map.insert(session_id, answers.clone());
        Ok(())
    }

    async fn load_answers(
        &self,
        session_id: SessionId,
    ) -> Result<Option<AnswerSheet>, AnswerStoreError> {
        let map = self.answers.read().await;
        Ok(map.get(&session_id).cloned())
    }

    async fn save_position(
        &self,
        session_id: SessionId,
        display_index: usize,
    ) -> Result<(), AnswerStoreError> {
        let mut map = self.positions.write().await;
        map.insert(session_id, display_index);
        Ok(())
    }

    async fn load_position(
        &self,
        session_id: SessionId,
    ) -> Result<Option<usize>, AnswerStoreError> {
        let map = self.positions.read().await;
        Ok(map.get(&session_id).copied())
    }

    async fn clear(&self, session_id: SessionId) -> Result<(), AnswerStoreError> {
        self.answers.write().await.remove(&session_id);
        self.positions.write().await.remove(&session_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::{AnswerKey, AnswerValue};

    #[tokio::test]
    async fn round_trips_answers_and_position() {
        let store = InMemoryAnswerStore::new();
        let session_id = SessionId::new();

        let mut sheet = AnswerSheet::new();
        sheet.record(AnswerKey::question(0), AnswerValue::Text("Jane".into()));

        store.save_answers(session_id, &sheet).await.unwrap();
        store.save_position(session_id, 7).await.unwrap();

        assert_eq!(store.load_answers(session_id).await.unwrap(), Some(sheet));
        assert_eq!(store.load_position(session_id).await.unwrap(), Some(7));
    }

    #[tokio::test]
    async fn unknown_session_loads_as_none() {
        let store = InMemoryAnswerStore::new();
        assert_eq!(store.load_answers(SessionId::new()).await.unwrap(), None);
        assert_eq!(store.load_position(SessionId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn clear_removes_both_answers_and_position() {
        let store = InMemoryAnswerStore::new();
        let session_id = SessionId::new();

        store
            .save_answers(session_id, &AnswerSheet::new())
            .await
            .unwrap();
        store.save_position(session_id, 3).await.unwrap();
        assert_eq!(store.session_count().await, 1);

        store.clear(session_id).await.unwrap();
        assert_eq!(store.load_answers(session_id).await.unwrap(), None);
        assert_eq!(store.load_position(session_id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let store = InMemoryAnswerStore::new();
        let first = SessionId::new();
        let second = SessionId::new();

        store.save_position(first, 1).await.unwrap();
        store.save_position(second, 20).await.unwrap();

        assert_eq!(store.load_position(first).await.unwrap(), Some(1));
        assert_eq!(store.load_position(second).await.unwrap(), Some(20));
    }
}
