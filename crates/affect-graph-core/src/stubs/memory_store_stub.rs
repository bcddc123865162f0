//! In-memory persistence store.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::CoreResult;
use crate::traits::PersistenceStore;
use crate::types::{DynamicsState, HistoryEntry, TemporalState};

#[derive(Debug, Default, Clone)]
struct UserRecord {
    dynamics: Option<DynamicsState>,
    temporal: Option<TemporalState>,
    /// Most-recent-first.
    history: Vec<HistoryEntry>,
}

/// In-memory per-user store. Data is lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a history entry for test setup (most recent goes first).
    pub fn push_history(&self, user_id: &str, entry: HistoryEntry) {
        let mut users = self.users.write();
        let record = users.entry(user_id.to_string()).or_default();
        record.history.insert(0, entry);
    }

    /// Seed a temporal state directly, bypassing the pipeline.
    pub fn seed_temporal(&self, user_id: &str, state: TemporalState) {
        let mut users = self.users.write();
        users.entry(user_id.to_string()).or_default().temporal = Some(state);
    }
}

#[async_trait]
impl PersistenceStore for InMemoryStore {
    async fn load_dynamics(&self, user_id: &str) -> CoreResult<Option<DynamicsState>> {
        Ok(self.users.read().get(user_id).and_then(|r| r.dynamics))
    }

    async fn store_dynamics(&self, user_id: &str, state: &DynamicsState) -> CoreResult<()> {
        let mut users = self.users.write();
        users.entry(user_id.to_string()).or_default().dynamics = Some(*state);
        Ok(())
    }

    async fn load_temporal(&self, user_id: &str) -> CoreResult<Option<TemporalState>> {
        Ok(self
            .users
            .read()
            .get(user_id)
            .and_then(|r| r.temporal.clone()))
    }

    async fn store_temporal(&self, user_id: &str, state: &TemporalState) -> CoreResult<()> {
        let mut users = self.users.write();
        users.entry(user_id.to_string()).or_default().temporal = Some(state.clone());
        Ok(())
    }

    async fn recent_history(&self, user_id: &str, limit: usize) -> CoreResult<Vec<HistoryEntry>> {
        Ok(self
            .users
            .read()
            .get(user_id)
            .map(|r| r.history.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_new_user_empty() {
        let store = InMemoryStore::new();
        assert!(store.load_dynamics("u1").await.unwrap().is_none());
        assert!(store.load_temporal("u1").await.unwrap().is_none());
        assert!(store.recent_history("u1", 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_and_load_dynamics() {
        let store = InMemoryStore::new();
        let state = DynamicsState::new(0.4, 0.6);
        store.store_dynamics("u1", &state).await.unwrap();
        assert_eq!(store.load_dynamics("u1").await.unwrap(), Some(state));
    }

    #[tokio::test]
    async fn test_history_order_and_limit() {
        let store = InMemoryStore::new();
        for i in 0..5 {
            store.push_history(
                "u1",
                HistoryEntry::new(
                    Uuid::new_v4(),
                    i as f32 * 0.1,
                    0.3,
                    vec![format!("label{i}")],
                    Utc::now(),
                ),
            );
        }
        let history = store.recent_history("u1", 3).await.unwrap();
        assert_eq!(history.len(), 3);
        // Most recent push is first.
        assert_eq!(history[0].event_labels, vec!["label4"]);
    }
}
