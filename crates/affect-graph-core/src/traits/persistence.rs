//! Persistence collaborator abstraction.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{DynamicsState, HistoryEntry, TemporalState};

/// Per-user state storage and read-only history access.
///
/// The engine owns the single-writer discipline per user key; the store is
/// only required to be individually consistent per call. History is
/// most-recent-first and bounded by `limit`; the store never returns more.
/// History writes are the ingestion collaborator's concern, not the
/// engine's, so this trait exposes no append.
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Load the smoothed affective state, `None` for a new user.
    async fn load_dynamics(&self, user_id: &str) -> CoreResult<Option<DynamicsState>>;

    /// Persist the smoothed affective state.
    async fn store_dynamics(&self, user_id: &str, state: &DynamicsState) -> CoreResult<()>;

    /// Load the temporal tracker state, `None` for a new user.
    async fn load_temporal(&self, user_id: &str) -> CoreResult<Option<TemporalState>>;

    /// Persist the temporal tracker state.
    async fn store_temporal(&self, user_id: &str, state: &TemporalState) -> CoreResult<()>;

    /// Most-recent-first bounded history for a user.
    async fn recent_history(&self, user_id: &str, limit: usize) -> CoreResult<Vec<HistoryEntry>>;
}
