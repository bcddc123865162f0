//! Bounded per-user history supplied by the persistence collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One prior reflection in compact form.
///
/// Histories are ordered most-recent-first and bounded by the persistence
/// collaborator; the engine never asks for unbounded history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Id of the prior reflection.
    pub reflection_id: Uuid,

    /// Signed valence recorded for that reflection.
    pub valence: f32,

    /// Arousal recorded for that reflection.
    pub arousal: f32,

    /// Event labels extracted at the time (domain keywords and anchor
    /// categories), used by the thread detector.
    pub event_labels: Vec<String>,

    /// Lowercased token set of the original text, used for lexical overlap.
    /// Kept small by the persistence layer.
    #[serde(default)]
    pub tokens: Vec<String>,

    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        reflection_id: Uuid,
        valence: f32,
        arousal: f32,
        event_labels: Vec<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            reflection_id,
            valence,
            arousal,
            event_labels,
            tokens: Vec::new(),
            timestamp,
        }
    }

    pub fn with_tokens(mut self, tokens: Vec<String>) -> Self {
        self.tokens = tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_default_empty_on_deserialize() {
        let json = r#"{
            "reflection_id": "00000000-0000-0000-0000-000000000000",
            "valence": 0.2, "arousal": 0.4,
            "event_labels": ["work"],
            "timestamp": "2026-01-01T00:00:00Z"
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert!(entry.tokens.is_empty());
        assert_eq!(entry.event_labels, vec!["work"]);
    }
}
