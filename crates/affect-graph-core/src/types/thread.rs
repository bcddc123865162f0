//! Thread linkage between a reflection and related past ones.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How strongly a past reflection relates to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadRelation {
    /// Score ≥ 0.9 with overlapping event labels.
    Identical,
    /// Score ≥ 0.75, same underlying events recurring.
    Recurring,
    /// Linked with overlapping event labels below the recurring band.
    Related,
    /// Linked on lexical similarity alone.
    Tangential,
}

/// One link from the current reflection to a past one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadLink {
    pub target: Uuid,
    /// Combined similarity in `[0, 1]`.
    pub score: f32,
    pub relation: ThreadRelation,
}

/// Thread status of the current reflection within the user's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThreadState {
    /// No history at all.
    #[default]
    New,
    /// History exists but nothing linked within the window.
    Isolated,
    /// Top link is in the identical band.
    Recurring,
    /// Three or more links.
    Ongoing,
    /// At least one link, below the other bands.
    Related,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_serde() {
        let json = serde_json::to_string(&ThreadRelation::Tangential).unwrap();
        assert_eq!(json, "\"tangential\"");
    }

    #[test]
    fn test_default_thread_state() {
        assert_eq!(ThreadState::default(), ThreadState::New);
    }
}
