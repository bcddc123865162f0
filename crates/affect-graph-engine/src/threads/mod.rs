//! Recursion/thread detection.
//!
//! Links the current reflection to related past ones by combining lexical
//! token overlap with event-label overlap, within a fixed day window and a
//! bounded candidate cap. Lateral to the classification chain: thread links
//! never influence scoring.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use affect_graph_core::types::{HistoryEntry, ThreadLink, ThreadRelation, ThreadState};

use crate::config::ThreadConfig;

/// Result of thread detection for one reflection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThreadOutcome {
    /// Kept links, sorted by descending score, capped.
    pub links: Vec<ThreadLink>,
    pub state: ThreadState,
}

/// Detects links between the current reflection and bounded history.
#[derive(Debug, Clone)]
pub struct ThreadDetector {
    config: ThreadConfig,
}

impl ThreadDetector {
    pub fn new(config: &ThreadConfig) -> Self {
        Self { config: *config }
    }

    /// Detect links against most-recent-first history.
    pub fn detect(
        &self,
        tokens: &[String],
        event_labels: &[String],
        history: &[HistoryEntry],
        now: DateTime<Utc>,
    ) -> ThreadOutcome {
        if history.is_empty() {
            return ThreadOutcome {
                links: Vec::new(),
                state: ThreadState::New,
            };
        }

        let cfg = &self.config;
        let window = Duration::seconds((cfg.window_days * 86_400.0) as i64);
        let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        let label_set: HashSet<&str> = event_labels.iter().map(String::as_str).collect();

        let mut links: Vec<ThreadLink> = history
            .iter()
            .filter(|entry| now.signed_duration_since(entry.timestamp) <= window)
            .take(cfg.max_candidates)
            .filter_map(|entry| {
                let entry_tokens: HashSet<&str> =
                    entry.tokens.iter().map(String::as_str).collect();
                let entry_labels: HashSet<&str> =
                    entry.event_labels.iter().map(String::as_str).collect();

                let lexical = jaccard(&token_set, &entry_tokens);
                let label = jaccard(&label_set, &entry_labels);
                let score = cfg.lexical_weight * lexical + cfg.label_weight * label;
                if score < cfg.min_link_score {
                    return None;
                }

                let labels_overlap = !label_set.is_disjoint(&entry_labels);
                Some(ThreadLink {
                    target: entry.reflection_id,
                    score: score.clamp(0.0, 1.0),
                    relation: self.relation(score, labels_overlap),
                })
            })
            .collect();

        links.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        links.truncate(cfg.max_links);

        let state = self.thread_state(&links);
        tracing::debug!(links = links.len(), state = ?state, "thread detection complete");
        ThreadOutcome { links, state }
    }

    /// Bucket a link score into a relation, refined by whether event labels
    /// actually overlap.
    fn relation(&self, score: f32, labels_overlap: bool) -> ThreadRelation {
        let cfg = &self.config;
        if score >= cfg.identical_band {
            if labels_overlap {
                ThreadRelation::Identical
            } else {
                ThreadRelation::Recurring
            }
        } else if score >= cfg.recurring_band {
            if labels_overlap {
                ThreadRelation::Recurring
            } else {
                ThreadRelation::Related
            }
        } else if labels_overlap {
            ThreadRelation::Related
        } else {
            ThreadRelation::Tangential
        }
    }

    fn thread_state(&self, links: &[ThreadLink]) -> ThreadState {
        if links.is_empty() {
            return ThreadState::Isolated;
        }
        if links[0].score >= self.config.identical_band {
            return ThreadState::Recurring;
        }
        if links.len() >= self.config.ongoing_link_count {
            return ThreadState::Ongoing;
        }
        ThreadState::Related
    }
}

fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> f32 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count() as f32;
    let union = (a.len() + b.len()) as f32 - intersection;
    if union <= 0.0 {
        0.0
    } else {
        intersection / union
    }
}
