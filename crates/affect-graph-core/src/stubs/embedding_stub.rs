//! Stub embedding provider using token overlap.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::traits::EmbeddingProvider;

/// Deterministic similarity from token overlap.
///
/// Scores are the Jaccard overlap between the text's token set and the
/// candidate phrase's tokens, with a substring bonus so that a candidate
/// word appearing verbatim in the text scores high. Deterministic, which is
/// what the selection tests rely on.
#[derive(Debug, Clone, Default)]
pub struct StubEmbeddingProvider;

impl StubEmbeddingProvider {
    pub fn new() -> Self {
        Self
    }

    fn tokens(text: &str) -> HashSet<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '-')
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect()
    }

    fn score(text_tokens: &HashSet<String>, text: &str, candidate: &str) -> f32 {
        let cand_tokens = Self::tokens(candidate);
        if cand_tokens.is_empty() {
            return 0.0;
        }
        let overlap = cand_tokens.intersection(text_tokens).count() as f32;
        let jaccard = overlap / (cand_tokens.len() as f32 + text_tokens.len() as f32 - overlap);
        let verbatim = if text.contains(&candidate.to_lowercase()) {
            0.6
        } else {
            0.0
        };
        (jaccard + verbatim).clamp(0.0, 1.0)
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbeddingProvider {
    async fn score_candidates(&self, text: &str, candidates: &[&str]) -> CoreResult<Vec<f32>> {
        let lowered = text.to_lowercase();
        let text_tokens = Self::tokens(&lowered);
        Ok(candidates
            .iter()
            .map(|candidate| Self::score(&text_tokens, &lowered, candidate))
            .collect())
    }

    fn name(&self) -> &'static str {
        "stub_embedding"
    }
}
