//! Embedding similarity abstraction.

use async_trait::async_trait;

use crate::error::CoreResult;

/// Similarity scoring behind an abstract interface.
///
/// The selector asks for the similarity between a reflection and a batch of
/// candidate feeling phrases in a single call; implementations are expected
/// to embed once and score all candidates from that embedding. All scores
/// are unit values in `[0, 1]`.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Score `text` against each candidate phrase, preserving order.
    ///
    /// The returned vector must have `candidates.len()` entries.
    async fn score_candidates(&self, text: &str, candidates: &[&str]) -> CoreResult<Vec<f32>>;

    /// Human-readable provider name for provenance and logs.
    fn name(&self) -> &'static str {
        "embedding"
    }
}
