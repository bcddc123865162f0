//! External text classifier abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::taxonomy::{Primary, PRIMARY_COUNT};

/// A probability distribution over the six primary families.
///
/// Probabilities are kept normalized (sum = 1) and indexed by
/// [`Primary::index`].
///
/// # Example
///
/// ```
/// use affect_graph_core::traits::PrimaryDistribution;
/// use affect_graph_core::taxonomy::Primary;
///
/// let dist = PrimaryDistribution::uniform();
/// assert!((dist.get(Primary::Mad) - 1.0 / 6.0).abs() < 1e-6);
/// assert!(dist.entropy() > 0.99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimaryDistribution {
    probs: [f32; PRIMARY_COUNT],
}

impl PrimaryDistribution {
    /// Build from raw scores, clamping negatives to zero and normalizing.
    /// An all-zero input yields the uniform distribution.
    pub fn from_scores(scores: [f32; PRIMARY_COUNT]) -> Self {
        let mut probs = scores.map(|s| if s.is_finite() { s.max(0.0) } else { 0.0 });
        let sum: f32 = probs.iter().sum();
        if sum <= f32::EPSILON {
            return Self::uniform();
        }
        for p in &mut probs {
            *p /= sum;
        }
        Self { probs }
    }

    /// The maximum-entropy distribution.
    pub fn uniform() -> Self {
        Self {
            probs: [1.0 / PRIMARY_COUNT as f32; PRIMARY_COUNT],
        }
    }

    #[inline]
    pub fn get(&self, primary: Primary) -> f32 {
        self.probs[primary.index()]
    }

    /// Multiply one candidate's probability and renormalize.
    pub fn scale(&mut self, primary: Primary, factor: f32) {
        self.probs[primary.index()] *= factor.max(0.0);
        *self = Self::from_scores(self.probs);
    }

    /// The most probable primary.
    pub fn argmax(&self) -> Primary {
        let mut best = Primary::ALL[0];
        let mut best_p = self.probs[0];
        for primary in Primary::ALL {
            let p = self.get(primary);
            if p > best_p {
                best_p = p;
                best = primary;
            }
        }
        best
    }

    /// Shannon entropy normalized to `[0, 1]` (1 = uniform).
    pub fn entropy(&self) -> f32 {
        let h: f32 = self
            .probs
            .iter()
            .filter(|&&p| p > 0.0)
            .map(|&p| -p * p.ln())
            .sum();
        h / (PRIMARY_COUNT as f32).ln()
    }

    /// Raw probabilities in canonical order.
    #[inline]
    pub fn as_array(&self) -> [f32; PRIMARY_COUNT] {
        self.probs
    }
}

/// Six-way primary classifier behind an abstract interface.
///
/// Implementations may call a remote model; the pipeline always invokes
/// this through a bounded timeout and falls back to the deterministic
/// rule-only distribution on failure.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Classify normalized text into a distribution over the six primaries.
    async fn classify(&self, text: &str) -> CoreResult<PrimaryDistribution>;

    /// Human-readable provider name for provenance and logs.
    fn name(&self) -> &'static str {
        "classifier"
    }
}
