//! Stub text classifier.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::taxonomy::{Primary, PRIMARY_COUNT};
use crate::traits::{PrimaryDistribution, TextClassifier};

/// Stub classifier returning deterministic distributions from input hashing.
///
/// The same text always produces the same distribution, which is what the
/// idempotence tests need. A pinned distribution or a hard failure can be
/// configured for targeted tests.
#[derive(Debug, Clone, Default)]
pub struct StubClassifier {
    pinned: Option<PrimaryDistribution>,
    fail: bool,
}

impl StubClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always return the given distribution.
    pub fn pinned(dist: PrimaryDistribution) -> Self {
        Self {
            pinned: Some(dist),
            fail: false,
        }
    }

    /// Always fail, for exercising the degraded fallback path.
    pub fn failing() -> Self {
        Self {
            pinned: None,
            fail: true,
        }
    }

    fn hash_to_float(input: &str, seed: u64) -> f32 {
        let mut hasher = DefaultHasher::new();
        input.hash(&mut hasher);
        seed.hash(&mut hasher);
        let hash = hasher.finish();
        (hash as f64 / u64::MAX as f64) as f32
    }
}

#[async_trait]
impl TextClassifier for StubClassifier {
    async fn classify(&self, text: &str) -> CoreResult<PrimaryDistribution> {
        if self.fail {
            return Err(CoreError::ProviderUnavailable {
                provider: "stub_classifier".to_string(),
                message: "configured to fail".to_string(),
            });
        }
        if let Some(dist) = self.pinned {
            return Ok(dist);
        }
        let mut scores = [0.0f32; PRIMARY_COUNT];
        for primary in Primary::ALL {
            scores[primary.index()] = Self::hash_to_float(text, primary.index() as u64 + 1);
        }
        Ok(PrimaryDistribution::from_scores(scores))
    }

    fn name(&self) -> &'static str {
        "stub_classifier"
    }
}
