//! Duplicate-classification cache.
//!
//! Keyed by (user, normalized text). Classification (extraction through
//! calibration) is pure, so a duplicate reflection can reuse the cached
//! outcome; the dynamics/temporal advance always runs regardless, which is
//! why only the classification half of the pipeline lives here.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};

use parking_lot::Mutex;

use affect_graph_core::taxonomy::WheelPath;
use affect_graph_core::types::{
    EventContext, ExpressedSignal, LinguisticFlags, RiskSignal,
};

/// The classification half of an enrichment, reusable across duplicate
/// reflections.
#[derive(Debug, Clone)]
pub struct CachedClassification {
    /// `None` on the neutral-gate and confidence-floor paths.
    pub wheel: Option<WheelPath>,
    /// Signed invoked valence.
    pub valence: f32,
    pub arousal: f32,
    pub confidence: f32,
    pub event: EventContext,
    pub flags: LinguisticFlags,
    pub expressed: ExpressedSignal,
    pub risk_hits: Vec<RiskSignal>,
    pub event_labels: Vec<String>,
    pub tokens: Vec<String>,
    /// Whether any provider fell back during this classification.
    pub degraded: bool,
}

#[derive(Default)]
struct CacheInner {
    map: HashMap<u64, CachedClassification>,
    order: VecDeque<u64>,
}

/// Bounded (user, text)-keyed cache with oldest-first eviction.
pub struct ClassificationCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
    enabled: bool,
}

impl ClassificationCache {
    pub fn new(enabled: bool, capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            capacity: capacity.max(1),
            enabled,
        }
    }

    fn key(user_id: &str, normalized_text: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        user_id.hash(&mut hasher);
        normalized_text.hash(&mut hasher);
        hasher.finish()
    }

    pub fn get(&self, user_id: &str, normalized_text: &str) -> Option<CachedClassification> {
        if !self.enabled {
            return None;
        }
        let key = Self::key(user_id, normalized_text);
        self.inner.lock().map.get(&key).cloned()
    }

    pub fn put(&self, user_id: &str, normalized_text: &str, value: CachedClassification) {
        if !self.enabled {
            return;
        }
        let key = Self::key(user_id, normalized_text);
        let mut inner = self.inner.lock();
        if inner.map.insert(key, value).is_none() {
            inner.order.push_back(key);
        }
        while inner.order.len() > self.capacity {
            if let Some(evicted) = inner.order.pop_front() {
                inner.map.remove(&evicted);
            }
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.lock().map.len()
    }
}
