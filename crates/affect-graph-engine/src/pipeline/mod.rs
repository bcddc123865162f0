//! The enrichment pipeline.
//!
//! Wires the processing components behind the provider traits into the
//! single `enrich` operation. Classification (extraction through
//! calibration) is pure and cacheable; the dynamics and temporal updates
//! advance per-user state under a per-user single-writer lock and always
//! run, cache hit or not.

mod cache;

pub use cache::{CachedClassification, ClassificationCache};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex as AsyncMutex;

use affect_graph_core::config::CoreConfig;
use affect_graph_core::error::CoreError;
use affect_graph_core::taxonomy::{EmotionWheel, Primary};
use affect_graph_core::traits::{
    EmbeddingProvider, LanguageModelProvider, PersistenceStore, PrimaryDistribution,
    TextClassifier,
};
use affect_graph_core::types::{
    domain, DynamicsReport, DynamicsState, EnrichmentRecord, HistoryEntry, InputMode, Provenance,
    RecursionReport, ReflectionRecord,
};

use crate::calibration::{
    negation_consistency, sarcasm_consistency, ConfidenceCalibrator, ConfidenceComponents,
    Recalibrator,
};
use crate::config::EngineConfig;
use crate::dynamics::{DynamicsEngine, DynamicsInput};
use crate::error::EngineResult;
use crate::extraction::{
    derive_event_context, derive_expressed, FeatureExtractor, ValenceSplit, ValenceSplitter,
};
use crate::scoring::{rule_only_distribution, PrimaryScorer, WheelSimilarity};
use crate::selection::{neutral_gate, HierarchySelector};
use crate::temporal::{trend_signals, TemporalObservation, TemporalTracker};
use crate::threads::ThreadDetector;

/// The assembled enrichment pipeline.
///
/// # Concurrency
///
/// Classification is stateless and runs unlocked. The dynamics/temporal
/// advance for a user runs under that user's async mutex, so concurrent
/// reflections for the same user serialize while different users proceed in
/// parallel.
pub struct AffectPipeline {
    classifier: Arc<dyn TextClassifier>,
    embedding: Arc<dyn EmbeddingProvider>,
    language_model: Option<Arc<dyn LanguageModelProvider>>,
    store: Arc<dyn PersistenceStore>,
    wheel: EmotionWheel,
    core_config: CoreConfig,
    config: EngineConfig,
    extractor: FeatureExtractor,
    splitter: ValenceSplitter,
    scorer: PrimaryScorer,
    selector: HierarchySelector,
    calibrator: ConfidenceCalibrator,
    dynamics: DynamicsEngine,
    temporal: TemporalTracker,
    threads: ThreadDetector,
    cache: ClassificationCache,
    user_locks: parking_lot::Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl AffectPipeline {
    /// Build a pipeline from providers and validated configuration.
    pub fn new(
        classifier: Arc<dyn TextClassifier>,
        embedding: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn PersistenceStore>,
        core_config: CoreConfig,
        config: EngineConfig,
    ) -> EngineResult<Self> {
        core_config.validate()?;
        config.validate()?;
        let wheel = EmotionWheel::load()?;

        Ok(Self {
            classifier,
            embedding,
            language_model: None,
            store,
            wheel,
            extractor: FeatureExtractor::new(&config.extraction),
            splitter: ValenceSplitter::new(&config.extraction),
            scorer: PrimaryScorer::new(&config.scoring),
            selector: HierarchySelector::new(&config.selection),
            calibrator: ConfidenceCalibrator::new(&config.calibration),
            dynamics: DynamicsEngine::new(&config.dynamics),
            temporal: TemporalTracker::new(&config.temporal),
            threads: ThreadDetector::new(&config.threads),
            cache: ClassificationCache::new(core_config.cache.enabled, core_config.cache.capacity),
            user_locks: parking_lot::Mutex::new(HashMap::new()),
            core_config,
            config,
        })
    }

    /// Attach the optional soft-signal language model.
    pub fn with_language_model(mut self, provider: Arc<dyn LanguageModelProvider>) -> Self {
        self.language_model = Some(provider);
        self
    }

    /// Attach an offline-fitted confidence recalibrator.
    pub fn with_recalibrator(mut self, recalibrator: Recalibrator) -> Self {
        self.calibrator =
            ConfidenceCalibrator::new(&self.config.calibration).with_recalibrator(recalibrator);
        self
    }

    /// Enrich one reflection.
    ///
    /// `prior_state` and `recent_history` may be supplied by the caller;
    /// otherwise they are loaded from the persistence store. History is
    /// most-recent-first and bounded.
    pub async fn enrich(
        &self,
        text: &str,
        user_id: &str,
        timestamp: DateTime<Utc>,
        prior_state: Option<DynamicsState>,
        recent_history: Option<Vec<HistoryEntry>>,
    ) -> EngineResult<EnrichmentRecord> {
        let started = Instant::now();
        let record = ReflectionRecord::new(user_id, text, timestamp, InputMode::Text)?;

        // Per-user single-writer discipline for the state half.
        let lock = self.user_lock(user_id);
        let _guard = lock.lock().await;

        let mut degraded = false;

        let history = match recent_history {
            Some(mut entries) => {
                entries.truncate(self.core_config.history.max_entries);
                entries
            }
            None => match self
                .store
                .recent_history(user_id, self.core_config.history.max_entries)
                .await
            {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(%err, "history read failed, continuing without history");
                    degraded = true;
                    Vec::new()
                }
            },
        };

        // Classification: pure in the text, cacheable per (user, text).
        let classification = match self.cache.get(user_id, &record.normalized_text) {
            Some(hit) => {
                tracing::debug!(user_id, "classification cache hit");
                hit
            }
            None => {
                let fresh = self.classify(&record).await;
                self.cache
                    .put(user_id, &record.normalized_text, fresh.clone());
                fresh
            }
        };
        degraded |= classification.degraded;

        // Dynamics update: always runs, even when classification was
        // withheld.
        let prior = match prior_state {
            Some(state) => Some(state),
            None => match self.store.load_dynamics(user_id).await {
                Ok(state) => state,
                Err(err) => {
                    tracing::warn!(%err, "dynamics read failed, using resting default");
                    degraded = true;
                    None
                }
            },
        };
        let prior = match prior {
            Some(state) if state.is_valid() => state,
            Some(_) => {
                tracing::warn!(user_id, "persisted dynamics state corrupt, reinitializing");
                DynamicsState::default()
            }
            None => DynamicsState::default(),
        };

        let dynamics_input = DynamicsInput::new(
            classification.valence,
            classification.arousal,
            classification.confidence,
            &classification.expressed,
        );
        let dynamics = self.dynamics.update(prior, &history, dynamics_input);
        self.store.store_dynamics(user_id, &dynamics.state).await?;

        // Temporal advance: never skipped for a new timestamp.
        let temporal_prior = match self.store.load_temporal(user_id).await {
            Ok(Some(state)) if state.is_valid() => Some(state),
            Ok(Some(_)) => {
                tracing::warn!(user_id, "persisted temporal state corrupt, reinitializing");
                None
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(%err, "temporal read failed, reinitializing");
                degraded = true;
                None
            }
        };
        let observation = TemporalObservation {
            valence: classification.valence,
            arousal: classification.arousal,
            eri: dynamics.eri,
            confidence: classification.confidence,
            willingness: classification.expressed.willingness_to_express,
            risk_flags: classification.risk_hits.clone(),
            timestamp,
        };
        let temporal = self.temporal.observe(temporal_prior, &observation);
        self.store.store_temporal(user_id, &temporal).await?;

        // Thread detection against the same bounded history.
        let threads = self.threads.detect(
            &classification.tokens,
            &classification.event_labels,
            &history,
            timestamp,
        );

        let mut risk_signals = classification.risk_hits.clone();
        for signal in trend_signals(&self.config.temporal, &temporal) {
            if !risk_signals.contains(&signal) {
                risk_signals.push(signal);
            }
        }

        let record = EnrichmentRecord {
            wheel: classification.wheel,
            valence: classification.valence,
            arousal: classification.arousal,
            confidence: classification.confidence,
            event: classification.event,
            flags: classification.flags,
            dynamics: DynamicsReport {
                baseline: dynamics.baseline,
                shock_valence: dynamics.shock_valence,
                shock_arousal: dynamics.shock_arousal,
                eri: dynamics.eri,
                state: dynamics.state,
            },
            temporal,
            recursion: RecursionReport {
                links: threads.links,
                thread_state: threads.state,
            },
            risk_signals,
            provenance: Provenance {
                degraded,
                latency_ms: started.elapsed().as_millis() as u64,
            },
        };

        debug_assert!(record.ranges_valid(), "enrichment outputs out of range");
        tracing::debug!(
            user_id,
            primary = record.wheel.as_ref().map(|w| w.primary.label()),
            confidence = record.confidence,
            regime = ?record.temporal.regime,
            degraded = record.provenance.degraded,
            latency_ms = record.provenance.latency_ms,
            "reflection enriched"
        );

        Ok(record)
    }

    /// The pure classification half: extraction, valence split, neutral
    /// gate, primary scoring, hierarchy descent, calibration.
    async fn classify(&self, record: &ReflectionRecord) -> CachedClassification {
        let mut degraded = false;
        let features = self
            .extractor
            .extract(&record.normalized_text, &record.raw_text);
        let split = self.splitter.split(&features);

        let mut expressed = derive_expressed(&features);

        // Neutral gate runs before any provider spend: contentless text
        // gets low-confidence defaults instead of a forced label.
        if let Some(gate) = neutral_gate(
            &features,
            &self.config.selection,
            self.config.extraction.repetition_threshold,
        ) {
            let (event, _) = derive_event_context(&features, split.event_valence);
            return CachedClassification {
                wheel: None,
                valence: gate.valence,
                arousal: gate.arousal,
                confidence: gate.confidence,
                event,
                flags: features.linguistic_flags(),
                expressed,
                risk_hits: features.risk_hits.clone(),
                event_labels: features.event_labels.clone(),
                tokens: features.token_strings(),
                degraded,
            };
        }

        if let Some(lm) = &self.language_model {
            match provider_call(
                self.core_config.provider.soft_signal_timeout_ms,
                lm.name(),
                lm.soft_signals(&record.normalized_text),
            )
            .await
            {
                Ok(signals) => {
                    if let Some(tone) = signals.tone_hint {
                        expressed.tone = tone;
                    }
                    if let Some(intensity) = signals.intensity_hint {
                        expressed.intensity =
                            domain::clamp_unit(0.5 * (expressed.intensity + intensity));
                    }
                    if let Some(willingness) = signals.willingness_hint {
                        expressed.willingness_to_express = domain::clamp_unit(
                            0.5 * (expressed.willingness_to_express + willingness),
                        );
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "soft-signal provider failed, using lexicon signal");
                    degraded = true;
                }
            }
        }

        let distribution = match provider_call(
            self.core_config.provider.classifier_timeout_ms,
            self.classifier.name(),
            self.classifier.classify(&record.normalized_text),
        )
        .await
        {
            Ok(dist) => dist,
            Err(err) => {
                tracing::warn!(%err, "classifier unavailable, using rule-only fallback");
                degraded = true;
                rule_only_distribution(&features, split.event_valence)
            }
        };

        let sims = match provider_call(
            self.core_config.provider.embedding_timeout_ms,
            self.embedding.name(),
            self.score_wheel_candidates(&record.normalized_text),
        )
        .await
        {
            Ok(sims) => sims,
            Err(err) => {
                tracing::warn!(%err, "embedding unavailable, using lexical similarity");
                degraded = true;
                WheelSimilarity::lexical(&self.wheel, &record.normalized_text)
            }
        };

        let (event, context_confidence) = derive_event_context(&features, split.event_valence);
        let score = self.scorer.score(&distribution, &sims, &event, &features);
        let primary = score.primary;

        // Event valence may have been discounted by the sarcasm rule.
        let event = affect_graph_core::types::EventContext {
            event_valence: score.event_valence,
            ..event
        }
        .clamped();

        let selection =
            self.selector
                .select(&self.wheel, primary, &sims, &event, features.sarcasm);

        let (valence, arousal) = invoked_affect(primary, &split);

        let components = ConfidenceComponents {
            classifier_entropy: 1.0 - distribution.entropy(),
            rerank_agreement: rerank_agreement(&distribution, primary),
            negation_consistency: negation_consistency(&features, primary),
            sarcasm_consistency: sarcasm_consistency(features.sarcasm, primary),
            control: context_confidence.control,
            polarity: context_confidence.polarity,
            domain: context_confidence.domain,
            secondary_similarity: selection.secondary_score,
        };
        let confidence = self.calibrator.fuse(&components);

        // Below the floor, classification is withheld; the state update
        // still proceeds with the affect estimate.
        let wheel = if confidence < self.core_config.provider.min_confidence_floor {
            tracing::debug!(
                confidence,
                floor = self.core_config.provider.min_confidence_floor,
                "confidence floor failed, withholding classification"
            );
            None
        } else {
            Some(selection.into_path(primary))
        };

        CachedClassification {
            wheel,
            valence,
            arousal,
            confidence,
            event,
            flags: features.linguistic_flags(),
            expressed,
            risk_hits: features.risk_hits.clone(),
            event_labels: features.event_labels.clone(),
            tokens: features.token_strings(),
            degraded,
        }
    }

    /// One batched similarity call over every wheel label.
    async fn score_wheel_candidates(
        &self,
        text: &str,
    ) -> affect_graph_core::error::CoreResult<WheelSimilarity> {
        let candidates = WheelSimilarity::candidates(&self.wheel);
        let scores = self.embedding.score_candidates(text, &candidates).await?;
        WheelSimilarity::from_scores(&self.wheel, &scores).ok_or_else(|| {
            CoreError::ProviderUnavailable {
                provider: self.embedding.name().to_string(),
                message: format!(
                    "expected {} similarity scores, got {}",
                    candidates.len(),
                    scores.len()
                ),
            }
        })
    }

    fn user_lock(&self, user_id: &str) -> Arc<AsyncMutex<()>> {
        let mut locks = self.user_locks.lock();
        locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }
}

/// Invoked affect: the emotion-term evidence blended with the family prior.
fn invoked_affect(primary: Primary, split: &ValenceSplit) -> (f32, f32) {
    let valence = match split.emotion_valence {
        Some(v) => domain::clamp_signed(0.7 * v + 0.3 * primary.valence_prior()),
        None => primary.valence_prior(),
    };
    let arousal = match split.emotion_arousal {
        Some(a) => domain::clamp_unit(0.7 * a + 0.3 * primary.arousal_prior()),
        None => primary.arousal_prior(),
    };
    (valence, arousal)
}

/// Agreement between the pre-rerank distribution and the final winner.
fn rerank_agreement(distribution: &PrimaryDistribution, winner: Primary) -> f32 {
    let base = distribution.argmax();
    if base == winner {
        return 1.0;
    }
    let top = distribution.get(base);
    if top <= f32::EPSILON {
        return 0.5;
    }
    (distribution.get(winner) / top).clamp(0.0, 1.0)
}

/// Invoke a provider future under its timeout budget.
async fn provider_call<T>(
    timeout_ms: u64,
    provider: &str,
    call: impl std::future::Future<Output = affect_graph_core::error::CoreResult<T>>,
) -> affect_graph_core::error::CoreResult<T> {
    match tokio::time::timeout(std::time::Duration::from_millis(timeout_ms), call).await {
        Ok(result) => result,
        Err(_) => Err(CoreError::ProviderUnavailable {
            provider: provider.to_string(),
            message: format!("timed out after {timeout_ms}ms"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use affect_graph_core::stubs::{InMemoryStore, StubClassifier, StubEmbeddingProvider};
    use affect_graph_core::types::Regime;

    fn pipeline_with(classifier: StubClassifier) -> AffectPipeline {
        AffectPipeline::new(
            Arc::new(classifier),
            Arc::new(StubEmbeddingProvider::new()),
            Arc::new(InMemoryStore::new()),
            CoreConfig::default(),
            EngineConfig::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let pipeline = pipeline_with(StubClassifier::new());
        let result = pipeline.enrich("   ", "u1", Utc::now(), None, None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_enrich_produces_valid_ranges() {
        let pipeline = pipeline_with(StubClassifier::new());
        let record = pipeline
            .enrich(
                "I got promoted today but I feel terrified about the new role",
                "u1",
                Utc::now(),
                None,
                None,
            )
            .await
            .unwrap();
        assert!(record.ranges_valid());
        assert!(!record.provenance.degraded);
        assert_eq!(record.temporal.n, 1);
        assert_eq!(record.temporal.regime, Regime::Normal);
    }

    #[tokio::test]
    async fn test_failed_classifier_degrades_not_fatal() {
        let pipeline = pipeline_with(StubClassifier::failing());
        let record = pipeline
            .enrich("i feel terrified and anxious", "u1", Utc::now(), None, None)
            .await
            .unwrap();
        assert!(record.provenance.degraded);
        // Rule-only fallback still classifies the fear family.
        assert_eq!(record.wheel.as_ref().unwrap().primary, Primary::Scared);
    }

    #[tokio::test]
    async fn test_neutral_gate_returns_defaults() {
        let pipeline = pipeline_with(StubClassifier::new());
        let record = pipeline
            .enrich("went outside", "u1", Utc::now(), None, None)
            .await
            .unwrap();
        assert!(record.wheel.is_none());
        assert_eq!(record.valence, 0.0);
        assert_eq!(record.arousal, 0.35);
        assert_eq!(record.confidence, 0.40);
    }

    #[tokio::test]
    async fn test_duplicate_text_advances_temporal_state() {
        let pipeline = pipeline_with(StubClassifier::new());
        let first = pipeline
            .enrich("i feel sad about work", "u1", Utc::now(), None, None)
            .await
            .unwrap();
        let second = pipeline
            .enrich(
                "i feel sad about work",
                "u1",
                Utc::now() + chrono::Duration::hours(1),
                None,
                None,
            )
            .await
            .unwrap();
        // Classification is idempotent; the temporal state is not.
        assert_eq!(first.wheel, second.wheel);
        assert_eq!(first.confidence, second.confidence);
        assert_eq!(second.temporal.n, first.temporal.n + 1);
    }
}
