//! End-to-end pipeline tests over the stub providers.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use affect_graph_core::config::CoreConfig;
use affect_graph_core::stubs::{InMemoryStore, StubClassifier, StubEmbeddingProvider};
use affect_graph_core::taxonomy::{EmotionWheel, Primary};
use affect_graph_core::traits::PersistenceStore;
use affect_graph_core::types::{HistoryEntry, Regime, ThreadRelation};
use affect_graph_engine::config::EngineConfig;
use affect_graph_engine::pipeline::AffectPipeline;

fn pipeline() -> (AffectPipeline, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let pipeline = AffectPipeline::new(
        Arc::new(StubClassifier::failing()),
        Arc::new(StubEmbeddingProvider::new()),
        store.clone(),
        CoreConfig::default(),
        EngineConfig::default(),
    )
    .unwrap();
    (pipeline, store)
}

#[tokio::test]
async fn wheel_paths_stay_inside_the_taxonomy() {
    let (pipeline, _) = pipeline();
    let wheel = EmotionWheel::load().unwrap();
    let texts = [
        "i feel terrified and anxious about the deadline",
        "i am so proud and confident after the win",
        "i feel sad and lonely tonight",
        "i am furious about the argument with my boss",
        "feeling calm and relaxed after the trip",
        "i feel happy and grateful today",
    ];
    for (i, text) in texts.iter().enumerate() {
        let record = pipeline
            .enrich(text, &format!("user{i}"), Utc::now(), None, None)
            .await
            .unwrap();
        assert!(record.ranges_valid(), "ranges invalid for '{text}'");
        if let Some(path) = &record.wheel {
            assert!(
                wheel.contains_path(path),
                "path escaped the wheel for '{text}': {path:?}"
            );
        }
    }
}

#[tokio::test]
async fn negated_joy_never_classifies_joyful() {
    let (pipeline, _) = pipeline();
    let record = pipeline
        .enrich("i'm not happy about any of this", "u1", Utc::now(), None, None)
        .await
        .unwrap();
    if let Some(path) = &record.wheel {
        assert_ne!(path.primary, Primary::Joyful);
    }
    assert!(record.valence < 0.0);
}

#[tokio::test]
async fn litotes_yields_attenuated_positive_valence() {
    let (pipeline, _) = pipeline();
    let plain_negation = pipeline
        .enrich("i'm not happy about this", "u1", Utc::now(), None, None)
        .await
        .unwrap();
    let litotes = pipeline
        .enrich("i'm not unhappy about this", "u2", Utc::now(), None, None)
        .await
        .unwrap();
    let plain_positive = pipeline
        .enrich("i'm happy about this", "u3", Utc::now(), None, None)
        .await
        .unwrap();

    assert!(litotes.valence > 0.0, "litotes should read positive");
    assert!(plain_negation.valence < 0.0, "plain negation should flip");
    assert!(
        litotes.valence < plain_positive.valence,
        "litotes should be attenuated relative to plain praise"
    );
    assert!(litotes.flags.negation.present);
}

#[tokio::test]
async fn sustained_distress_escalates_the_regime() {
    let (pipeline, _) = pipeline();
    let t0 = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();

    let entries = [
        (0i64, "the week started fine and i finished the project"),
        (6, "i feel anxious and overwhelmed, everything feels unbearable"),
        (18, "slept a little better, things felt okay today"),
        (
            36,
            "i feel hopeless and worthless and completely overwhelmed again",
        ),
    ];

    let mut first_risk = None;
    let mut last = None;
    for (hours, text) in entries {
        let record = pipeline
            .enrich(text, "u1", t0 + Duration::hours(hours), None, None)
            .await
            .unwrap();
        if first_risk.is_none() {
            first_risk = Some(record.temporal.risk_momentum);
        }
        last = Some(record);
    }

    let last = last.unwrap();
    assert!(
        matches!(last.temporal.regime, Regime::Elevated | Regime::Alert),
        "expected escalation, got {:?}",
        last.temporal.regime
    );
    assert!(last.temporal.risk_momentum > first_risk.unwrap());
    assert!(!last.risk_signals.is_empty());
    assert_eq!(last.temporal.n, 4);
}

#[tokio::test]
async fn recurring_events_link_within_the_window() {
    let (pipeline, store) = pipeline();
    let t0 = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();

    let first = pipeline
        .enrich(
            "my boss moved the project deadline again and i am furious",
            "u1",
            t0,
            None,
            None,
        )
        .await
        .unwrap();

    // The ingestion collaborator records history after each enrichment.
    store.push_history(
        "u1",
        HistoryEntry::new(
            uuid::Uuid::new_v4(),
            first.valence,
            first.arousal,
            vec!["work".to_string()],
            t0,
        )
        .with_tokens(
            "my boss moved the project deadline again and i am furious"
                .split(' ')
                .map(str::to_string)
                .collect(),
        ),
    );

    let second = pipeline
        .enrich(
            "my boss moved the project deadline again and i am angry",
            "u1",
            t0 + Duration::days(5),
            None,
            None,
        )
        .await
        .unwrap();

    assert!(
        !second.recursion.links.is_empty(),
        "expected a link to the earlier reflection"
    );
    assert!(matches!(
        second.recursion.links[0].relation,
        ThreadRelation::Recurring | ThreadRelation::Related | ThreadRelation::Identical
    ));
}

#[tokio::test]
async fn classification_is_deterministic_state_is_not() {
    let store = Arc::new(InMemoryStore::new());
    let mut core_config = CoreConfig::default();
    core_config.cache.enabled = false;
    let pipeline = AffectPipeline::new(
        Arc::new(StubClassifier::failing()),
        Arc::new(StubEmbeddingProvider::new()),
        store,
        core_config,
        EngineConfig::default(),
    )
    .unwrap();

    let t0 = Utc.with_ymd_and_hms(2026, 4, 1, 9, 0, 0).unwrap();
    let first = pipeline
        .enrich("i feel anxious about the interview", "u1", t0, None, None)
        .await
        .unwrap();
    let second = pipeline
        .enrich(
            "i feel anxious about the interview",
            "u1",
            t0 + Duration::hours(2),
            None,
            None,
        )
        .await
        .unwrap();

    // Same text, no cache: identical classification.
    assert_eq!(first.wheel, second.wheel);
    assert_eq!(first.valence, second.valence);
    assert_eq!(first.confidence, second.confidence);
    // State strictly advances.
    assert_eq!(second.temporal.n, first.temporal.n + 1);
    assert_ne!(first.dynamics.state, second.dynamics.state);
}

#[tokio::test]
async fn degraded_path_still_updates_state() {
    let (pipeline, store) = pipeline();
    let record = pipeline
        .enrich("i feel sad about the breakup", "u1", Utc::now(), None, None)
        .await
        .unwrap();

    assert!(record.provenance.degraded);
    let stored = store.load_temporal("u1").await.unwrap();
    assert!(stored.is_some(), "temporal state must persist on degraded path");
    let dynamics = store.load_dynamics("u1").await.unwrap();
    assert!(dynamics.is_some(), "dynamics state must persist on degraded path");
}
