//! The full enrichment output record.

use serde::{Deserialize, Serialize};

use crate::taxonomy::WheelPath;
use crate::types::{
    DynamicsState, EventContext, InvokedEmotion, LinguisticFlags, RiskSignal, TemporalState,
    ThreadLink, ThreadState,
};

/// Baseline/shock/incongruence report from the dynamics engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicsReport {
    /// Rolling baseline over recent history (resting default when empty).
    pub baseline: DynamicsState,
    /// Deviation of the invoked emotion from the baseline.
    pub shock_valence: f32,
    pub shock_arousal: f32,
    /// Expressed/felt incongruence magnitude (ERI), ≥ 0.
    pub eri: f32,
    /// Smoothed state after this reflection.
    pub state: DynamicsState,
}

/// Thread detection report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecursionReport {
    pub links: Vec<ThreadLink>,
    pub thread_state: ThreadState,
}

/// Execution provenance for one enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Provenance {
    /// True when any provider call failed or timed out and a deterministic
    /// fallback was used instead.
    pub degraded: bool,
    /// Wall-clock cost of the enrichment in milliseconds.
    pub latency_ms: u64,
}

/// Everything the system derived from one reflection.
///
/// `wheel` is `None` only on the confidence-floor skip path, where
/// classification is withheld but dynamics/temporal state still advanced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentRecord {
    pub wheel: Option<WheelPath>,

    /// Signed emotion valence in `[-1, 1]`.
    pub valence: f32,

    /// Arousal in `[0, 1]`.
    pub arousal: f32,

    /// Calibrated confidence in `[0, 1]`.
    pub confidence: f32,

    pub event: EventContext,
    pub flags: LinguisticFlags,
    pub dynamics: DynamicsReport,
    pub temporal: TemporalState,
    pub recursion: RecursionReport,
    pub risk_signals: Vec<RiskSignal>,
    pub provenance: Provenance,
}

impl EnrichmentRecord {
    /// The invoked emotion as one record, when classification ran.
    ///
    /// `None` on the neutral-gate and confidence-floor paths, where no
    /// wheel label was assigned.
    pub fn invoked(&self) -> Option<InvokedEmotion> {
        self.wheel.clone().map(|path| {
            InvokedEmotion {
                path,
                valence: self.valence,
                arousal: self.arousal,
                confidence: self.confidence,
            }
            .clamped()
        })
    }

    /// Whether every numeric output is inside its documented domain.
    ///
    /// An out-of-range value here is a defect in the pipeline, not a
    /// user-facing error; the pipeline debug-asserts this before returning.
    pub fn ranges_valid(&self) -> bool {
        (-1.0..=1.0).contains(&self.valence)
            && (0.0..=1.0).contains(&self.arousal)
            && (0.0..=1.0).contains(&self.confidence)
            && (0.0..=1.0).contains(&self.event.event_valence)
            && self.dynamics.eri >= 0.0
            && self.dynamics.state.is_valid()
            && self.temporal.is_valid()
            && self
                .recursion
                .links
                .iter()
                .all(|l| (0.0..=1.0).contains(&l.score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Primary;
    use chrono::Utc;

    fn minimal_record() -> EnrichmentRecord {
        EnrichmentRecord {
            wheel: Some(WheelPath::primary_only(Primary::Peaceful)),
            valence: 0.2,
            arousal: 0.3,
            confidence: 0.7,
            event: EventContext::default(),
            flags: LinguisticFlags::default(),
            dynamics: DynamicsReport {
                baseline: DynamicsState::default(),
                shock_valence: 0.2,
                shock_arousal: 0.0,
                eri: 0.1,
                state: DynamicsState::new(0.1, 0.3),
            },
            temporal: TemporalState::initial(0.2, Utc::now()),
            recursion: RecursionReport::default(),
            risk_signals: Vec::new(),
            provenance: Provenance::default(),
        }
    }

    #[test]
    fn test_ranges_valid() {
        assert!(minimal_record().ranges_valid());
    }

    #[test]
    fn test_out_of_range_confidence_detected() {
        let mut record = minimal_record();
        record.confidence = 1.2;
        assert!(!record.ranges_valid());
    }

    #[test]
    fn test_invoked_view() {
        let record = minimal_record();
        let invoked = record.invoked().unwrap();
        assert_eq!(invoked.path.primary, Primary::Peaceful);
        assert_eq!(invoked.valence, record.valence);

        let mut withheld = minimal_record();
        withheld.wheel = None;
        assert!(withheld.invoked().is_none());
    }

    #[test]
    fn test_serde_roundtrip() {
        let record = minimal_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: EnrichmentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
