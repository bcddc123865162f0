//! Secondary/tertiary selection.
//!
//! Candidates come exclusively from the wheel's child lookups, so a
//! selected label is a valid child of its parent by construction. A neutral
//! gate runs before any scoring: contentless text gets low-confidence
//! neutral defaults instead of a forced label.

use affect_graph_core::taxonomy::{EmotionWheel, Primary, WheelPath};
use affect_graph_core::types::{domain, ControlLevel, EventContext};

use crate::config::SelectionConfig;
use crate::extraction::LinguisticFeatures;
use crate::scoring::WheelSimilarity;

/// Low-confidence defaults returned for contentless text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeutralOutcome {
    /// Signed valence (converted from the configured unit default).
    pub valence: f32,
    pub arousal: f32,
    pub confidence: f32,
}

/// Check the neutral gate: no event anchors, no emotion terms, and the text
/// is short, heavily hedged, or repetitive.
pub fn neutral_gate(
    features: &LinguisticFeatures,
    config: &SelectionConfig,
    repetition_threshold: f32,
) -> Option<NeutralOutcome> {
    let flags = features.neutral_flags();
    if flags.emotion_presence || flags.event_presence {
        return None;
    }
    let contentless = features.tokens.len() <= config.neutral.max_tokens
        || features.hedge_count >= config.neutral.min_hedges
        || features.repetition_ratio >= repetition_threshold;
    if !contentless {
        return None;
    }
    tracing::debug!(
        tokens = features.tokens.len(),
        hedges = features.hedge_count,
        repetition = features.repetition_ratio,
        "neutral gate fired"
    );
    Some(NeutralOutcome {
        valence: domain::unit_to_signed(config.neutral.valence_unit),
        arousal: config.neutral.arousal,
        confidence: config.neutral.confidence,
    })
}

/// Result of descending the hierarchy under a chosen primary.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome {
    pub secondary: String,
    /// Boosted score of the chosen secondary, for calibration.
    pub secondary_score: f32,
    /// `None` when tertiary selection was suppressed as ambiguous.
    pub tertiary: Option<String>,
    pub tertiary_score: Option<f32>,
}

impl SelectionOutcome {
    /// Assemble the full wheel path for a primary.
    pub fn into_path(self, primary: Primary) -> WheelPath {
        WheelPath {
            primary,
            secondary: Some(self.secondary),
            tertiary: self.tertiary,
        }
    }
}

/// Descends the wheel under a chosen primary.
#[derive(Debug, Clone)]
pub struct HierarchySelector {
    config: SelectionConfig,
}

/// Resilience-branch secondaries favored when a bad event met high control.
const RESILIENCE_SECONDARIES: &[&str] = &["determined", "courageous", "capable"];

impl HierarchySelector {
    pub fn new(config: &SelectionConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Pick one of the primary's 6 secondaries, then one of its 6
    /// tertiaries, from similarity plus context boosts.
    pub fn select(
        &self,
        wheel: &EmotionWheel,
        primary: Primary,
        sims: &WheelSimilarity,
        event: &EventContext,
        sarcasm: bool,
    ) -> SelectionOutcome {
        let (secondary, secondary_score) = self.select_secondary(primary, sims, event);
        let (tertiary, tertiary_score) =
            self.select_tertiary(wheel, primary, &secondary, sims, sarcasm);

        debug_assert!(wheel.contains_path(&WheelPath {
            primary,
            secondary: Some(secondary.clone()),
            tertiary: tertiary.clone(),
        }));

        SelectionOutcome {
            secondary,
            secondary_score,
            tertiary,
            tertiary_score,
        }
    }

    fn select_secondary(
        &self,
        primary: Primary,
        sims: &WheelSimilarity,
        event: &EventContext,
    ) -> (String, f32) {
        let boost_resilience = primary == Primary::Powerful
            && event.event_valence < self.config.low_event_valence_max
            && event.control == ControlLevel::High;

        let mut best: Option<(&str, f32)> = None;
        for (label, sim) in sims.secondary_scores(primary) {
            let mut score = *sim;
            if boost_resilience && RESILIENCE_SECONDARIES.contains(label) {
                score += self.config.context_boost;
            }
            if best.map(|(_, b)| score > b).unwrap_or(true) {
                best = Some((label, score));
            }
        }
        let (label, score) = best.unwrap_or((Primary::ALL[0].label(), 0.0));
        (label.to_string(), score.clamp(0.0, 1.0))
    }

    /// Tertiary descent. Suppressed (ambiguous) when the best raw score
    /// falls below the threshold; sarcasm suppresses positive-valence
    /// candidates entirely.
    fn select_tertiary(
        &self,
        wheel: &EmotionWheel,
        primary: Primary,
        secondary: &str,
        sims: &WheelSimilarity,
        sarcasm: bool,
    ) -> (Option<String>, Option<f32>) {
        if sarcasm && primary.is_positive() {
            tracing::debug!(%primary, "tertiary suppressed: sarcasm over positive family");
            return (None, None);
        }
        debug_assert!(wheel.tertiaries(primary, secondary).is_some());

        let mut best: Option<(&str, f32)> = None;
        for (label, sim) in sims.tertiary_scores(primary, secondary) {
            if best.map(|(_, b)| *sim > b).unwrap_or(true) {
                best = Some((label, *sim));
            }
        }
        match best {
            Some((label, score)) if score >= self.config.ambiguity_threshold => {
                (Some(label.to_string()), Some(score))
            }
            _ => (None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use crate::extraction::FeatureExtractor;
    use affect_graph_core::types::{DomainMix, EventPolarity};

    fn event(event_valence: f32, control: ControlLevel) -> EventContext {
        EventContext {
            domain: DomainMix::default(),
            control,
            polarity: EventPolarity::Happened,
            event_valence,
        }
    }

    fn selector() -> HierarchySelector {
        HierarchySelector::new(&SelectionConfig::default())
    }

    #[test]
    fn test_secondary_is_always_a_wheel_child() {
        let wheel = EmotionWheel::load().unwrap();
        let sims = WheelSimilarity::lexical(&wheel, "i feel worried and tense");
        let outcome = selector().select(
            &wheel,
            Primary::Scared,
            &sims,
            &event(0.5, ControlLevel::Medium),
            false,
        );
        assert!(wheel
            .secondaries(Primary::Scared)
            .contains(&outcome.secondary.as_str()));
    }

    #[test]
    fn test_verbatim_tertiary_selected() {
        let wheel = EmotionWheel::load().unwrap();
        let sims = WheelSimilarity::lexical(&wheel, "i feel so worried about everything");
        let outcome = selector().select(
            &wheel,
            Primary::Scared,
            &sims,
            &event(0.5, ControlLevel::Medium),
            false,
        );
        assert_eq!(outcome.secondary, "anxious");
        assert_eq!(outcome.tertiary.as_deref(), Some("worried"));
    }

    #[test]
    fn test_ambiguous_tertiary_suppressed() {
        let wheel = EmotionWheel::load().unwrap();
        // Text matches a secondary but no tertiary leaf well.
        let sims = WheelSimilarity::lexical(&wheel, "feeling generally anxious");
        let outcome = selector().select(
            &wheel,
            Primary::Scared,
            &sims,
            &event(0.5, ControlLevel::Medium),
            false,
        );
        assert_eq!(outcome.secondary, "anxious");
        assert!(outcome.tertiary.is_none());
    }

    #[test]
    fn test_resilience_boost_under_bad_controlled_event() {
        let wheel = EmotionWheel::load().unwrap();
        // "proud" matches the achievement branch verbatim; the boost must
        // not be needed for good events.
        let sims = WheelSimilarity::lexical(&wheel, "i stayed determined and proud of the effort");
        let plain = selector().select(
            &wheel,
            Primary::Powerful,
            &sims,
            &event(0.8, ControlLevel::High),
            false,
        );
        let boosted = selector().select(
            &wheel,
            Primary::Powerful,
            &sims,
            &event(0.2, ControlLevel::High),
            false,
        );
        // Under a bad, controlled event the resilience branch wins even
        // when raw similarity ties with the achievement branch.
        assert_eq!(boosted.secondary, "determined");
        let _ = plain;
    }

    #[test]
    fn test_sarcasm_suppresses_positive_tertiary() {
        let wheel = EmotionWheel::load().unwrap();
        let sims = WheelSimilarity::lexical(&wheel, "oh i am just thrilled and delighted");
        let outcome = selector().select(
            &wheel,
            Primary::Joyful,
            &sims,
            &event(0.5, ControlLevel::Medium),
            true,
        );
        assert!(outcome.tertiary.is_none());
    }

    #[test]
    fn test_neutral_gate_short_contentless() {
        let features =
            FeatureExtractor::new(&ExtractionConfig::default()).extract("went outside", "went outside");
        let outcome = neutral_gate(&features, &SelectionConfig::default(), 0.5).unwrap();
        assert_eq!(outcome.valence, 0.0);
        assert_eq!(outcome.arousal, 0.35);
        assert_eq!(outcome.confidence, 0.40);
    }

    #[test]
    fn test_neutral_gate_skipped_with_emotion() {
        let features =
            FeatureExtractor::new(&ExtractionConfig::default()).extract("feel sad", "feel sad");
        assert!(neutral_gate(&features, &SelectionConfig::default(), 0.5).is_none());
    }

    #[test]
    fn test_neutral_gate_hedged_text() {
        let features = FeatureExtractor::new(&ExtractionConfig::default()).extract(
            "i guess things are sort of the same as always lately",
            "i guess things are sort of the same as always lately",
        );
        assert!(neutral_gate(&features, &SelectionConfig::default(), 0.5).is_some());
    }
}
