//! Event/emotion valence split and context derivation.
//!
//! Event valence measures how good or bad the described event is; emotion
//! valence measures how the writer feels. The two are computed from
//! disjoint evidence (event anchors vs. emotion terms), so "promoted but
//! terrified" carries high event valence and low emotion valence at once.

use affect_graph_core::types::{
    domain, ControlLevel, DomainMix, EventContext, EventPolarity, ExpressedSignal, ExpressedTone,
    NegationStrength, ProfanityCategory,
};

use crate::config::ExtractionConfig;

use super::{AnchorCategory, LinguisticFeatures};

/// Result of the valence split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValenceSplit {
    /// Unit event valence; 0.5 when no anchor evidence exists.
    pub event_valence: f32,
    /// Signed emotion valence; `None` when no emotion terms hit.
    pub emotion_valence: Option<f32>,
    /// Emotion arousal estimate; `None` when no emotion terms hit.
    pub emotion_arousal: Option<f32>,
}

/// Computes event and emotion valence from extracted features.
#[derive(Debug, Clone)]
pub struct ValenceSplitter {
    config: ExtractionConfig,
}

impl ValenceSplitter {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Split features into event and emotion valence.
    pub fn split(&self, features: &LinguisticFeatures) -> ValenceSplit {
        ValenceSplit {
            event_valence: self.event_valence(features),
            emotion_valence: self.emotion_valence(features),
            emotion_arousal: self.emotion_arousal(features),
        }
    }

    /// Weighted sum of anchor hits, normalized to `[0, 1]`.
    ///
    /// Negation can null (weak) or flip (moderate/strong) an anchor's
    /// contribution; a negated negative anchor reads as attenuated positive.
    /// Effort words never contribute.
    fn event_valence(&self, features: &LinguisticFeatures) -> f32 {
        let mut signed_sum = 0.0f32;
        let mut weight_sum = 0.0f32;

        for hit in &features.event_hits {
            let direction = match hit.entry.category {
                AnchorCategory::PositiveEvent => 1.0f32,
                AnchorCategory::NegativeEvent => -1.0f32,
                AnchorCategory::Effort => continue,
            };
            let weight = hit.entry.weight;
            let contribution = match hit.negation {
                None => direction * weight,
                Some(NegationStrength::Weak) => 0.0,
                Some(_) if direction < 0.0 => {
                    // "didn't fail" reads as attenuated good news.
                    weight * self.config.litotes_attenuation
                }
                Some(NegationStrength::Strong) => {
                    -direction * weight * (self.config.negation_flip_factor * 1.25).min(1.0)
                }
                Some(_) => -direction * weight * self.config.negation_flip_factor,
            };
            signed_sum += contribution;
            weight_sum += weight;
        }

        if weight_sum <= f32::EPSILON {
            return 0.5;
        }
        domain::clamp_unit(0.5 + 0.5 * (signed_sum / weight_sum))
    }

    /// Weighted mean of effective emotion-term valences, independent of
    /// event anchors.
    fn emotion_valence(&self, features: &LinguisticFeatures) -> Option<f32> {
        if features.emotion_hits.is_empty() {
            return None;
        }
        let weight_sum: f32 = features
            .emotion_hits
            .iter()
            .map(|h| h.effective_weight)
            .sum();
        if weight_sum <= f32::EPSILON {
            // Every hit was nulled by weak negation; feeling is present but
            // unreadable.
            return Some(0.0);
        }
        let value = features
            .emotion_hits
            .iter()
            .map(|h| h.effective_valence * h.effective_weight)
            .sum::<f32>()
            / weight_sum;
        Some(domain::clamp_signed(value))
    }

    fn emotion_arousal(&self, features: &LinguisticFeatures) -> Option<f32> {
        if features.emotion_hits.is_empty() {
            return None;
        }
        let value = features
            .emotion_hits
            .iter()
            .map(|h| h.effective_arousal)
            .sum::<f32>()
            / features.emotion_hits.len() as f32;
        Some(domain::clamp_unit(value))
    }
}

/// Confidence of each context estimate, consumed by calibration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextConfidence {
    pub control: f32,
    pub polarity: f32,
    pub domain: f32,
}

/// Derive the event context (domain mix, control, polarity) from features.
pub fn derive_event_context(
    features: &LinguisticFeatures,
    event_valence: f32,
) -> (EventContext, ContextConfidence) {
    let mut counts: Vec<(affect_graph_core::types::EventDomain, usize)> = features
        .domain_counts
        .iter()
        .map(|(d, c)| (*d, *c))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| format!("{:?}", a.0).cmp(&format!("{:?}", b.0))));

    let domain_mix = match counts.as_slice() {
        [] => DomainMix::default(),
        [(primary, _)] => DomainMix {
            primary: *primary,
            secondary: None,
            mixture_ratio: 1.0,
        },
        [(primary, p_count), (secondary, s_count), ..] => DomainMix {
            primary: *primary,
            secondary: Some(*secondary),
            mixture_ratio: *p_count as f32 / (*p_count + *s_count) as f32,
        },
    };

    let control = if features.agency_count >= 2 {
        ControlLevel::High
    } else if features.low_control_count > 0 && features.agency_count == 0 {
        ControlLevel::Low
    } else {
        ControlLevel::Medium
    };

    let polarity = if features.averted_marker_count > 0 {
        EventPolarity::DidNotHappen
    } else if features.future_marker_count > 0 {
        EventPolarity::Planned
    } else {
        EventPolarity::Happened
    };

    let confidence = ContextConfidence {
        control: domain::clamp_unit(
            0.5 + 0.15 * (features.agency_count + features.low_control_count) as f32,
        ),
        polarity: domain::clamp_unit(
            0.5 + 0.2 * (features.averted_marker_count + features.future_marker_count) as f32,
        ),
        domain: if counts.is_empty() {
            0.3
        } else {
            domain::clamp_unit(0.5 + 0.1 * counts[0].1 as f32)
        },
    };

    (
        EventContext {
            domain: domain_mix,
            control,
            polarity,
            event_valence,
        }
        .clamped(),
        confidence,
    )
}

/// Derive the outward expression signal from surface features.
pub fn derive_expressed(features: &LinguisticFeatures) -> ExpressedSignal {
    let profanity_bonus = match features.profanity {
        ProfanityCategory::None => 0.0,
        ProfanityCategory::Mild => 0.1,
        ProfanityCategory::Strong => 0.25,
    };
    let intensity = 0.2
        + 0.15 * features.intensifier_count.min(3) as f32
        + 0.1 * features.exclamation_count.min(3) as f32
        + 0.1 * features.emotion_hits.len().min(3) as f32
        + profanity_bonus;

    let willingness = 0.5 + if features.first_person_feeling { 0.25 } else { 0.0 }
        - 0.1 * features.hedge_count.min(4) as f32
        + 0.05 * features.emotion_hits.len().min(2) as f32;

    let mean_valence = if features.emotion_hits.is_empty() {
        0.0
    } else {
        features
            .emotion_hits
            .iter()
            .map(|h| h.effective_valence)
            .sum::<f32>()
            / features.emotion_hits.len() as f32
    };

    let tone = if features.profanity == ProfanityCategory::Strong
        || (features.intensifier_count >= 2 && mean_valence < -0.2)
    {
        ExpressedTone::Heated
    } else if mean_valence < -0.1
        && (features.intensifier_count >= 1 || features.exclamation_count >= 1)
    {
        ExpressedTone::Tense
    } else if mean_valence > 0.3 && !features.sarcasm {
        ExpressedTone::Warm
    } else if features.emotion_hits.is_empty() && features.tokens.len() <= 8 {
        ExpressedTone::Flat
    } else {
        ExpressedTone::Neutral
    };

    ExpressedSignal::new(tone, intensity, willingness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::FeatureExtractor;

    fn split(text: &str) -> (ValenceSplit, LinguisticFeatures) {
        let extractor = FeatureExtractor::new(&ExtractionConfig::default());
        let features = extractor.extract(text, text);
        let splitter = ValenceSplitter::new(&ExtractionConfig::default());
        (splitter.split(&features), features)
    }

    #[test]
    fn test_no_anchors_defaults_to_midpoint() {
        let (result, _) = split("went outside today");
        assert_eq!(result.event_valence, 0.5);
        assert!(result.emotion_valence.is_none());
    }

    #[test]
    fn test_promoted_but_terrified_splits() {
        let (result, _) = split("i got promoted today but i feel terrified");
        assert!(result.event_valence > 0.7, "event should read as good");
        assert!(
            result.emotion_valence.unwrap() < -0.5,
            "feeling should read as bad"
        );
    }

    #[test]
    fn test_negated_negative_anchor_attenuated_positive() {
        let (plain, _) = split("i failed the exam");
        let (negated, _) = split("i didn't failed the exam");
        assert!(plain.event_valence < 0.2);
        assert!(negated.event_valence > 0.5);
        // Attenuated: weaker than a genuinely positive anchor.
        assert!(negated.event_valence < 0.8);
    }

    #[test]
    fn test_effort_words_excluded() {
        let (result, _) = split("i tried and worked and practiced");
        assert_eq!(result.event_valence, 0.5);
    }

    #[test]
    fn test_emotion_valence_independent_of_anchors() {
        let (result, _) = split("i feel happy");
        assert_eq!(result.event_valence, 0.5);
        assert!(result.emotion_valence.unwrap() > 0.5);
    }

    #[test]
    fn test_context_control_high_with_agency() {
        let extractor = FeatureExtractor::new(&ExtractionConfig::default());
        let features = extractor.extract(
            "i decided to fix it and organized the plan",
            "i decided to fix it and organized the plan",
        );
        let (ctx, conf) = derive_event_context(&features, 0.5);
        assert_eq!(ctx.control, ControlLevel::High);
        assert!(conf.control > 0.5);
    }

    #[test]
    fn test_context_polarity_planned() {
        let extractor = FeatureExtractor::new(&ExtractionConfig::default());
        let features = extractor.extract(
            "the interview will happen tomorrow",
            "the interview will happen tomorrow",
        );
        let (ctx, _) = derive_event_context(&features, 0.5);
        assert_eq!(ctx.polarity, EventPolarity::Planned);
    }

    #[test]
    fn test_expressed_hedges_lower_willingness() {
        let extractor = FeatureExtractor::new(&ExtractionConfig::default());
        let direct = extractor.extract("i feel sad", "i feel sad");
        let hedged = extractor.extract(
            "i guess i feel sort of sad maybe",
            "i guess i feel sort of sad maybe",
        );
        let direct_signal = derive_expressed(&direct);
        let hedged_signal = derive_expressed(&hedged);
        assert!(hedged_signal.willingness_to_express < direct_signal.willingness_to_express);
    }

    #[test]
    fn test_expressed_heated_tone_on_strong_profanity() {
        let extractor = FeatureExtractor::new(&ExtractionConfig::default());
        let features = extractor.extract(
            "this is fucking awful i am furious",
            "this is fucking awful I am FURIOUS",
        );
        let signal = derive_expressed(&features);
        assert_eq!(signal.tone, ExpressedTone::Heated);
        assert!(signal.intensity > 0.5);
    }
}
