//! Primary scoring and rerank settings.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::require_unit;

/// Fusion weights for the base primary score.
///
/// score(p) = classifier·P(p) + tertiary_similarity·T(p) + domain·D(p)
///          + control·C(p) + polarity·O(p) + core_similarity·S(p)
///
/// Weights must sum to 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FusionWeights {
    pub classifier: f32,
    pub tertiary_similarity: f32,
    pub domain: f32,
    pub control: f32,
    pub polarity: f32,
    pub core_similarity: f32,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            classifier: 0.35,
            tertiary_similarity: 0.15,
            domain: 0.10,
            control: 0.10,
            polarity: 0.10,
            core_similarity: 0.20,
        }
    }
}

impl FusionWeights {
    pub fn sum(&self) -> f32 {
        self.classifier
            + self.tertiary_similarity
            + self.domain
            + self.control
            + self.polarity
            + self.core_similarity
    }
}

/// Conditional rerank multipliers.
///
/// These are empirical constants; treat them as tuning knobs, not truths.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RerankConfig {
    /// Mad boost when the event is bad and the writer had agency.
    pub mad_boost: f32,
    /// Event valence below this counts as a bad event for the Mad rule.
    pub mad_event_valence_max: f32,

    /// Powerful boost on the "fear…but…agency" concession pattern.
    pub concession_powerful_boost: f32,
    /// Scared attenuation on the same pattern.
    pub concession_scared_attenuation: f32,

    /// Joyful attenuation when joy terms are negated but the event is good.
    pub negated_joy_attenuation: f32,
    /// Powerful boost in the same situation.
    pub negated_joy_powerful_boost: f32,
    /// Event valence above this counts as a good event for that rule.
    pub negated_joy_event_valence_min: f32,

    /// Multiplier applied to positive-shell candidates under sarcasm.
    pub sarcasm_inversion_factor: f32,
    /// Multiplier applied to event valence under sarcasm.
    pub sarcasm_event_valence_factor: f32,

    /// A rule-boosted candidate wins ties when its raw fused score is at
    /// least this fraction of the raw top score.
    pub tie_break_ratio: f32,
}

impl Default for RerankConfig {
    fn default() -> Self {
        Self {
            mad_boost: 1.20,
            mad_event_valence_max: 0.4,
            concession_powerful_boost: 1.15,
            concession_scared_attenuation: 0.85,
            negated_joy_attenuation: 0.65,
            negated_joy_powerful_boost: 1.15,
            negated_joy_event_valence_min: 0.6,
            sarcasm_inversion_factor: 0.45,
            sarcasm_event_valence_factor: 0.7,
            tie_break_ratio: 0.8,
        }
    }
}

/// Primary scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoringConfig {
    pub fusion: FusionWeights,
    pub rerank: RerankConfig,
}

impl ScoringConfig {
    pub fn validate(&self) -> EngineResult<()> {
        let sum = self.fusion.sum();
        if (sum - 1.0).abs() > 1e-3 {
            return Err(EngineError::InvalidParameter {
                name: "fusion_weights".to_string(),
                value: sum.to_string(),
                reason: "fusion weights must sum to 1.0".to_string(),
            });
        }
        for (name, v) in [
            ("mad_event_valence_max", self.rerank.mad_event_valence_max),
            (
                "negated_joy_event_valence_min",
                self.rerank.negated_joy_event_valence_min,
            ),
            ("tie_break_ratio", self.rerank.tie_break_ratio),
            (
                "sarcasm_event_valence_factor",
                self.rerank.sarcasm_event_valence_factor,
            ),
        ] {
            require_unit(name, v)?;
        }
        for (name, v) in [
            ("mad_boost", self.rerank.mad_boost),
            ("concession_powerful_boost", self.rerank.concession_powerful_boost),
            (
                "concession_scared_attenuation",
                self.rerank.concession_scared_attenuation,
            ),
            ("negated_joy_attenuation", self.rerank.negated_joy_attenuation),
            (
                "negated_joy_powerful_boost",
                self.rerank.negated_joy_powerful_boost,
            ),
            ("sarcasm_inversion_factor", self.rerank.sarcasm_inversion_factor),
        ] {
            if v <= 0.0 || !v.is_finite() {
                return Err(EngineError::InvalidParameter {
                    name: name.to_string(),
                    value: v.to_string(),
                    reason: "multiplier must be positive".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fusion_weights_sum_to_one() {
        assert!((FusionWeights::default().sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_unbalanced_weights_rejected() {
        let cfg = ScoringConfig {
            fusion: FusionWeights {
                classifier: 0.9,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_published_multipliers() {
        let rerank = RerankConfig::default();
        assert_eq!(rerank.mad_boost, 1.20);
        assert_eq!(rerank.concession_powerful_boost, 1.15);
        assert_eq!(rerank.concession_scared_attenuation, 0.85);
        assert_eq!(rerank.negated_joy_attenuation, 0.65);
    }
}
