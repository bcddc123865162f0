//! Conditional rerank rules.
//!
//! A pure pipeline of candidate-set transforms. Each rule inspects the
//! extracted evidence, multiplies specific candidates, renormalizes, and
//! logs its before/after scores so a reranked result can always be
//! explained from the logs.

use std::collections::HashSet;

use affect_graph_core::taxonomy::Primary;
use affect_graph_core::traits::PrimaryDistribution;
use affect_graph_core::types::{ControlLevel, NegationStrength};

use crate::config::RerankConfig;
use crate::extraction::LinguisticFeatures;

/// Evidence the rules read.
pub struct RuleContext<'a> {
    pub features: &'a LinguisticFeatures,
    pub control: ControlLevel,
}

/// Result of the rerank pipeline.
#[derive(Debug, Clone)]
pub struct RerankOutcome {
    /// Scores after all rules, normalized.
    pub scores: PrimaryDistribution,
    /// Event valence after rule adjustments.
    pub event_valence: f32,
    /// Labels of rules that fired, in order.
    pub fired: Vec<&'static str>,
    /// Candidates a rule boosted, for the selection tie-break.
    pub boosted: HashSet<Primary>,
}

struct Rule {
    label: &'static str,
    apply: fn(&RerankConfig, &RuleContext<'_>, &mut RerankOutcome) -> bool,
}

const RULES: &[Rule] = &[
    Rule {
        label: "mad_agency",
        apply: mad_agency,
    },
    Rule {
        label: "concession_resilience",
        apply: concession_resilience,
    },
    Rule {
        label: "negated_joy",
        apply: negated_joy,
    },
    Rule {
        label: "sarcasm_inversion",
        apply: sarcasm_inversion,
    },
];

/// Run every rule in order over the fused scores.
pub fn apply_rules(
    config: &RerankConfig,
    ctx: &RuleContext<'_>,
    scores: PrimaryDistribution,
    event_valence: f32,
) -> RerankOutcome {
    let mut outcome = RerankOutcome {
        scores,
        event_valence,
        fired: Vec::new(),
        boosted: HashSet::new(),
    };

    for rule in RULES {
        let before = outcome.scores;
        if (rule.apply)(config, ctx, &mut outcome) {
            outcome.fired.push(rule.label);
            tracing::debug!(
                rule = rule.label,
                before = ?before.as_array(),
                after = ?outcome.scores.as_array(),
                event_valence = outcome.event_valence,
                "rerank rule fired"
            );
        }
    }

    outcome
}

/// Bad event the writer had a hand in reads as anger, not sadness.
fn mad_agency(config: &RerankConfig, ctx: &RuleContext<'_>, outcome: &mut RerankOutcome) -> bool {
    if outcome.event_valence < config.mad_event_valence_max
        && matches!(ctx.control, ControlLevel::Medium | ControlLevel::High)
    {
        outcome.scores.scale(Primary::Mad, config.mad_boost);
        outcome.boosted.insert(Primary::Mad);
        true
    } else {
        false
    }
}

/// "scared ... but I decided ..." reads as resilience over fear.
fn concession_resilience(
    config: &RerankConfig,
    ctx: &RuleContext<'_>,
    outcome: &mut RerankOutcome,
) -> bool {
    if ctx.features.concession_agency {
        outcome
            .scores
            .scale(Primary::Powerful, config.concession_powerful_boost);
        outcome
            .scores
            .scale(Primary::Scared, config.concession_scared_attenuation);
        outcome.boosted.insert(Primary::Powerful);
        true
    } else {
        false
    }
}

/// Negated joy terms over a good event: "can't be happy about the win"
/// reads as grit, not celebration.
fn negated_joy(config: &RerankConfig, ctx: &RuleContext<'_>, outcome: &mut RerankOutcome) -> bool {
    let negated_joy_present = ctx.features.emotion_hits.iter().any(|hit| {
        hit.entry.primary == Primary::Joyful
            && !hit.litotes
            && matches!(
                hit.negation,
                Some(NegationStrength::Moderate) | Some(NegationStrength::Strong)
            )
    });
    if negated_joy_present && outcome.event_valence > config.negated_joy_event_valence_min {
        outcome
            .scores
            .scale(Primary::Joyful, config.negated_joy_attenuation);
        outcome
            .scores
            .scale(Primary::Powerful, config.negated_joy_powerful_boost);
        outcome.boosted.insert(Primary::Powerful);
        true
    } else {
        false
    }
}

/// Sarcasm inverts the positive shell and discounts the event reading.
fn sarcasm_inversion(
    config: &RerankConfig,
    ctx: &RuleContext<'_>,
    outcome: &mut RerankOutcome,
) -> bool {
    if ctx.features.sarcasm {
        for primary in Primary::ALL {
            if primary.is_positive() {
                outcome.scores.scale(primary, config.sarcasm_inversion_factor);
            }
        }
        outcome.event_valence =
            (outcome.event_valence * config.sarcasm_event_valence_factor).clamp(0.0, 1.0);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use crate::extraction::FeatureExtractor;

    fn features_for(text: &str) -> LinguisticFeatures {
        FeatureExtractor::new(&ExtractionConfig::default()).extract(text, text)
    }

    fn run(
        text: &str,
        control: ControlLevel,
        event_valence: f32,
    ) -> (RerankOutcome, LinguisticFeatures) {
        let features = features_for(text);
        let ctx = RuleContext {
            features: &features,
            control,
        };
        let outcome = apply_rules(
            &RerankConfig::default(),
            &ctx,
            PrimaryDistribution::uniform(),
            event_valence,
        );
        (outcome, features_for(text))
    }

    #[test]
    fn test_mad_rule_fires_on_bad_controlled_event() {
        let (outcome, _) = run("i missed the deadline", ControlLevel::High, 0.2);
        assert!(outcome.fired.contains(&"mad_agency"));
        assert!(outcome.scores.get(Primary::Mad) > outcome.scores.get(Primary::Sad));
        assert!(outcome.boosted.contains(&Primary::Mad));
    }

    #[test]
    fn test_mad_rule_skips_low_control() {
        let (outcome, _) = run("i missed the deadline", ControlLevel::Low, 0.2);
        assert!(!outcome.fired.contains(&"mad_agency"));
    }

    #[test]
    fn test_mad_rule_skips_good_event() {
        let (outcome, _) = run("i missed the deadline", ControlLevel::High, 0.7);
        assert!(!outcome.fired.contains(&"mad_agency"));
    }

    #[test]
    fn test_negated_joy_rule() {
        let (outcome, _) = run(
            "i got promoted but i'm not happy about it",
            ControlLevel::Medium,
            0.9,
        );
        assert!(outcome.fired.contains(&"negated_joy"));
        assert!(outcome.scores.get(Primary::Powerful) > outcome.scores.get(Primary::Joyful));
    }

    #[test]
    fn test_litotes_does_not_fire_negated_joy() {
        // "not unhappy" is attenuated positive, not negated joy.
        let (outcome, _) = run("i'm not unhappy about the result", ControlLevel::Medium, 0.9);
        assert!(!outcome.fired.contains(&"negated_joy"));
    }

    #[test]
    fn test_sarcasm_inverts_positive_shell() {
        let (outcome, _) = run("oh great, just what i needed", ControlLevel::Medium, 0.8);
        assert!(outcome.fired.contains(&"sarcasm_inversion"));
        assert!(outcome.event_valence < 0.8);
        // Positive families were scaled down from uniform.
        assert!(outcome.scores.get(Primary::Joyful) < outcome.scores.get(Primary::Mad));
    }

    #[test]
    fn test_scores_stay_normalized() {
        let (outcome, _) = run(
            "oh great, i missed the deadline and i'm not happy",
            ControlLevel::High,
            0.2,
        );
        let sum: f32 = outcome.scores.as_array().iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }
}
