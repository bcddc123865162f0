//! Primary emotion scoring.
//!
//! Fuses the external classifier distribution with similarity and context
//! affinity into one score per primary family, then runs the conditional
//! rerank pipeline and selects the winner.

mod fallback;
mod rerank;
mod similarity;

pub use fallback::rule_only_distribution;
pub use rerank::{apply_rules, RerankOutcome, RuleContext};
pub use similarity::WheelSimilarity;

use affect_graph_core::taxonomy::Primary;
use affect_graph_core::traits::PrimaryDistribution;
use affect_graph_core::types::{ControlLevel, EventContext, EventDomain, EventPolarity};

use crate::config::ScoringConfig;
use crate::extraction::LinguisticFeatures;

/// Result of primary scoring.
#[derive(Debug, Clone)]
pub struct PrimaryScore {
    /// The selected primary family.
    pub primary: Primary,
    /// Fused scores before rerank, normalized.
    pub raw: PrimaryDistribution,
    /// Scores after the rerank pipeline, normalized.
    pub reranked: PrimaryDistribution,
    /// Event valence after rule adjustments (sarcasm discounts it).
    pub event_valence: f32,
    /// Labels of the rules that fired, in order.
    pub fired_rules: Vec<&'static str>,
    /// Whether the base classifier argmax agrees with the final winner.
    pub classifier_agreement: bool,
}

/// Fuses classifier, similarity, and context affinity scores.
#[derive(Debug, Clone)]
pub struct PrimaryScorer {
    config: ScoringConfig,
}

impl PrimaryScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Score the six primaries and select one.
    pub fn score(
        &self,
        classifier: &PrimaryDistribution,
        sims: &WheelSimilarity,
        event: &EventContext,
        features: &LinguisticFeatures,
    ) -> PrimaryScore {
        let w = &self.config.fusion;
        let mut fused = [0.0f32; 6];
        for primary in Primary::ALL {
            fused[primary.index()] = w.classifier * classifier.get(primary)
                + w.tertiary_similarity * sims.best_tertiary(primary)
                + w.domain * domain_affinity(primary, event.domain.primary)
                + w.control * control_affinity(primary, event.control)
                + w.polarity * polarity_affinity(primary, event.polarity)
                + w.core_similarity * sims.core(primary);
        }
        let raw = PrimaryDistribution::from_scores(fused);

        let ctx = RuleContext {
            features,
            control: event.control,
        };
        let outcome = apply_rules(&self.config.rerank, &ctx, raw, event.event_valence);

        let primary = self.select(&raw, &outcome);
        let classifier_agreement = classifier.argmax() == primary;

        tracing::debug!(
            winner = %primary,
            fired = ?outcome.fired,
            agreement = classifier_agreement,
            "primary scoring complete"
        );

        PrimaryScore {
            primary,
            raw,
            reranked: outcome.scores,
            event_valence: outcome.event_valence,
            fired_rules: outcome.fired,
            classifier_agreement,
        }
    }

    /// Argmax with the rule tie-break: a rule-boosted candidate wins when
    /// its raw fused score is within the configured fraction of the raw top
    /// score.
    fn select(&self, raw: &PrimaryDistribution, outcome: &RerankOutcome) -> Primary {
        let winner = outcome.scores.argmax();
        if outcome.boosted.contains(&winner) || outcome.boosted.is_empty() {
            return winner;
        }
        let raw_top = raw.get(raw.argmax());
        let best_boosted = outcome
            .boosted
            .iter()
            .copied()
            .max_by(|a, b| {
                outcome
                    .scores
                    .get(*a)
                    .partial_cmp(&outcome.scores.get(*b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("boosted is non-empty");
        if raw.get(best_boosted) >= self.config.rerank.tie_break_ratio * raw_top {
            best_boosted
        } else {
            winner
        }
    }
}

/// Affinity of a feeling family for a life domain.
fn domain_affinity(primary: Primary, domain: EventDomain) -> f32 {
    use EventDomain::*;
    use Primary::*;
    match (domain, primary) {
        (Work, Powerful) => 0.8,
        (Work, Mad) | (Work, Scared) => 0.6,
        (Work, Peaceful) => 0.3,
        (Relationships, Sad) | (Relationships, Mad) => 0.7,
        (Relationships, Joyful) => 0.6,
        (Relationships, Powerful) => 0.3,
        (Health, Scared) => 0.8,
        (Health, Sad) => 0.6,
        (SelfGrowth, Powerful) => 0.8,
        (SelfGrowth, Joyful) | (SelfGrowth, Peaceful) => 0.6,
        (Finance, Scared) => 0.7,
        (Finance, Mad) | (Finance, Sad) => 0.6,
        (Leisure, Joyful) => 0.8,
        (Leisure, Peaceful) => 0.7,
        (Leisure, Mad) => 0.3,
        _ => 0.5,
    }
}

/// Affinity of a feeling family for the writer's control over the event.
fn control_affinity(primary: Primary, control: ControlLevel) -> f32 {
    use Primary::*;
    match (control, primary) {
        (ControlLevel::High, Powerful) => 0.9,
        (ControlLevel::High, Mad) => 0.7,
        (ControlLevel::High, Joyful) => 0.6,
        (ControlLevel::High, Scared) => 0.35,
        (ControlLevel::Low, Scared) => 0.8,
        (ControlLevel::Low, Sad) => 0.7,
        (ControlLevel::Low, Powerful) => 0.3,
        _ => 0.5,
    }
}

/// Affinity of a feeling family for the event polarity.
fn polarity_affinity(primary: Primary, polarity: EventPolarity) -> f32 {
    use Primary::*;
    match (polarity, primary) {
        (EventPolarity::Planned, Scared) => 0.8,
        (EventPolarity::Planned, Joyful) => 0.6,
        (EventPolarity::DidNotHappen, Sad) => 0.8,
        (EventPolarity::DidNotHappen, Mad) => 0.6,
        (EventPolarity::DidNotHappen, Peaceful) => 0.6,
        _ => 0.5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractionConfig;
    use crate::extraction::FeatureExtractor;
    use affect_graph_core::taxonomy::EmotionWheel;

    fn score_text(text: &str, classifier: PrimaryDistribution) -> PrimaryScore {
        let wheel = EmotionWheel::load().unwrap();
        let extractor = FeatureExtractor::new(&ExtractionConfig::default());
        let features = extractor.extract(text, text);
        let splitter = crate::extraction::ValenceSplitter::new(&ExtractionConfig::default());
        let split = splitter.split(&features);
        let (event, _) = crate::extraction::derive_event_context(&features, split.event_valence);
        let sims = WheelSimilarity::lexical(&wheel, text);
        PrimaryScorer::new(&ScoringConfig::default()).score(&classifier, &sims, &event, &features)
    }

    #[test]
    fn test_clear_fear_text_selects_scared() {
        let result = score_text(
            "i feel terrified and anxious about everything",
            PrimaryDistribution::from_scores([0.05, 0.05, 0.05, 0.1, 0.05, 0.7]),
        );
        assert_eq!(result.primary, Primary::Scared);
        assert!(result.classifier_agreement);
    }

    #[test]
    fn test_concession_rule_prefers_powerful() {
        // Classifier leans Scared, but the concession pattern fires.
        let result = score_text(
            "i'm scared of the move but i decided to stay committed and planned every step",
            PrimaryDistribution::from_scores([0.05, 0.30, 0.05, 0.05, 0.05, 0.50]),
        );
        assert!(result
            .fired_rules
            .contains(&"concession_resilience"));
        assert_eq!(result.primary, Primary::Powerful);
    }

    #[test]
    fn test_sarcasm_discounts_event_valence() {
        let result = score_text(
            "oh great, the project got cancelled again",
            PrimaryDistribution::uniform(),
        );
        assert!(result.fired_rules.contains(&"sarcasm_inversion"));
        assert!(result.event_valence < 0.5);
    }

    #[test]
    fn test_scoring_deterministic() {
        let dist = PrimaryDistribution::uniform();
        let a = score_text("i feel anxious about work", dist);
        let b = score_text("i feel anxious about work", dist);
        assert_eq!(a.primary, b.primary);
        assert_eq!(a.reranked, b.reranked);
    }
}
