//! Deterministic rule-only classifier fallback.
//!
//! Builds a primary distribution from lexicon evidence alone. Used when the
//! external classifier is unavailable or times out, and as the base of the
//! stub classifier in tests. Fully deterministic.

use affect_graph_core::taxonomy::{Primary, PRIMARY_COUNT};
use affect_graph_core::traits::PrimaryDistribution;

use crate::extraction::LinguisticFeatures;

/// Smoothing mass added to every family before normalization.
const SMOOTHING: f32 = 0.05;

/// The opposing family a negated term's weight moves to.
fn opposite(primary: Primary) -> Primary {
    match primary {
        Primary::Joyful => Primary::Sad,
        Primary::Sad => Primary::Joyful,
        Primary::Powerful => Primary::Scared,
        Primary::Scared => Primary::Powerful,
        Primary::Peaceful => Primary::Mad,
        Primary::Mad => Primary::Peaceful,
    }
}

/// Build a distribution over primaries from lexicon hits and event valence.
///
/// Emotion hits vote for their family, with negated hits voting for the
/// opposing family (litotes votes positive, attenuated). Without emotion
/// evidence, event valence alone shapes a weak prior.
pub fn rule_only_distribution(
    features: &LinguisticFeatures,
    event_valence: f32,
) -> PrimaryDistribution {
    let mut scores = [SMOOTHING; PRIMARY_COUNT];

    let mut any_emotion_vote = false;
    for hit in &features.emotion_hits {
        if hit.effective_weight <= f32::EPSILON {
            continue;
        }
        any_emotion_vote = true;
        let vote = hit.effective_weight * hit.entry.valence.abs();
        let family = if hit.litotes {
            // "not unhappy": attenuated positive, opposite of the sad-side
            // term family.
            opposite(hit.entry.primary)
        } else if hit.effective_valence.signum() != hit.entry.valence.signum() {
            // Flipped by negation.
            opposite(hit.entry.primary)
        } else {
            hit.entry.primary
        };
        scores[family.index()] += vote;
    }

    if !any_emotion_vote {
        // Weak event-valence prior: good events lean joyful/peaceful, bad
        // ones lean sad/scared (and mad when the text carries heat).
        let lean = (event_valence - 0.5) * 2.0;
        if lean > 0.0 {
            scores[Primary::Joyful.index()] += 0.5 * lean;
            scores[Primary::Peaceful.index()] += 0.3 * lean;
            scores[Primary::Powerful.index()] += 0.2 * lean;
        } else {
            let lean = -lean;
            scores[Primary::Sad.index()] += 0.4 * lean;
            scores[Primary::Scared.index()] += 0.35 * lean;
            scores[Primary::Mad.index()] += 0.25 * lean;
        }
    }

    PrimaryDistribution::from_scores(scores)
}
