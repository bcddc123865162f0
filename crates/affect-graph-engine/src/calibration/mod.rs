//! Confidence calibration.
//!
//! Fuses eight component confidences into one score with the published
//! weights, then optionally applies an offline-fitted monotonic remap
//! ([`Recalibrator`]). The remap never reorders confidences, so rankings
//! survive recalibration.

mod recalibrate;

pub use recalibrate::{expected_calibration_error, Recalibrator};

use affect_graph_core::taxonomy::Primary;
use affect_graph_core::types::{domain, NegationStrength};

use crate::config::CalibrationWeights;
use crate::extraction::LinguisticFeatures;

/// The eight component confidences, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceComponents {
    pub classifier_entropy: f32,
    pub rerank_agreement: f32,
    pub negation_consistency: f32,
    pub sarcasm_consistency: f32,
    pub control: f32,
    pub polarity: f32,
    pub domain: f32,
    pub secondary_similarity: f32,
}

impl ConfidenceComponents {
    /// Clamp every component into `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            classifier_entropy: domain::clamp_unit(self.classifier_entropy),
            rerank_agreement: domain::clamp_unit(self.rerank_agreement),
            negation_consistency: domain::clamp_unit(self.negation_consistency),
            sarcasm_consistency: domain::clamp_unit(self.sarcasm_consistency),
            control: domain::clamp_unit(self.control),
            polarity: domain::clamp_unit(self.polarity),
            domain: domain::clamp_unit(self.domain),
            secondary_similarity: domain::clamp_unit(self.secondary_similarity),
        }
    }
}

/// Weighted confidence fusion.
#[derive(Debug, Clone)]
pub struct ConfidenceCalibrator {
    weights: CalibrationWeights,
    recalibrator: Recalibrator,
}

impl ConfidenceCalibrator {
    pub fn new(weights: &CalibrationWeights) -> Self {
        Self {
            weights: *weights,
            recalibrator: Recalibrator::Identity,
        }
    }

    /// Attach an offline-fitted monotonic remap.
    pub fn with_recalibrator(mut self, recalibrator: Recalibrator) -> Self {
        self.recalibrator = recalibrator;
        self
    }

    /// Fuse components into one confidence and apply the remap.
    pub fn fuse(&self, components: &ConfidenceComponents) -> f32 {
        let c = components.clamped();
        let w = &self.weights;
        let fused = w.classifier_entropy * c.classifier_entropy
            + w.rerank_agreement * c.rerank_agreement
            + w.negation_consistency * c.negation_consistency
            + w.sarcasm_consistency * c.sarcasm_consistency
            + w.control * c.control
            + w.polarity * c.polarity
            + w.domain * c.domain
            + w.secondary_similarity * c.secondary_similarity;
        let remapped = self.recalibrator.apply(domain::clamp_unit(fused));
        tracing::debug!(fused, remapped, "confidence fused");
        domain::clamp_unit(remapped)
    }
}

/// Consistency of the negation evidence with the chosen family.
///
/// Negation that flipped into the chosen family is consistent; negation
/// pointing against a positive winner is not.
pub fn negation_consistency(features: &LinguisticFeatures, winner: Primary) -> f32 {
    if !features.negation.present {
        return 1.0;
    }
    let litotes = features.negation.strength == Some(NegationStrength::Litotes);
    match (litotes, winner.is_positive()) {
        // "not unhappy" supporting a positive family reads consistent.
        (true, true) => 0.9,
        (true, false) => 0.6,
        // Plain negation with a positive winner is the suspicious case.
        (false, true) => 0.5,
        (false, false) => 0.8,
    }
}

/// Consistency of the sarcasm evidence with the chosen family.
pub fn sarcasm_consistency(sarcasm: bool, winner: Primary) -> f32 {
    match (sarcasm, winner.is_positive()) {
        (false, _) => 1.0,
        // Sarcasm detected yet a positive family survived inversion.
        (true, true) => 0.4,
        (true, false) => 0.8,
    }
}
