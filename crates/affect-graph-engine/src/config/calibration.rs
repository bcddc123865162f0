//! Confidence calibration weights.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Published component weights for confidence fusion. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalibrationWeights {
    /// Classifier entropy-confidence (1 − normalized entropy).
    pub classifier_entropy: f32,
    /// Agreement between the base classifier argmax and the final winner.
    pub rerank_agreement: f32,
    /// Consistency of the negation evidence with the chosen family.
    pub negation_consistency: f32,
    /// Consistency of the sarcasm evidence with the chosen family.
    pub sarcasm_consistency: f32,
    /// Confidence of the control estimate.
    pub control: f32,
    /// Confidence of the polarity estimate.
    pub polarity: f32,
    /// Confidence of the domain estimate.
    pub domain: f32,
    /// Similarity score of the chosen secondary.
    pub secondary_similarity: f32,
}

impl Default for CalibrationWeights {
    fn default() -> Self {
        Self {
            classifier_entropy: 0.20,
            rerank_agreement: 0.15,
            negation_consistency: 0.10,
            sarcasm_consistency: 0.10,
            control: 0.10,
            polarity: 0.10,
            domain: 0.10,
            secondary_similarity: 0.15,
        }
    }
}

impl CalibrationWeights {
    pub fn sum(&self) -> f32 {
        self.classifier_entropy
            + self.rerank_agreement
            + self.negation_consistency
            + self.sarcasm_consistency
            + self.control
            + self.polarity
            + self.domain
            + self.secondary_similarity
    }

    pub fn validate(&self) -> EngineResult<()> {
        let sum = self.sum();
        if (sum - 1.0).abs() > 1e-3 {
            return Err(EngineError::InvalidParameter {
                name: "calibration_weights".to_string(),
                value: sum.to_string(),
                reason: "calibration weights must sum to 1.0".to_string(),
            });
        }
        Ok(())
    }
}
