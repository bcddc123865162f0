//! Feature extraction settings.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::require_unit;

/// Settings for the lexicon scan and negation handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Forward token window a negator affects. The scope also breaks at
    /// concession conjunctions and clause boundaries.
    pub negation_scope_tokens: usize,

    /// Fraction of an anchor's weight surviving a litotes flip
    /// ("not unhappy" reads as attenuated positive).
    pub litotes_attenuation: f32,

    /// Fraction of an anchor's weight surviving a moderate negation flip.
    pub negation_flip_factor: f32,

    /// Multiplier an intensifier applies to adjacent emotion-term arousal.
    pub intensifier_arousal_boost: f32,

    /// Token-repetition ratio above which text reads as filler
    /// (feeds the neutral gate).
    pub repetition_threshold: f32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            negation_scope_tokens: 3,
            litotes_attenuation: 0.4,
            negation_flip_factor: 0.6,
            intensifier_arousal_boost: 1.3,
            repetition_threshold: 0.5,
        }
    }
}

impl ExtractionConfig {
    pub fn validate(&self) -> EngineResult<()> {
        require_unit("litotes_attenuation", self.litotes_attenuation)?;
        require_unit("negation_flip_factor", self.negation_flip_factor)?;
        require_unit("repetition_threshold", self.repetition_threshold)?;
        if self.negation_scope_tokens == 0 {
            return Err(crate::error::EngineError::InvalidParameter {
                name: "negation_scope_tokens".to_string(),
                value: "0".to_string(),
                reason: "scope must cover at least one token".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert!(ExtractionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_scope_rejected() {
        let cfg = ExtractionConfig {
            negation_scope_tokens: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
