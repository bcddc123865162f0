//! Secondary/tertiary selection settings.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::require_unit;

/// Neutral gate thresholds and defaults.
///
/// Defaults are stated in unit space (the gate converts valence to the
/// signed scale at its single call site).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeutralGateConfig {
    /// Token count at or below which contentless text can gate neutral.
    pub max_tokens: usize,
    /// Hedge count at or above which text gates neutral.
    pub min_hedges: usize,
    /// Unit valence returned on the neutral path.
    pub valence_unit: f32,
    /// Arousal returned on the neutral path.
    pub arousal: f32,
    /// Confidence returned on the neutral path.
    pub confidence: f32,
}

impl Default for NeutralGateConfig {
    fn default() -> Self {
        Self {
            max_tokens: 6,
            min_hedges: 2,
            valence_unit: 0.50,
            arousal: 0.35,
            confidence: 0.40,
        }
    }
}

/// Hierarchy descent settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Tertiary selection is suppressed (ambiguous) below this raw score.
    pub ambiguity_threshold: f32,

    /// Additive boost for resilience-branch secondaries when the event is
    /// bad but the writer had control.
    pub context_boost: f32,

    /// Event valence below this counts as a bad event for the context
    /// boost.
    pub low_event_valence_max: f32,

    pub neutral: NeutralGateConfig,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            ambiguity_threshold: 0.6,
            context_boost: 0.15,
            low_event_valence_max: 0.4,
            neutral: NeutralGateConfig::default(),
        }
    }
}

impl SelectionConfig {
    pub fn validate(&self) -> EngineResult<()> {
        require_unit("ambiguity_threshold", self.ambiguity_threshold)?;
        require_unit("context_boost", self.context_boost)?;
        require_unit("low_event_valence_max", self.low_event_valence_max)?;
        require_unit("neutral.valence_unit", self.neutral.valence_unit)?;
        require_unit("neutral.arousal", self.neutral.arousal)?;
        require_unit("neutral.confidence", self.neutral.confidence)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert!(SelectionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_published_neutral_defaults() {
        let neutral = NeutralGateConfig::default();
        assert_eq!(neutral.valence_unit, 0.50);
        assert_eq!(neutral.arousal, 0.35);
        assert_eq!(neutral.confidence, 0.40);
    }
}
