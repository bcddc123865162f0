//! Engine configuration types.
//!
//! Every empirical constant in the processing chain — fusion weights,
//! rerank multipliers, decay time constants, regime thresholds — lives in a
//! validated sub-config here with the published value as its default.
//! Nothing in the engine reads a tuning constant from anywhere else.

mod calibration;
mod dynamics;
mod extraction;
mod scoring;
mod selection;
mod temporal;
mod threads;

pub use self::calibration::CalibrationWeights;
pub use self::dynamics::DynamicsConfig;
pub use self::extraction::ExtractionConfig;
pub use self::scoring::{FusionWeights, RerankConfig, ScoringConfig};
pub use self::selection::{NeutralGateConfig, SelectionConfig};
pub use self::temporal::TemporalConfig;
pub use self::threads::ThreadConfig;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Main engine configuration containing all subsystem settings.
///
/// # Example
///
/// ```
/// use affect_graph_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.dynamics.alpha, 0.1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    pub extraction: ExtractionConfig,
    pub scoring: ScoringConfig,
    pub selection: SelectionConfig,
    pub calibration: CalibrationWeights,
    pub dynamics: DynamicsConfig,
    pub temporal: TemporalConfig,
    pub threads: ThreadConfig,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every subsystem configuration.
    pub fn validate(&self) -> EngineResult<()> {
        self.extraction.validate()?;
        self.scoring.validate()?;
        self.selection.validate()?;
        self.calibration.validate()?;
        self.dynamics.validate()?;
        self.temporal.validate()?;
        self.threads.validate()?;
        Ok(())
    }
}

pub(crate) fn require_unit(name: &str, value: f32) -> EngineResult<()> {
    if !(0.0..=1.0).contains(&value) || !value.is_finite() {
        return Err(EngineError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            reason: "must be in [0, 1]".to_string(),
        });
    }
    Ok(())
}

pub(crate) fn require_positive(name: &str, value: f32) -> EngineResult<()> {
    if value <= 0.0 || !value.is_finite() {
        return Err(EngineError::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_require_unit() {
        assert!(require_unit("x", 0.5).is_ok());
        assert!(require_unit("x", -0.1).is_err());
        assert!(require_unit("x", f32::NAN).is_err());
    }
}
