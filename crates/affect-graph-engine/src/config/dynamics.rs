//! Recursive dynamics settings.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::require_unit;

/// Settings for the per-reflection state update:
///
/// new = (1−α)·prev + α·baseline + β·shock + γ·(intensity − ERI)·direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DynamicsConfig {
    /// Pull toward the rolling baseline.
    pub alpha: f32,
    /// Shock pass-through.
    pub beta: f32,
    /// Incongruence-damped directional nudge.
    pub gamma: f32,
    /// Scale applied to the arousal component of the directional term.
    pub arousal_direction_scale: f32,
    /// Prior reflections folded into the baseline mean.
    pub baseline_window: usize,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            beta: 0.5,
            gamma: 0.08,
            arousal_direction_scale: 0.5,
            baseline_window: 5,
        }
    }
}

impl DynamicsConfig {
    pub fn validate(&self) -> EngineResult<()> {
        require_unit("alpha", self.alpha)?;
        require_unit("beta", self.beta)?;
        require_unit("gamma", self.gamma)?;
        require_unit("arousal_direction_scale", self.arousal_direction_scale)?;
        if self.baseline_window == 0 {
            return Err(crate::error::EngineError::InvalidParameter {
                name: "baseline_window".to_string(),
                value: "0".to_string(),
                reason: "baseline needs at least one slot".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_defaults() {
        let cfg = DynamicsConfig::default();
        assert_eq!(cfg.alpha, 0.1);
        assert_eq!(cfg.beta, 0.5);
        assert_eq!(cfg.gamma, 0.08);
        assert!(cfg.validate().is_ok());
    }
}
