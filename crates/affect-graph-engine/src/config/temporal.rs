//! Temporal tracker settings.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::{require_positive, require_unit};

/// Time constants and thresholds for the per-user temporal tracker.
///
/// Each statistic updates with an observation weight
/// `w = gain · exp(−Δt / tau)`: decay is a function of elapsed real time,
/// never of event count. Sparse observations after long silence therefore
/// move the estimates less than the same observations arriving close
/// together, which is what lets risk momentum build only under temporally
/// dense negative signals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TemporalConfig {
    /// Short EMA gain and time constant (hours).
    pub short_gain: f32,
    pub short_tau_hours: f32,

    /// Long EMA gain and time constant (hours).
    pub long_gain: f32,
    pub long_tau_hours: f32,

    /// Volatility (EW variance) gain and time constant (hours).
    pub vol_gain: f32,
    pub vol_tau_hours: f32,

    /// Risk momentum gain and time constant (hours).
    pub risk_gain: f32,
    pub risk_tau_hours: f32,

    /// Confidence momentum gain and time constant (hours).
    pub confidence_gain: f32,
    pub confidence_tau_hours: f32,

    /// |z| at or above this moves the regime to elevated.
    pub drift_elevated_threshold: f32,

    /// Risk momentum at or above this moves the regime to elevated.
    pub risk_elevated_threshold: f32,

    /// Risk momentum at or above this moves the regime to alert.
    pub risk_alert_threshold: f32,

    /// Elevated-tier flags in a single reflection at or above this count
    /// move the regime to elevated.
    pub moderate_flag_count: usize,

    /// Critical flags within the window at or above this count force alert.
    pub critical_flag_count: usize,

    /// Width of the critical-flag window (hours).
    pub critical_window_hours: f32,

    /// Bound on remembered critical-flag timestamps.
    pub critical_window_cap: usize,

    /// Arousal above this reference counts as a spike, scaled to [0, 1].
    pub arousal_spike_reference: f32,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            short_gain: 0.5,
            short_tau_hours: 48.0,
            long_gain: 0.1,
            long_tau_hours: 336.0,
            vol_gain: 0.3,
            vol_tau_hours: 168.0,
            risk_gain: 0.5,
            risk_tau_hours: 72.0,
            confidence_gain: 0.3,
            confidence_tau_hours: 168.0,
            drift_elevated_threshold: 1.5,
            risk_elevated_threshold: 0.35,
            risk_alert_threshold: 0.65,
            moderate_flag_count: 2,
            critical_flag_count: 2,
            critical_window_hours: 72.0,
            critical_window_cap: 16,
            arousal_spike_reference: 0.5,
        }
    }
}

impl TemporalConfig {
    pub fn validate(&self) -> EngineResult<()> {
        for (name, v) in [
            ("short_gain", self.short_gain),
            ("long_gain", self.long_gain),
            ("vol_gain", self.vol_gain),
            ("risk_gain", self.risk_gain),
            ("confidence_gain", self.confidence_gain),
            ("risk_elevated_threshold", self.risk_elevated_threshold),
            ("risk_alert_threshold", self.risk_alert_threshold),
            ("arousal_spike_reference", self.arousal_spike_reference),
        ] {
            require_unit(name, v)?;
        }
        for (name, v) in [
            ("short_tau_hours", self.short_tau_hours),
            ("long_tau_hours", self.long_tau_hours),
            ("vol_tau_hours", self.vol_tau_hours),
            ("risk_tau_hours", self.risk_tau_hours),
            ("confidence_tau_hours", self.confidence_tau_hours),
            ("critical_window_hours", self.critical_window_hours),
            ("drift_elevated_threshold", self.drift_elevated_threshold),
        ] {
            require_positive(name, v)?;
        }
        if self.risk_alert_threshold <= self.risk_elevated_threshold {
            return Err(crate::error::EngineError::InvalidParameter {
                name: "risk_alert_threshold".to_string(),
                value: self.risk_alert_threshold.to_string(),
                reason: "alert threshold must exceed elevated threshold".to_string(),
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
        assert!(TemporalConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let cfg = TemporalConfig {
            risk_alert_threshold: 0.2,
            risk_elevated_threshold: 0.4,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
