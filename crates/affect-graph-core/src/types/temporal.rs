//! Longer-horizon temporal tracker state.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default volatility for a fresh tracker.
pub const SIGMA_DEFAULT: f32 = 0.25;

/// Floor applied to volatility before computing drift, to avoid
/// divide-by-zero on a flat history.
pub const SIGMA_FLOOR: f32 = 0.05;

/// Categorical risk regime derived from drift and risk momentum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    #[default]
    Normal,
    Elevated,
    Alert,
}

/// Per-user temporal tracker state.
///
/// Created on the first observed reflection and updated on every one after;
/// decay is a function of elapsed real time, not of event count. The tracker
/// has no terminal state.
///
/// Fields:
/// - `short_ema` (S) and `long_ema` (B): time-decayed EMAs of signed invoked
///   valence
/// - `sigma`: exponentially weighted volatility of valence
/// - `drift`: standardized drift z = (S − B) / max(sigma, floor)
/// - `risk_momentum` (R): EMA of the per-reflection risk score, `[0, 1]`
/// - `confidence_momentum` (C): EMA of self-awareness signals, `[0, 1]`
/// - `recent_criticals`: timestamps of recent critical risk flags, bounded,
///   consulted by the alert transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalState {
    pub short_ema: f32,
    pub long_ema: f32,
    pub sigma: f32,
    pub drift: f32,
    pub risk_momentum: f32,
    pub confidence_momentum: f32,
    pub regime: Regime,
    /// Number of observations folded into this state.
    pub n: u64,
    pub last_update_ts: DateTime<Utc>,
    #[serde(default)]
    pub recent_criticals: VecDeque<DateTime<Utc>>,
}

impl TemporalState {
    /// Initialize from the first observation: S = B = invoked valence,
    /// default volatility, normal regime.
    pub fn initial(valence: f32, now: DateTime<Utc>) -> Self {
        Self {
            short_ema: valence,
            long_ema: valence,
            sigma: SIGMA_DEFAULT,
            drift: 0.0,
            risk_momentum: 0.0,
            confidence_momentum: 0.5,
            regime: Regime::Normal,
            n: 1,
            last_update_ts: now,
            recent_criticals: VecDeque::new(),
        }
    }

    /// Whether every field is finite and inside its documented domain.
    ///
    /// Persisted state failing this check is treated as corrupted and
    /// reinitialized by the pipeline.
    pub fn is_valid(&self) -> bool {
        let finite = self.short_ema.is_finite()
            && self.long_ema.is_finite()
            && self.sigma.is_finite()
            && self.drift.is_finite()
            && self.risk_momentum.is_finite()
            && self.confidence_momentum.is_finite();
        finite
            && (-1.0..=1.0).contains(&self.short_ema)
            && (-1.0..=1.0).contains(&self.long_ema)
            && self.sigma >= 0.0
            && (0.0..=1.0).contains(&self.risk_momentum)
            && (0.0..=1.0).contains(&self.confidence_momentum)
            && self.n >= 1
    }
}
