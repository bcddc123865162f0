//! Risk signals from lexicon and trend detection.

use serde::{Deserialize, Serialize};

/// Severity tier of a risk signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    /// Trend-derived signal (drift, momentum), lowest severity.
    Trend,
    /// Concerning but not acute lexicon hit.
    Elevated,
    /// Acute lexicon hit; two within the recent window force the alert
    /// regime.
    Critical,
}

/// One categorical risk flag attached to a reflection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSignal {
    pub tier: RiskTier,
    /// Stable label of the signal, e.g. `"hopelessness_language"` or
    /// `"negative_drift"`.
    pub label: String,
}

impl RiskSignal {
    pub fn new(tier: RiskTier, label: impl Into<String>) -> Self {
        Self {
            tier,
            label: label.into(),
        }
    }

    #[inline]
    pub fn is_critical(&self) -> bool {
        self.tier == RiskTier::Critical
    }
}
