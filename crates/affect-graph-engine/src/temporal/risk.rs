//! Per-reflection risk scoring and trend signals.

use affect_graph_core::types::{domain, RiskSignal, RiskTier, TemporalState};

use crate::config::TemporalConfig;

/// Flag-load contribution per critical flag.
const CRITICAL_LOAD: f32 = 0.5;
/// Flag-load contribution per elevated flag.
const ELEVATED_LOAD: f32 = 0.25;
/// Flag-load contribution per trend flag.
const TREND_LOAD: f32 = 0.1;
/// Cap on total flag load.
const FLAG_LOAD_CAP: f32 = 0.6;

/// ERI share of the risk score.
const ERI_WEIGHT: f32 = 0.3;
/// Arousal-spike share of the risk score.
const SPIKE_WEIGHT: f32 = 0.3;

/// Scalar risk score for one reflection, in `[0, 1]`.
///
/// Derived from the incongruence magnitude, an arousal spike above the
/// configured reference, and explicit lexicon flags.
pub fn risk_score(config: &TemporalConfig, eri: f32, arousal: f32, flags: &[RiskSignal]) -> f32 {
    let eri_component = domain::clamp_unit(eri / 2.0) * ERI_WEIGHT;

    let reference = config.arousal_spike_reference;
    let spike = if arousal > reference && reference < 1.0 {
        (arousal - reference) / (1.0 - reference)
    } else {
        0.0
    };
    let spike_component = domain::clamp_unit(spike) * SPIKE_WEIGHT;

    let mut flag_load = 0.0f32;
    for flag in flags {
        flag_load += match flag.tier {
            RiskTier::Critical => CRITICAL_LOAD,
            RiskTier::Elevated => ELEVATED_LOAD,
            RiskTier::Trend => TREND_LOAD,
        };
    }
    flag_load = flag_load.min(FLAG_LOAD_CAP);

    domain::clamp_unit(eri_component + spike_component + flag_load)
}

/// Trend-tier signals derived from the updated tracker state.
pub fn trend_signals(config: &TemporalConfig, state: &TemporalState) -> Vec<RiskSignal> {
    let mut signals = Vec::new();
    if state.drift <= -config.drift_elevated_threshold {
        signals.push(RiskSignal::new(RiskTier::Trend, "negative_drift"));
    }
    if state.risk_momentum >= config.risk_elevated_threshold {
        signals.push(RiskSignal::new(RiskTier::Trend, "risk_momentum_elevated"));
    }
    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TemporalConfig {
        TemporalConfig::default()
    }

    #[test]
    fn test_quiet_reflection_scores_low() {
        let score = risk_score(&config(), 0.1, 0.3, &[]);
        assert!(score < 0.1);
    }

    #[test]
    fn test_critical_flag_dominates() {
        let with_flag = risk_score(
            &config(),
            0.1,
            0.3,
            &[RiskSignal::new(RiskTier::Critical, "self_harm_language")],
        );
        let without = risk_score(&config(), 0.1, 0.3, &[]);
        assert!(with_flag - without >= CRITICAL_LOAD - 1e-6);
    }

    #[test]
    fn test_flag_load_capped() {
        let flags: Vec<RiskSignal> = (0..5)
            .map(|i| RiskSignal::new(RiskTier::Critical, format!("flag{i}")))
            .collect();
        let score = risk_score(&config(), 0.0, 0.0, &flags);
        assert!(score <= FLAG_LOAD_CAP + 1e-6);
    }

    #[test]
    fn test_arousal_spike_component() {
        let calm = risk_score(&config(), 0.0, 0.4, &[]);
        let spiked = risk_score(&config(), 0.0, 0.9, &[]);
        assert!(spiked > calm);
    }

    #[test]
    fn test_score_bounded() {
        let flags: Vec<RiskSignal> = (0..10)
            .map(|i| RiskSignal::new(RiskTier::Critical, format!("flag{i}")))
            .collect();
        let score = risk_score(&config(), 5.0, 1.0, &flags);
        assert!((0.0..=1.0).contains(&score));
    }
}
