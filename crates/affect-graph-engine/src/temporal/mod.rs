//! Temporal state manager.
//!
//! Tracks per-user affect across reflections with time-aware statistics:
//! short/long EMAs of invoked valence, exponentially weighted volatility,
//! standardized drift, risk momentum, confidence momentum, and the
//! normal/elevated/alert regime machine.
//!
//! Every statistic updates with an observation weight
//! `w = gain · exp(−Δt / τ)` on real elapsed time. Observations arriving
//! after long silence carry less weight than the same observations arriving
//! close together, so momentum builds only under temporally dense signals;
//! a count-based EMA cannot make that distinction.
//!
//! The regime is recomputed on every observation as a pure function of the
//! thresholds over drift, risk momentum, and flags. There is no terminal
//! state.

mod risk;

pub use risk::{risk_score, trend_signals};

use chrono::{DateTime, Duration, Utc};

use affect_graph_core::types::{domain, Regime, RiskSignal, RiskTier, TemporalState};

use crate::config::TemporalConfig;

/// One observation folded into the tracker.
#[derive(Debug, Clone)]
pub struct TemporalObservation {
    /// Signed invoked valence.
    pub valence: f32,
    /// Invoked arousal.
    pub arousal: f32,
    /// Incongruence magnitude from the dynamics engine.
    pub eri: f32,
    /// Calibrated classification confidence.
    pub confidence: f32,
    /// Willingness to express, a self-awareness proxy.
    pub willingness: f32,
    /// Explicit risk flags extracted from this reflection.
    pub risk_flags: Vec<RiskSignal>,
    pub timestamp: DateTime<Utc>,
}

/// The per-user temporal tracker.
#[derive(Debug, Clone)]
pub struct TemporalTracker {
    config: TemporalConfig,
}

impl TemporalTracker {
    pub fn new(config: &TemporalConfig) -> Self {
        Self { config: *config }
    }

    /// Fold one observation into the state.
    ///
    /// `None` (or an invalid persisted state) initializes a fresh tracker
    /// from the observation; the caller is expected to have logged the
    /// corruption case.
    pub fn observe(
        &self,
        state: Option<TemporalState>,
        observation: &TemporalObservation,
    ) -> TemporalState {
        let valence = sanitize_signed(observation.valence);
        match state.filter(|s| s.is_valid()) {
            None => self.initialize(valence, observation),
            Some(prev) => self.advance(prev, valence, observation),
        }
    }

    fn initialize(&self, valence: f32, observation: &TemporalObservation) -> TemporalState {
        let cfg = &self.config;
        let mut state = TemporalState::initial(valence, observation.timestamp);

        let risk = risk_score(
            cfg,
            observation.eri,
            observation.arousal,
            &observation.risk_flags,
        );
        state.risk_momentum = domain::clamp_unit(cfg.risk_gain * risk);
        let awareness = self.awareness(observation);
        state.confidence_momentum =
            domain::clamp_unit(0.5 + cfg.confidence_gain * (awareness - 0.5));

        self.record_criticals(&mut state, observation);
        state.regime = self.transition(&state, &observation.risk_flags);
        state
    }

    fn advance(
        &self,
        mut state: TemporalState,
        valence: f32,
        observation: &TemporalObservation,
    ) -> TemporalState {
        let cfg = &self.config;
        let dt_hours = elapsed_hours(state.last_update_ts, observation.timestamp);

        let w_short = weight(cfg.short_gain, dt_hours, cfg.short_tau_hours);
        let w_long = weight(cfg.long_gain, dt_hours, cfg.long_tau_hours);
        let w_vol = weight(cfg.vol_gain, dt_hours, cfg.vol_tau_hours);
        let w_risk = weight(cfg.risk_gain, dt_hours, cfg.risk_tau_hours);
        let w_conf = weight(cfg.confidence_gain, dt_hours, cfg.confidence_tau_hours);

        let prev_short = state.short_ema;
        state.short_ema =
            domain::clamp_signed(state.short_ema + w_short * (valence - state.short_ema));
        state.long_ema = domain::clamp_signed(state.long_ema + w_long * (valence - state.long_ema));

        let deviation = valence - prev_short;
        let variance = (state.sigma * state.sigma
            + w_vol * (deviation * deviation - state.sigma * state.sigma))
            .max(0.0);
        state.sigma = variance.sqrt();

        let sigma_floored = state
            .sigma
            .max(affect_graph_core::types::SIGMA_FLOOR);
        state.drift = (state.short_ema - state.long_ema) / sigma_floored;

        let risk = risk_score(
            cfg,
            observation.eri,
            observation.arousal,
            &observation.risk_flags,
        );
        state.risk_momentum =
            domain::clamp_unit(state.risk_momentum + w_risk * (risk - state.risk_momentum));

        let awareness = self.awareness(observation);
        state.confidence_momentum = domain::clamp_unit(
            state.confidence_momentum + w_conf * (awareness - state.confidence_momentum),
        );

        self.record_criticals(&mut state, observation);
        state.regime = self.transition(&state, &observation.risk_flags);
        state.n += 1;
        state.last_update_ts = observation.timestamp;

        if !state.is_valid() {
            tracing::warn!("temporal update produced invalid state, reinitializing");
            return self.initialize(valence, observation);
        }

        tracing::debug!(
            short = state.short_ema,
            long = state.long_ema,
            sigma = state.sigma,
            drift = state.drift,
            risk = state.risk_momentum,
            regime = ?state.regime,
            "temporal state advanced"
        );

        state
    }

    /// Self-awareness proxy folded into confidence momentum.
    fn awareness(&self, observation: &TemporalObservation) -> f32 {
        domain::clamp_unit(0.5 * observation.confidence + 0.5 * observation.willingness)
    }

    /// Push critical-flag timestamps and prune the window.
    fn record_criticals(&self, state: &mut TemporalState, observation: &TemporalObservation) {
        let cfg = &self.config;
        let cutoff = observation.timestamp
            - Duration::seconds((cfg.critical_window_hours * 3600.0) as i64);
        state.recent_criticals.retain(|ts| *ts > cutoff);

        for flag in &observation.risk_flags {
            if flag.tier == RiskTier::Critical {
                state.recent_criticals.push_back(observation.timestamp);
            }
        }
        while state.recent_criticals.len() > cfg.critical_window_cap {
            state.recent_criticals.pop_front();
        }
    }

    /// Deterministic regime from thresholds over drift, momentum, and flags.
    fn transition(&self, state: &TemporalState, flags: &[RiskSignal]) -> Regime {
        let cfg = &self.config;
        let criticals_in_window = state.recent_criticals.len();
        if state.risk_momentum >= cfg.risk_alert_threshold
            || criticals_in_window >= cfg.critical_flag_count
        {
            return Regime::Alert;
        }

        let elevated_flags_now = flags
            .iter()
            .filter(|f| f.tier == RiskTier::Elevated)
            .count();
        if state.drift.abs() >= cfg.drift_elevated_threshold
            || state.risk_momentum >= cfg.risk_elevated_threshold
            || elevated_flags_now >= cfg.moderate_flag_count
        {
            return Regime::Elevated;
        }

        Regime::Normal
    }
}

/// Observation weight: `gain · exp(−Δt / τ)`.
fn weight(gain: f32, dt_hours: f32, tau_hours: f32) -> f32 {
    (gain * (-dt_hours / tau_hours.max(1e-3)).exp()).clamp(0.0, 1.0)
}

fn elapsed_hours(from: DateTime<Utc>, to: DateTime<Utc>) -> f32 {
    let seconds = (to - from).num_seconds().max(0);
    seconds as f32 / 3600.0
}

fn sanitize_signed(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use affect_graph_core::types::SIGMA_DEFAULT;
    use chrono::TimeZone;

    fn tracker() -> TemporalTracker {
        TemporalTracker::new(&TemporalConfig::default())
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap()
    }

    fn observation(
        valence: f32,
        arousal: f32,
        eri: f32,
        flags: Vec<RiskSignal>,
        timestamp: DateTime<Utc>,
    ) -> TemporalObservation {
        TemporalObservation {
            valence,
            arousal,
            eri,
            confidence: 0.6,
            willingness: 0.5,
            risk_flags: flags,
            timestamp,
        }
    }

    #[test]
    fn test_first_observation_initializes() {
        let state = tracker().observe(None, &observation(0.4, 0.5, 0.2, vec![], t0()));
        assert_eq!(state.short_ema, 0.4);
        assert_eq!(state.long_ema, 0.4);
        assert_eq!(state.sigma, SIGMA_DEFAULT);
        assert_eq!(state.n, 1);
        assert_eq!(state.regime, Regime::Normal);
    }

    #[test]
    fn test_invalid_persisted_state_reinitializes() {
        let mut bad = TemporalState::initial(0.0, t0());
        bad.sigma = f32::NAN;
        let state = tracker().observe(Some(bad), &observation(0.3, 0.4, 0.1, vec![], t0()));
        assert!(state.is_valid());
        assert_eq!(state.n, 1);
    }

    #[test]
    fn test_short_ema_tracks_faster_than_long() {
        let tr = tracker();
        let mut state = tr.observe(None, &observation(0.5, 0.4, 0.1, vec![], t0()));
        for hour in [6i64, 12, 18] {
            state = tr.observe(
                Some(state),
                &observation(-0.6, 0.5, 0.1, vec![], t0() + Duration::hours(hour)),
            );
        }
        assert!(state.short_ema < state.long_ema);
        assert!(state.drift < 0.0);
    }

    #[test]
    fn test_long_gap_contributes_less_to_short_ema() {
        let tr = tracker();
        let initial = tr.observe(None, &observation(0.0, 0.3, 0.1, vec![], t0()));

        let short_gap = tr.observe(
            Some(initial.clone()),
            &observation(0.8, 0.6, 0.1, vec![], t0() + Duration::hours(2)),
        );
        let long_gap = tr.observe(
            Some(initial),
            &observation(0.8, 0.6, 0.1, vec![], t0() + Duration::hours(20)),
        );

        let short_delta = (short_gap.short_ema - 0.0).abs();
        let long_delta = (long_gap.short_ema - 0.0).abs();
        assert!(
            long_delta < short_delta,
            "stale observation should move the short EMA less ({long_delta} vs {short_delta})"
        );
    }

    #[test]
    fn test_scenario_ends_elevated_with_rising_risk() {
        let tr = tracker();
        let elevated = |label: &str| RiskSignal::new(RiskTier::Elevated, label);

        // v in unit scale per the scenario, converted to signed.
        let entries: Vec<TemporalObservation> = vec![
            observation(domain::unit_to_signed(0.6), 0.4, 0.3, vec![], t0()),
            observation(
                domain::unit_to_signed(0.2),
                0.8,
                0.8,
                vec![elevated("anxiety_language")],
                t0() + Duration::hours(6),
            ),
            observation(
                domain::unit_to_signed(0.7),
                0.3,
                0.2,
                vec![],
                t0() + Duration::hours(18),
            ),
            observation(
                domain::unit_to_signed(0.1),
                0.9,
                0.9,
                vec![
                    elevated("depression_language"),
                    elevated("anxiety_language"),
                ],
                t0() + Duration::hours(36),
            ),
        ];

        let mut state: Option<TemporalState> = None;
        let mut risk_after_first = 0.0;
        for (i, entry) in entries.iter().enumerate() {
            let next = tr.observe(state, entry);
            if i == 0 {
                risk_after_first = next.risk_momentum;
            }
            state = Some(next);
        }

        let final_state = state.unwrap();
        assert!(
            matches!(final_state.regime, Regime::Elevated | Regime::Alert),
            "expected escalation, got {:?}",
            final_state.regime
        );
        assert!(final_state.risk_momentum > risk_after_first);
        assert_eq!(final_state.n, 4);
    }

    #[test]
    fn test_two_criticals_in_window_force_alert() {
        let tr = tracker();
        let critical = || RiskSignal::new(RiskTier::Critical, "self_harm_language");

        let first = tr.observe(
            None,
            &observation(-0.5, 0.7, 0.5, vec![critical()], t0()),
        );
        assert_ne!(first.regime, Regime::Alert);

        let second = tr.observe(
            Some(first),
            &observation(
                -0.6,
                0.8,
                0.6,
                vec![critical()],
                t0() + Duration::hours(10),
            ),
        );
        assert_eq!(second.regime, Regime::Alert);
    }

    #[test]
    fn test_criticals_outside_window_expire() {
        let tr = tracker();
        let critical = || RiskSignal::new(RiskTier::Critical, "self_harm_language");

        let first = tr.observe(None, &observation(-0.5, 0.7, 0.5, vec![critical()], t0()));
        // Second critical arrives far outside the 72h window.
        let second = tr.observe(
            Some(first),
            &observation(
                -0.5,
                0.7,
                0.5,
                vec![critical()],
                t0() + Duration::hours(500),
            ),
        );
        assert_eq!(second.recent_criticals.len(), 1);
    }

    #[test]
    fn test_deescalation_back_to_normal() {
        let tr = tracker();
        let elevated = |label: &str| RiskSignal::new(RiskTier::Elevated, label);

        let mut state = tr.observe(
            None,
            &observation(
                -0.6,
                0.9,
                0.9,
                vec![elevated("a"), elevated("b")],
                t0(),
            ),
        );
        assert_eq!(state.regime, Regime::Elevated);

        // Calm reflections spread over weeks pull momentum back down.
        for week in 1..=6 {
            state = tr.observe(
                Some(state),
                &observation(
                    0.3,
                    0.3,
                    0.05,
                    vec![],
                    t0() + Duration::days(7 * week),
                ),
            );
        }
        assert_eq!(state.regime, Regime::Normal);
    }

    #[test]
    fn test_observe_is_not_idempotent() {
        let tr = tracker();
        let obs = observation(0.2, 0.4, 0.2, vec![], t0() + Duration::hours(1));
        let first = tr.observe(None, &obs);
        let second = tr.observe(Some(first.clone()), &obs);
        assert_ne!(first.n, second.n);
    }

    #[test]
    fn test_sigma_floor_prevents_drift_blowup() {
        let tr = tracker();
        let mut state = tr.observe(None, &observation(0.0, 0.3, 0.0, vec![], t0()));
        // Identical observations collapse volatility toward zero.
        for hour in 1..=30i64 {
            state = tr.observe(
                Some(state),
                &observation(0.0, 0.3, 0.0, vec![], t0() + Duration::hours(hour)),
            );
        }
        assert!(state.drift.is_finite());
        assert!(state.drift.abs() < 10.0);
    }
}
