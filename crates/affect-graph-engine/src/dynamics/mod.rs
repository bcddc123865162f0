//! Recursive dynamics engine.
//!
//! Per-reflection update of the smoothed per-user affective state:
//! a rolling baseline over recent history, the shock of the current invoked
//! emotion against that baseline, the expressed/felt incongruence (ERI),
//! and the damped state step
//!
//! ```text
//! new = (1−α)·prev + α·baseline + β·shock + γ·(intensity − ERI)·direction
//! ```

use affect_graph_core::types::{domain, DynamicsState, ExpressedSignal, HistoryEntry};

use crate::config::DynamicsConfig;

/// Expressed-arousal blend: invoked arousal share.
const EXP_AROUSAL_INVOKED: f32 = 0.35;
/// Expressed-arousal blend: sentiment-confidence share.
const EXP_AROUSAL_CONFIDENCE: f32 = 0.35;
/// Expressed-arousal blend: expression-intensity share.
const EXP_AROUSAL_INTENSITY: f32 = 0.30;

/// Willingness floor in the expressed-valence damping.
const EXP_VALENCE_BASE: f32 = 0.7;
/// Willingness span in the expressed-valence damping.
const EXP_VALENCE_SPAN: f32 = 0.3;

/// Arousal-gap weight floor in the ERI sum.
const ERI_AROUSAL_BASE: f32 = 0.25;
/// Arousal-gap weight span (scaled by intensity) in the ERI sum.
const ERI_AROUSAL_SPAN: f32 = 0.5;

/// Inputs for one dynamics update.
#[derive(Debug, Clone, Copy)]
pub struct DynamicsInput {
    /// Signed invoked valence.
    pub invoked_valence: f32,
    /// Invoked arousal.
    pub invoked_arousal: f32,
    /// Sentiment confidence of the classification.
    pub confidence: f32,
    /// Outward expression intensity.
    pub intensity: f32,
    /// Willingness to express.
    pub willingness: f32,
}

impl DynamicsInput {
    pub fn new(
        invoked_valence: f32,
        invoked_arousal: f32,
        confidence: f32,
        expressed: &ExpressedSignal,
    ) -> Self {
        Self {
            invoked_valence,
            invoked_arousal,
            confidence,
            intensity: expressed.intensity,
            willingness: expressed.willingness_to_express,
        }
    }

    fn sanitized(self) -> Self {
        let unit = |v: f32| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        let signed = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        Self {
            invoked_valence: signed(self.invoked_valence),
            invoked_arousal: unit(self.invoked_arousal),
            confidence: unit(self.confidence),
            intensity: unit(self.intensity),
            willingness: unit(self.willingness),
        }
    }
}

/// Full result of one dynamics update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicsOutcome {
    pub baseline: DynamicsState,
    pub shock_valence: f32,
    pub shock_arousal: f32,
    /// Derived expressed valence (willingness-damped).
    pub expressed_valence: f32,
    /// Derived expressed arousal (blend of invoked, confidence, intensity).
    pub expressed_arousal: f32,
    /// Expressed/felt incongruence, ≥ 0.
    pub eri: f32,
    /// Smoothed state after this reflection.
    pub state: DynamicsState,
}

/// The per-user recursive state updater.
#[derive(Debug, Clone)]
pub struct DynamicsEngine {
    config: DynamicsConfig,
}

impl DynamicsEngine {
    pub fn new(config: &DynamicsConfig) -> Self {
        Self { config: *config }
    }

    /// Mean valence/arousal over the most recent prior reflections.
    ///
    /// Empty history yields the resting default (0.0, 0.3).
    pub fn compute_baseline(&self, history: &[HistoryEntry]) -> DynamicsState {
        if history.is_empty() {
            return DynamicsState::default();
        }
        let window = history.len().min(self.config.baseline_window);
        let mut valence = 0.0f32;
        let mut arousal = 0.0f32;
        for entry in &history[..window] {
            valence += domain::clamp_signed(entry.valence);
            arousal += domain::clamp_unit(entry.arousal);
        }
        DynamicsState::new(valence / window as f32, arousal / window as f32)
    }

    /// Expressed arousal from the invoked/confidence/intensity blend.
    pub fn expressed_arousal(&self, input: &DynamicsInput) -> f32 {
        domain::clamp_unit(
            EXP_AROUSAL_INVOKED * input.invoked_arousal
                + EXP_AROUSAL_CONFIDENCE * input.confidence
                + EXP_AROUSAL_INTENSITY * input.intensity,
        )
    }

    /// Expressed valence: invoked valence damped by unwillingness.
    pub fn expressed_valence(&self, input: &DynamicsInput) -> f32 {
        domain::clamp_signed(
            input.invoked_valence * (EXP_VALENCE_BASE + EXP_VALENCE_SPAN * input.willingness),
        )
    }

    /// Expressed/felt incongruence magnitude.
    pub fn eri(&self, input: &DynamicsInput) -> f32 {
        let v_exp = self.expressed_valence(input);
        let a_exp = self.expressed_arousal(input);
        (input.invoked_valence - v_exp).abs()
            + (ERI_AROUSAL_BASE + ERI_AROUSAL_SPAN * input.intensity)
                * (input.invoked_arousal - a_exp).abs()
    }

    /// One full update step.
    pub fn update(
        &self,
        prev: DynamicsState,
        history: &[HistoryEntry],
        input: DynamicsInput,
    ) -> DynamicsOutcome {
        let input = input.sanitized();
        let prev = if prev.is_valid() {
            prev
        } else {
            tracing::warn!("invalid prior dynamics state, using resting default");
            DynamicsState::default()
        };

        let baseline = self.compute_baseline(history);
        let shock_valence = input.invoked_valence - baseline.valence;
        let shock_arousal = input.invoked_arousal - baseline.arousal;

        let expressed_valence = self.expressed_valence(&input);
        let expressed_arousal = self.expressed_arousal(&input);
        let eri = self.eri(&input);

        // Direction of the invoked emotion in (valence, arousal−0.5) space.
        let dir_v = input.invoked_valence;
        let dir_a = input.invoked_arousal - 0.5;
        let magnitude = (dir_v * dir_v + dir_a * dir_a).sqrt();
        let (dir_v, dir_a) = if magnitude > f32::EPSILON {
            (dir_v / magnitude, dir_a / magnitude)
        } else {
            (0.0, 0.0)
        };

        let cfg = &self.config;
        let nudge = cfg.gamma * (input.intensity - eri);
        let valence = (1.0 - cfg.alpha) * prev.valence
            + cfg.alpha * baseline.valence
            + cfg.beta * shock_valence
            + nudge * dir_v;
        let arousal = (1.0 - cfg.alpha) * prev.arousal
            + cfg.alpha * baseline.arousal
            + cfg.beta * shock_arousal
            + nudge * dir_a * cfg.arousal_direction_scale;

        let state = DynamicsState {
            valence,
            arousal,
        }
        .normalized();

        tracing::debug!(
            valence = state.valence,
            arousal = state.arousal,
            eri,
            shock_valence,
            "dynamics state updated"
        );

        DynamicsOutcome {
            baseline,
            shock_valence,
            shock_arousal,
            expressed_valence,
            expressed_arousal,
            eri,
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn engine() -> DynamicsEngine {
        DynamicsEngine::new(&DynamicsConfig::default())
    }

    fn input(valence: f32, arousal: f32, willingness: f32) -> DynamicsInput {
        DynamicsInput {
            invoked_valence: valence,
            invoked_arousal: arousal,
            confidence: 0.7,
            intensity: 0.5,
            willingness,
        }
    }

    fn history_entry(valence: f32, arousal: f32) -> HistoryEntry {
        HistoryEntry::new(Uuid::new_v4(), valence, arousal, Vec::new(), Utc::now())
    }

    #[test]
    fn test_empty_baseline_is_resting_default() {
        let baseline = engine().compute_baseline(&[]);
        assert_eq!(baseline.valence, 0.0);
        assert_eq!(baseline.arousal, 0.3);
    }

    #[test]
    fn test_baseline_mean_over_window() {
        let history = vec![
            history_entry(0.4, 0.6),
            history_entry(0.2, 0.4),
            history_entry(0.0, 0.2),
        ];
        let baseline = engine().compute_baseline(&history);
        assert!((baseline.valence - 0.2).abs() < 1e-6);
        assert!((baseline.arousal - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_baseline_respects_window_bound() {
        let mut history: Vec<HistoryEntry> = (0..10).map(|_| history_entry(1.0, 1.0)).collect();
        history.extend((0..10).map(|_| history_entry(-1.0, 0.0)));
        // Window of 5 only sees the leading entries.
        let baseline = engine().compute_baseline(&history);
        assert!((baseline.valence - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_eri_nondecreasing_as_willingness_gap_grows() {
        let e = engine();
        let mut prev_eri = 0.0;
        // Lower willingness widens the expressed/felt valence gap.
        for willingness in [1.0f32, 0.75, 0.5, 0.25, 0.0] {
            let eri = e.eri(&input(0.8, 0.6, willingness));
            assert!(
                eri >= prev_eri - 1e-6,
                "eri should not shrink as the gap grows"
            );
            prev_eri = eri;
        }
    }

    #[test]
    fn test_full_willingness_zero_valence_gap() {
        let e = engine();
        let i = input(0.8, 0.6, 1.0);
        assert!((e.expressed_valence(&i) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_update_moves_toward_negative_shock() {
        let e = engine();
        let prev = DynamicsState::new(0.3, 0.4);
        let outcome = e.update(prev, &[], input(-0.8, 0.8, 0.6));
        assert!(outcome.state.valence < prev.valence);
        assert!(outcome.shock_valence < 0.0);
    }

    #[test]
    fn test_update_outputs_in_domain_and_rounded() {
        let e = engine();
        let outcome = e.update(DynamicsState::new(0.9, 0.9), &[], input(1.0, 1.0, 0.0));
        assert!(outcome.state.is_valid());
        // Rounded to 3 decimals.
        let v = outcome.state.valence * 1000.0;
        assert!((v - v.round()).abs() < 1e-3);
    }

    #[test]
    fn test_nan_input_guarded() {
        let e = engine();
        let outcome = e.update(
            DynamicsState::default(),
            &[],
            DynamicsInput {
                invoked_valence: f32::NAN,
                invoked_arousal: 0.5,
                confidence: 0.5,
                intensity: 0.5,
                willingness: 0.5,
            },
        );
        assert!(outcome.state.is_valid());
    }

    #[test]
    fn test_invalid_prev_state_reset() {
        let e = engine();
        let bad = DynamicsState {
            valence: f32::NAN,
            arousal: 0.5,
        };
        let outcome = e.update(bad, &[], input(0.2, 0.4, 0.5));
        assert!(outcome.state.is_valid());
    }

    #[test]
    fn test_update_not_idempotent() {
        let e = engine();
        let first = e.update(DynamicsState::default(), &[], input(0.6, 0.7, 0.8));
        let second = e.update(first.state, &[], input(0.6, 0.7, 0.8));
        // State strictly advances toward the repeated observation.
        assert_ne!(first.state, second.state);
    }
}
