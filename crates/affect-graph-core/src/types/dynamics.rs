//! Per-user smoothed affective state.

use serde::{Deserialize, Serialize};

use crate::types::domain;

/// Smoothed per-user affective state, updated on every reflection.
///
/// Owned per user and persisted between reflections. `valence` is signed
/// `[-1, 1]`; `arousal` is unit `[0, 1]`. Values are stored rounded to 3
/// decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicsState {
    pub valence: f32,
    pub arousal: f32,
}

impl Default for DynamicsState {
    /// Resting state for a user with no prior reflections: neutral valence,
    /// low arousal.
    fn default() -> Self {
        Self {
            valence: 0.0,
            arousal: 0.3,
        }
    }
}

impl DynamicsState {
    pub fn new(valence: f32, arousal: f32) -> Self {
        Self {
            valence: domain::clamp_signed(valence),
            arousal: domain::clamp_unit(arousal),
        }
    }

    /// Clamp both fields into their domains and round to 3 decimals.
    pub fn normalized(self) -> Self {
        Self {
            valence: domain::round3(domain::clamp_signed(self.valence)),
            arousal: domain::round3(domain::clamp_unit(self.arousal)),
        }
    }

    /// Whether both fields are finite and inside their domains.
    pub fn is_valid(&self) -> bool {
        self.valence.is_finite()
            && self.arousal.is_finite()
            && (-1.0..=1.0).contains(&self.valence)
            && (0.0..=1.0).contains(&self.arousal)
    }
}
