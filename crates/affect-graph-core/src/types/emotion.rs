//! Invoked emotion and expressed signal types.
//!
//! "Invoked" is the internally felt emotion inferred from text. "Expressed"
//! is the outward tone of the writing. The dynamics engine compares the two
//! to measure incongruence (ERI).

use serde::{Deserialize, Serialize};

use crate::taxonomy::WheelPath;
use crate::types::domain;

/// The internally felt emotion for one reflection.
///
/// Pure function of text + context; carries no cross-call state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokedEmotion {
    /// Position in the emotion wheel.
    pub path: WheelPath,

    /// Signed valence in `[-1, 1]`.
    pub valence: f32,

    /// Arousal in `[0, 1]`.
    pub arousal: f32,

    /// Calibrated confidence in `[0, 1]`.
    pub confidence: f32,
}

impl InvokedEmotion {
    /// Clamp all numeric fields into their documented domains.
    pub fn clamped(mut self) -> Self {
        self.valence = domain::clamp_signed(self.valence);
        self.arousal = domain::clamp_unit(self.arousal);
        self.confidence = domain::clamp_unit(self.confidence);
        self
    }
}

/// Outward tone of the reflection text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExpressedTone {
    /// No strong stylistic marker.
    #[default]
    Neutral,
    /// Warm, appreciative surface style.
    Warm,
    /// Tense or agitated surface style (intensifiers, exclamations).
    Tense,
    /// Flat, minimal, withdrawn phrasing.
    Flat,
    /// Overtly heated phrasing (profanity, caps, stacked intensifiers).
    Heated,
}

/// The outward expression signal for one reflection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressedSignal {
    /// Surface tone classification.
    pub tone: ExpressedTone,

    /// Expression intensity in `[0, 1]`.
    pub intensity: f32,

    /// Willingness to express in `[0, 1]`. Hedging and distancing phrasing
    /// lower this; direct first-person feeling statements raise it.
    pub willingness_to_express: f32,
}

impl Default for ExpressedSignal {
    fn default() -> Self {
        Self {
            tone: ExpressedTone::Neutral,
            intensity: 0.3,
            willingness_to_express: 0.5,
        }
    }
}

impl ExpressedSignal {
    pub fn new(tone: ExpressedTone, intensity: f32, willingness_to_express: f32) -> Self {
        Self {
            tone,
            intensity: domain::clamp_unit(intensity),
            willingness_to_express: domain::clamp_unit(willingness_to_express),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::Primary;

    #[test]
    fn test_invoked_clamped() {
        let invoked = InvokedEmotion {
            path: WheelPath::primary_only(Primary::Sad),
            valence: -1.7,
            arousal: 1.4,
            confidence: -0.1,
        }
        .clamped();
        assert_eq!(invoked.valence, -1.0);
        assert_eq!(invoked.arousal, 1.0);
        assert_eq!(invoked.confidence, 0.0);
    }

    #[test]
    fn test_expressed_new_clamps() {
        let signal = ExpressedSignal::new(ExpressedTone::Tense, 1.2, -0.5);
        assert_eq!(signal.intensity, 1.0);
        assert_eq!(signal.willingness_to_express, 0.0);
    }

    #[test]
    fn test_tone_serde() {
        let json = serde_json::to_string(&ExpressedTone::Heated).unwrap();
        assert_eq!(json, "\"heated\"");
    }
}
