//! Linguistic flags surfaced alongside classification.

use serde::{Deserialize, Serialize};

/// Strength of a detected negation.
///
/// `Litotes` marks the "not unhappy" construction: a negator applied to a
/// negative term, which reads as attenuated positive rather than negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegationStrength {
    Weak,
    Moderate,
    Strong,
    Litotes,
}

/// Negation detection result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NegationFlag {
    pub present: bool,
    pub strength: Option<NegationStrength>,
}

impl NegationFlag {
    pub fn detected(strength: NegationStrength) -> Self {
        Self {
            present: true,
            strength: Some(strength),
        }
    }
}

/// Profanity category of the strongest hit in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProfanityCategory {
    #[default]
    None,
    Mild,
    Strong,
}

/// Presence signals used by the neutral gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NeutralFlags {
    /// Any emotion-term hit in the text.
    pub emotion_presence: bool,
    /// Any event-anchor hit in the text.
    pub event_presence: bool,
}

/// All linguistic flags for one reflection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct LinguisticFlags {
    pub negation: NegationFlag,
    pub sarcasm: bool,
    pub profanity: ProfanityCategory,
    pub neutral: NeutralFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negation_detected() {
        let flag = NegationFlag::detected(NegationStrength::Litotes);
        assert!(flag.present);
        assert_eq!(flag.strength, Some(NegationStrength::Litotes));
    }

    #[test]
    fn test_default_flags_clear() {
        let flags = LinguisticFlags::default();
        assert!(!flags.negation.present);
        assert!(!flags.sarcasm);
        assert_eq!(flags.profanity, ProfanityCategory::None);
        assert!(!flags.neutral.emotion_presence);
    }

    #[test]
    fn test_strength_serde() {
        let json = serde_json::to_string(&NegationStrength::Litotes).unwrap();
        assert_eq!(json, "\"litotes\"");
    }
}
