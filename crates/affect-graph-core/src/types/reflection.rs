//! Reflection ingestion record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// How the reflection entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    #[default]
    Text,
    Voice,
    Journal,
}

/// A single free-text reflection, created on ingestion and immutable after.
///
/// Construction validates the text; an empty or whitespace-only reflection
/// is rejected with [`CoreError::ValidationError`] before any core
/// processing, never silently defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionRecord {
    /// Unique reflection id.
    pub id: Uuid,

    /// Owning user key.
    pub user_id: String,

    /// Ingestion timestamp (UTC).
    pub timestamp: DateTime<Utc>,

    /// Text exactly as received.
    pub raw_text: String,

    /// Lowercased, whitespace-collapsed text used by every lexicon scan.
    pub normalized_text: String,

    /// BCP-47 language tag. Lexicons currently cover `en`.
    pub language: String,

    /// Ingestion channel.
    pub input_mode: InputMode,
}

impl ReflectionRecord {
    /// Create a record from raw text, normalizing it for lexicon scans.
    ///
    /// # Errors
    ///
    /// [`CoreError::ValidationError`] when `raw_text` is empty or whitespace,
    /// or `user_id` is empty.
    pub fn new(
        user_id: impl Into<String>,
        raw_text: impl Into<String>,
        timestamp: DateTime<Utc>,
        input_mode: InputMode,
    ) -> CoreResult<Self> {
        let user_id = user_id.into();
        let raw_text = raw_text.into();

        if user_id.trim().is_empty() {
            return Err(CoreError::ValidationError {
                field: "user_id".to_string(),
                message: "user id must not be empty".to_string(),
            });
        }
        if raw_text.trim().is_empty() {
            return Err(CoreError::ValidationError {
                field: "text".to_string(),
                message: "reflection text must not be empty".to_string(),
            });
        }

        let normalized_text = normalize_text(&raw_text);

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            timestamp,
            raw_text,
            normalized_text,
            language: "en".to_string(),
            input_mode,
        })
    }
}

/// Lowercase, collapse whitespace, and strip control characters.
///
/// Sentence punctuation is kept: the negation scanner treats `.` `,` `;` as
/// scope breaks and the sarcasm cues include `!` runs.
pub fn normalize_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_was_space = true;
    for ch in raw.chars() {
        if ch.is_control() {
            continue;
        }
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            last_was_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_rejected() {
        let result = ReflectionRecord::new("u1", "   ", Utc::now(), InputMode::Text);
        assert!(matches!(
            result,
            Err(CoreError::ValidationError { ref field, .. }) if field == "text"
        ));
    }

    #[test]
    fn test_empty_user_rejected() {
        let result = ReflectionRecord::new("", "fine day", Utc::now(), InputMode::Text);
        assert!(result.is_err());
    }

    #[test]
    fn test_normalization() {
        let record =
            ReflectionRecord::new("u1", "  I  FELT\tGreat. ", Utc::now(), InputMode::Journal)
                .unwrap();
        assert_eq!(record.normalized_text, "i felt great.");
        assert_eq!(record.raw_text, "  I  FELT\tGreat. ");
    }

    #[test]
    fn test_normalize_keeps_punctuation() {
        assert_eq!(normalize_text("Not bad, honestly!"), "not bad, honestly!");
    }
}
