//! Thread detection settings.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::{require_positive, require_unit};

/// Settings for the recursion/thread detector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThreadConfig {
    /// Weight of lexical token overlap in the combined similarity.
    pub lexical_weight: f32,
    /// Weight of event-label overlap in the combined similarity.
    pub label_weight: f32,

    /// History window in days.
    pub window_days: f32,
    /// Bound on history entries examined.
    pub max_candidates: usize,

    /// Minimum combined similarity to keep a link.
    pub min_link_score: f32,
    /// Bound on kept links.
    pub max_links: usize,

    /// Band edge for the identical relation.
    pub identical_band: f32,
    /// Band edge for the recurring relation.
    pub recurring_band: f32,

    /// Links at or above this count mark the thread ongoing.
    pub ongoing_link_count: usize,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            lexical_weight: 0.4,
            label_weight: 0.6,
            window_days: 14.0,
            max_candidates: 25,
            min_link_score: 0.7,
            max_links: 5,
            identical_band: 0.9,
            recurring_band: 0.75,
            ongoing_link_count: 3,
        }
    }
}

impl ThreadConfig {
    pub fn validate(&self) -> EngineResult<()> {
        require_unit("lexical_weight", self.lexical_weight)?;
        require_unit("label_weight", self.label_weight)?;
        require_unit("min_link_score", self.min_link_score)?;
        require_unit("identical_band", self.identical_band)?;
        require_unit("recurring_band", self.recurring_band)?;
        require_positive("window_days", self.window_days)?;
        if (self.lexical_weight + self.label_weight - 1.0).abs() > 1e-3 {
            return Err(crate::error::EngineError::InvalidParameter {
                name: "thread_weights".to_string(),
                value: format!("{}", self.lexical_weight + self.label_weight),
                reason: "lexical and label weights must sum to 1.0".to_string(),
            });
        }
        if self.recurring_band >= self.identical_band {
            return Err(crate::error::EngineError::InvalidParameter {
                name: "recurring_band".to_string(),
                value: self.recurring_band.to_string(),
                reason: "recurring band must sit below the identical band".to_string(),
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
        assert!(ThreadConfig::default().validate().is_ok());
    }

    #[test]
    fn test_band_ordering_enforced() {
        let cfg = ThreadConfig {
            recurring_band: 0.95,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }
}
