//! Core configuration: provider budgets, cache bounds, history bounds.
//!
//! Engine-side tunables (fusion weights, rerank multipliers, decay
//! half-lives) live in `affect-graph-engine::config`; this module only
//! configures the concerns the core crate owns.
//!
//! Loading is layered: compiled defaults, then an optional file, then
//! `AFFECT_*` environment overrides, via the `config` crate.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Timeout and fallback budgets for provider calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Budget for one classifier call, in milliseconds.
    pub classifier_timeout_ms: u64,

    /// Budget for one batched similarity call, in milliseconds.
    pub embedding_timeout_ms: u64,

    /// Budget for the optional soft-signal call, in milliseconds.
    pub soft_signal_timeout_ms: u64,

    /// Calibrated confidence below this floor withholds classification
    /// (state updates still apply).
    pub min_confidence_floor: f32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            classifier_timeout_ms: 800,
            embedding_timeout_ms: 400,
            soft_signal_timeout_ms: 600,
            min_confidence_floor: 0.15,
        }
    }
}

/// Bounds for the duplicate-classification cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Maximum cached (user, text) classification outcomes.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: 1024,
        }
    }
}

/// Bounds on history consumed from the persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Most recent prior reflections folded into the dynamics baseline.
    pub baseline_window: usize,

    /// Hard cap on history entries the engine will examine per call.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            baseline_window: 5,
            max_entries: 50,
        }
    }
}

/// Top-level core configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoreConfig {
    pub provider: ProviderConfig,
    pub cache: CacheConfig,
    pub history: HistoryConfig,
}

impl CoreConfig {
    /// Load with layering: defaults < optional TOML file < `AFFECT_*` env.
    ///
    /// # Errors
    ///
    /// [`CoreError::ConfigError`] on unreadable file, malformed values, or
    /// failed validation.
    pub fn load(path: Option<&str>) -> CoreResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }
        builder = builder.add_source(config::Environment::with_prefix("AFFECT").separator("__"));

        let loaded: Self = builder.build()?.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Validate cross-field constraints.
    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.provider.min_confidence_floor) {
            return Err(CoreError::ConfigError(format!(
                "min_confidence_floor must be in [0, 1], got {}",
                self.provider.min_confidence_floor
            )));
        }
        if self.history.baseline_window == 0 {
            return Err(CoreError::ConfigError(
                "baseline_window must be at least 1".to_string(),
            ));
        }
        if self.history.baseline_window > self.history.max_entries {
            return Err(CoreError::ConfigError(format!(
                "baseline_window ({}) exceeds max_entries ({})",
                self.history.baseline_window, self.history.max_entries
            )));
        }
        if self.cache.enabled && self.cache.capacity == 0 {
            return Err(CoreError::ConfigError(
                "cache capacity must be nonzero when enabled".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        assert!(CoreConfig::default().validate().is_ok());
    }

    #[test]
    fn test_floor_out_of_range_rejected() {
        let mut cfg = CoreConfig::default();
        cfg.provider.min_confidence_floor = 1.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_baseline_window_rejected() {
        let mut cfg = CoreConfig::default();
        cfg.history.baseline_window = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_baseline_window_bounded_by_max_entries() {
        let mut cfg = CoreConfig::default();
        cfg.history.baseline_window = 100;
        cfg.history.max_entries = 50;
        assert!(cfg.validate().is_err());
    }
}
