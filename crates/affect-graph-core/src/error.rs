//! Error types for affect-graph-core.
//!
//! This module defines the central error type [`CoreError`] used throughout
//! the affect-graph crates, along with the [`CoreResult<T>`] type alias.

use thiserror::Error;

/// Top-level error type for affect-graph-core operations.
///
/// Provides structured error variants for all failure modes in the core
/// library, enabling precise error handling and informative error messages.
///
/// # Examples
///
/// ```rust
/// use affect_graph_core::CoreError;
///
/// let error = CoreError::ValidationError {
///     field: "text".to_string(),
///     message: "reflection text is empty".to_string(),
/// };
///
/// assert!(error.to_string().contains("text"));
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field value failed validation constraints.
    ///
    /// # When This Occurs
    ///
    /// - Empty or malformed reflection text at ingestion
    /// - Field value out of allowed range (e.g., confidence > 1.0)
    /// - NaN or Infinity in numeric fields
    ///
    /// Validation failures are rejected before core processing, never
    /// silently defaulted.
    #[error("Validation error: {field} - {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// The emotion wheel tables failed structural validation at load.
    ///
    /// # When This Occurs
    ///
    /// - A primary without exactly 6 secondaries
    /// - A secondary without exactly 6 tertiaries
    /// - Duplicate labels within a sibling set
    ///
    /// This is a construction-time error only. Once an [`crate::taxonomy::EmotionWheel`]
    /// exists, every path drawn from it is valid by construction; a runtime
    /// taxonomy violation is a defect, asserted in tests, not handled here.
    #[error("Taxonomy error: {0}")]
    TaxonomyError(String),

    /// An external provider call failed or timed out.
    ///
    /// # When This Occurs
    ///
    /// - Classifier/embedding/language-model call failure
    /// - Provider call exceeding its timeout budget
    ///
    /// Callers fall back to the deterministic rule path and mark the result
    /// `degraded`; this error is never fatal to the pipeline.
    #[error("Provider '{provider}' unavailable: {message}")]
    ProviderUnavailable {
        /// Name of the provider that failed
        provider: String,
        /// Description of the failure
        message: String,
    },

    /// Persisted per-user state is malformed.
    ///
    /// # When This Occurs
    ///
    /// - Deserialization failure of stored `TemporalState`/`DynamicsState`
    /// - Stored values outside their documented domains
    ///
    /// The pipeline reinitializes to defaults, logs a warning, and continues.
    #[error("State corruption for user '{user_id}': {message}")]
    StateCorruption {
        /// User key of the corrupted state
        user_id: String,
        /// Description of the corruption
        message: String,
    },

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An error occurred in the persistence collaborator.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// An unexpected internal error occurred.
    ///
    /// These errors typically indicate bugs and should be reported.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
