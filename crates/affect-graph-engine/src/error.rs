//! Engine error types.

use thiserror::Error;

use affect_graph_core::CoreError;

/// Errors that can occur during enrichment processing.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {value}. {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Parameter value as string
        value: String,
        /// Why the value is invalid
        reason: String,
    },

    /// Recalibration fitting failed (degenerate or empty label set).
    #[error("Calibration fit error: {0}")]
    CalibrationFit(String),

    /// Error propagated from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
