//! Optional soft-signal language model abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::types::ExpressedTone;

/// Soft signals a language model can contribute on top of the lexicon scan.
///
/// Every field is optional; absent hints leave the deterministic estimate
/// untouched. Hints are unit values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SoftSignals {
    pub tone_hint: Option<ExpressedTone>,
    pub intensity_hint: Option<f32>,
    pub willingness_hint: Option<f32>,
}

/// Optional language-model collaborator for expressed-signal refinement.
///
/// The pipeline treats this provider as best-effort: failures and timeouts
/// degrade silently to the lexicon-derived expressed signal.
#[async_trait]
pub trait LanguageModelProvider: Send + Sync {
    async fn soft_signals(&self, text: &str) -> CoreResult<SoftSignals>;

    fn name(&self) -> &'static str {
        "language_model"
    }
}
