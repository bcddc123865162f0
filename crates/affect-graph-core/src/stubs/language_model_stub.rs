//! Stub language-model provider.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::traits::{LanguageModelProvider, SoftSignals};

/// Returns a fixed set of soft signals.
#[derive(Debug, Clone, Default)]
pub struct StubLanguageModel {
    signals: SoftSignals,
}

impl StubLanguageModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signals(signals: SoftSignals) -> Self {
        Self { signals }
    }
}

#[async_trait]
impl LanguageModelProvider for StubLanguageModel {
    async fn soft_signals(&self, _text: &str) -> CoreResult<SoftSignals> {
        Ok(self.signals)
    }

    fn name(&self) -> &'static str {
        "stub_language_model"
    }
}
