//! Affective enrichment engine for the Affect Graph system.
//!
//! This crate implements the per-reflection processing chain and the
//! per-user recursive state machinery:
//!
//! # Modules
//!
//! - [`config`]: Configuration types for all engine subsystems
//! - [`error`]: Error types and result aliases
//! - [`extraction`]: Lexicon-based feature extraction and the
//!   event/emotion valence split
//! - [`scoring`]: Primary emotion fusion scoring and the rerank rule
//!   pipeline, plus the deterministic rule-only fallback
//! - [`selection`]: Secondary/tertiary hierarchy descent with the neutral
//!   gate and ambiguity suppression
//! - [`calibration`]: Multi-component confidence fusion and offline
//!   post-hoc recalibration
//! - [`dynamics`]: Per-reflection recursive state update (baseline, shock,
//!   expressed/felt incongruence, smoothed state)
//! - [`temporal`]: Time-aware EMA/volatility/drift/risk-momentum tracker
//!   with the normal/elevated/alert regime machine
//! - [`threads`]: Recursion/thread detection against bounded history
//! - [`pipeline`]: The `enrich` operation tying everything together behind
//!   the provider traits
//!
//! Classification (extraction through calibration) is a pure function of
//! text and context; re-running it on the same input yields the same
//! output. The dynamics/temporal updates are deliberately not idempotent —
//! state strictly advances per observed reflection.

pub mod calibration;
pub mod config;
pub mod dynamics;
pub mod error;
pub mod extraction;
pub mod pipeline;
pub mod scoring;
pub mod selection;
pub mod temporal;
pub mod threads;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use pipeline::AffectPipeline;
