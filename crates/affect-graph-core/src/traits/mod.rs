//! Provider traits consumed by the enrichment pipeline.
//!
//! The core never talks to a concrete transport; collaborators implement
//! these traits and are injected into the pipeline.
//!
//! # Traits
//!
//! - [`TextClassifier`]: 6-way probability distribution over primaries
//! - [`EmbeddingProvider`]: batch text↔phrase similarity scores
//! - [`LanguageModelProvider`]: optional soft tone/willingness signals
//! - [`PersistenceStore`]: per-user state and read-only bounded history

mod classifier;
mod embedding;
mod language_model;
mod persistence;

pub use classifier::{PrimaryDistribution, TextClassifier};
pub use embedding::EmbeddingProvider;
pub use language_model::{LanguageModelProvider, SoftSignals};
pub use persistence::PersistenceStore;
