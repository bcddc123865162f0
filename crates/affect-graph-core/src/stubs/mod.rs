//! Stub implementations for development and testing.
//!
//! All stub exports are gated with `#[cfg(any(test, feature = "test-utils"))]`;
//! production code cannot import them unless the `test-utils` feature is
//! enabled, which should never happen in production builds.
//!
//! These implementations provide deterministic behavior for testing. The
//! in-memory store does a full scan and keeps nothing across drops; real
//! deployments put a durable key-value store behind
//! [`crate::traits::PersistenceStore`].
//!
//! # Stubs
//!
//! - [`StubClassifier`]: deterministic distribution from input hashing, with
//!   a failing variant for degraded-path tests
//! - [`StubEmbeddingProvider`]: token-overlap similarity
//! - [`StubLanguageModel`]: fixed soft signals
//! - [`InMemoryStore`]: in-memory per-user state and history

#[cfg(any(test, feature = "test-utils"))]
mod classifier_stub;
#[cfg(any(test, feature = "test-utils"))]
mod embedding_stub;
#[cfg(any(test, feature = "test-utils"))]
mod language_model_stub;
#[cfg(any(test, feature = "test-utils"))]
mod memory_store_stub;

#[cfg(any(test, feature = "test-utils"))]
pub use classifier_stub::StubClassifier;
#[cfg(any(test, feature = "test-utils"))]
pub use embedding_stub::StubEmbeddingProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use language_model_stub::StubLanguageModel;
#[cfg(any(test, feature = "test-utils"))]
pub use memory_store_stub::InMemoryStore;
