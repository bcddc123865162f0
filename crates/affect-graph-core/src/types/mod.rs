//! Core domain types for the Affect Graph system.

pub mod domain;

mod dynamics;
mod emotion;
mod enrichment;
mod event;
mod flags;
mod history;
mod reflection;
mod risk;
mod temporal;
mod thread;

pub use dynamics::*;
pub use emotion::*;
pub use enrichment::*;
pub use event::*;
pub use flags::*;
pub use history::*;
pub use reflection::*;
pub use risk::*;
pub use temporal::*;
pub use thread::*;
