//! Core types shared across the addon
//!
//! This module holds the fundamental types used by the classifier, the
//! configuration layer, and the orchestrator, plus error and logging
//! infrastructure.

mod error;
pub mod logging;
mod types;

pub use error::*;
pub use types::*;
