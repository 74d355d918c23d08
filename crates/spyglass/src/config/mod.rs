//! Renderer configuration: deep-merge semantics and theme-aware resolution

mod merge;
mod resolve;

pub use merge::*;
pub use resolve::*;
