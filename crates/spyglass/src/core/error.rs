//! Error types for the addon pipeline
//!
//! Failures in the pipeline are deliberately rare: classification and
//! transform parsing degrade gracefully instead of erroring. What remains
//! is the external renderer boundary and configuration parsing.

use thiserror::Error;

/// Errors surfaced by the addon pipeline
#[derive(Error, Debug)]
pub enum AddonError {
    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("Config error: {message}")]
    ConfigError { message: String },
}

impl AddonError {
    /// Create a new render error
    pub fn render_error(message: String) -> Self {
        Self::RenderError { message }
    }

    /// Create a new config error
    pub fn config_error(message: String) -> Self {
        Self::ConfigError { message }
    }
}
