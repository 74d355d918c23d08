//! Theme-aware configuration resolution
//!
//! The host supplies up to three configuration fragments: a direct override
//! plus light- and dark-mode fragments. Resolution picks the fragment that
//! matches the viewer's theme mode and merges it over the built-in default
//! for that mode.

use serde_json::{json, Value};
use tracing::debug;

use crate::core::{AddonError, ThemeMode};

use super::deep_merge;

/// Raw configuration fragments supplied by the host theme provider
#[derive(Debug, Clone, Default)]
pub struct ConfigFragments {
    /// Direct override; wins unconditionally when present
    pub config: Option<Value>,
    /// Fragment applied in light mode
    pub light_config: Option<Value>,
    /// Fragment applied in dark mode
    pub dark_config: Option<Value>,
}

impl ConfigFragments {
    /// Parse fragments from raw JSON strings, as received over a host or
    /// wasm boundary. `None` entries stay absent.
    pub fn from_json(
        config: Option<&str>,
        light_config: Option<&str>,
        dark_config: Option<&str>,
    ) -> Result<Self, AddonError> {
        let parse = |label: &str, raw: Option<&str>| -> Result<Option<Value>, AddonError> {
            raw.map(|s| {
                serde_json::from_str(s).map_err(|e| {
                    AddonError::config_error(format!("invalid {} fragment: {}", label, e))
                })
            })
            .transpose()
        };

        Ok(Self {
            config: parse("override", config)?,
            light_config: parse("light", light_config)?,
            dark_config: parse("dark", dark_config)?,
        })
    }
}

/// Resolve the renderer configuration for the given theme mode.
///
/// A direct override beats everything. Otherwise the mode-appropriate
/// fragment is merged over the mode's default: dark mode implies
/// `{"theme": "dark"}`, light mode starts from an empty object.
pub fn resolve_config(mode: ThemeMode, fragments: &ConfigFragments) -> Value {
    if let Some(config) = &fragments.config {
        debug!("direct config override present, skipping theme fragments");
        return config.clone();
    }

    let (defaults, fragment) = match mode {
        ThemeMode::Dark => (json!({"theme": "dark"}), &fragments.dark_config),
        ThemeMode::Light => (json!({}), &fragments.light_config),
    };

    match fragment {
        Some(fragment) => deep_merge(&defaults, fragment),
        None => defaults,
    }
}
