//! WebAssembly bindings
//!
//! Browser-facing wrappers around the classifier and the configuration
//! resolver. The pan/zoom controller is driven from the host side through
//! its trait seams and needs no binding of its own.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::config::{resolve_config, ConfigFragments};
#[cfg(target_arch = "wasm32")]
use crate::core::ThemeMode;

/// Initialize WASM module
///
/// Sets up panic hooks and console logging for better error messages in
/// the browser.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

/// Decide whether a code block contains Mermaid diagram source
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn is_mermaid(code: &str) -> bool {
    crate::detect::is_mermaid_code(code)
}

/// Resolve the renderer configuration for a theme mode
///
/// # Arguments
/// * `mode` - "light" or "dark"
/// * `config` - optional direct-override fragment as JSON
/// * `light_config` - optional light-mode fragment as JSON
/// * `dark_config` - optional dark-mode fragment as JSON
///
/// # Returns
/// * The resolved configuration as a JSON string
/// * Throws a JavaScript error on malformed input
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn resolve_renderer_config(
    mode: &str,
    config: Option<String>,
    light_config: Option<String>,
    dark_config: Option<String>,
) -> Result<String, JsValue> {
    let mode = match mode {
        "dark" => ThemeMode::Dark,
        _ => ThemeMode::Light,
    };

    let fragments = ConfigFragments::from_json(
        config.as_deref(),
        light_config.as_deref(),
        dark_config.as_deref(),
    )
    .map_err(|e| JsValue::from_str(&format!("{}", e)))?;

    let resolved = resolve_config(mode, &fragments);
    serde_json::to_string(&resolved).map_err(|e| JsValue::from_str(&format!("{}", e)))
}
