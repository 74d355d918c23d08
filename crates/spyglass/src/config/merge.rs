//! Deep merge for nested configuration values

use serde_json::Value;

/// Merge `overrides` into `base`, recursively, returning a new value.
///
/// For every key in `overrides`: if both sides hold an object, the two are
/// merged recursively; any other pairing is replaced wholesale by the
/// override, including arrays (never concatenated), `null`, and `false`.
/// Keys present only in `base` are preserved. Neither input is mutated and
/// the result shares no nested structure with either input.
///
/// # Example
/// ```
/// use serde_json::json;
/// use spyglass::config::deep_merge;
///
/// let base = json!({"theme": "forest", "flowchart": {"curve": "basis"}});
/// let overrides = json!({"flowchart": {"htmlLabels": true}});
/// let merged = deep_merge(&base, &overrides);
/// assert_eq!(merged["theme"], "forest");
/// assert_eq!(merged["flowchart"]["curve"], "basis");
/// assert_eq!(merged["flowchart"]["htmlLabels"], true);
/// ```
pub fn deep_merge(base: &Value, overrides: &Value) -> Value {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            let mut merged = base_map.clone();
            for (key, override_value) in override_map {
                let combined = match (base_map.get(key), override_value) {
                    (Some(base_value @ Value::Object(_)), Value::Object(_)) => {
                        deep_merge(base_value, override_value)
                    }
                    _ => override_value.clone(),
                };
                merged.insert(key.clone(), combined);
            }
            Value::Object(merged)
        }
        // A non-object on either side means the override wins outright
        _ => overrides.clone(),
    }
}
