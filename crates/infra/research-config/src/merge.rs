//! JSON merge patch (RFC 7396) used to layer config files.
//!
//! Objects merge key by key, `null` removes a key, anything else replaces.

use serde_json::Value;

/// Layer `patch` over `base`.
///
/// ```
/// use serde_json::json;
/// use research_config::merge::merge_patch;
///
/// let global = json!({"server": {"host": "0.0.0.0", "port": 8000}});
/// let local = json!({"server": {"port": 9000}});
/// assert_eq!(
///     merge_patch(global, local),
///     json!({"server": {"host": "0.0.0.0", "port": 9000}})
/// );
/// ```
pub fn merge_patch(base: Value, patch: Value) -> Value {
    let Value::Object(patch_map) = patch else {
        return patch;
    };

    let mut base_map = match base {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };

    for (key, value) in patch_map {
        if value.is_null() {
            base_map.remove(&key);
        } else {
            let current = base_map.remove(&key).unwrap_or(Value::Null);
            base_map.insert(key, merge_patch(current, value));
        }
    }

    Value::Object(base_map)
}
