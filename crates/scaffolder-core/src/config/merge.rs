//! Right-biased merge for JSON config objects

use serde_json::Value;

/// Merge `fragment` into a copy of `base`.
///
/// Top-level keys of `fragment` win. Where both sides hold an object the
/// result is the key union with `fragment` winning ties (one level only).
/// Where both sides hold an array, `fragment` items not already present are
/// appended. A non-object `base` is replaced by `fragment` wholesale.
pub fn merge_config(base: &Value, fragment: &Value) -> Value {
    let (Value::Object(base_map), Value::Object(fragment_map)) = (base, fragment) else {
        return fragment.clone();
    };

    let mut merged = base_map.clone();
    for (key, incoming) in fragment_map {
        let value = match (merged.get(key), incoming) {
            (Some(Value::Object(existing)), Value::Object(additions)) => {
                let mut union = existing.clone();
                for (name, v) in additions {
                    union.insert(name.clone(), v.clone());
                }
                Value::Object(union)
            }
            (Some(Value::Array(existing)), Value::Array(additions)) => {
                let mut items = existing.clone();
                for item in additions {
                    if !items.contains(item) {
                        items.push(item.clone());
                    }
                }
                Value::Array(items)
            }
            _ => incoming.clone(),
        };
        merged.insert(key.clone(), value);
    }

    Value::Object(merged)
}
