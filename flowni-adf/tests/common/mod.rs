//! Shared helpers for integration tests.

use serde_json::Value;
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> Value {
    let path = fixture_path(name);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("invalid JSON in {name}: {e}"))
}

/// Collect every `type` tag in the tree, depth first.
pub fn collect_types(value: &Value, types: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(tag)) = map.get("type") {
                types.push(tag.clone());
            }
            for field in map.values() {
                collect_types(field, types);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_types(item, types);
            }
        }
        _ => {}
    }
}

/// True if any array in the tree holds a `null`.
pub fn has_null_holes(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.values().any(has_null_holes),
        Value::Array(items) => items.iter().any(|i| i.is_null() || has_null_holes(i)),
        _ => false,
    }
}
