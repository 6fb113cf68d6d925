//! Recursive descent over a JSON document tree.
//!
//! The walker knows nothing about ADF. It hands every object it meets to a
//! modifier before looking at that object's fields, so a modifier can replace
//! or delete a node before its children are visited. Deletion is expressed as
//! `None` and becomes:
//!
//! - an excised element, when the node sat in an array (`content`, `marks`)
//! - a removed field, when the node was a field value
//! - `Value::Null`, when the node was the root
//!
//! Only `null` counts as deleted. `false`, `0` and `""` are ordinary values and
//! survive, so zero column widths and empty text are never dropped by accident.

use crate::node::Node;
use serde_json::Value;

/// Apply `modifier` to every object in `value`, top-down.
///
/// Scalars pass through. Arrays are walked element by element and lose any
/// element that ends up `null`. Objects are offered to `modifier` first; if it
/// keeps the node, each field value is walked in turn and fields that end up
/// `null` are dropped.
pub fn apply_modifier<F>(value: Value, modifier: &mut F) -> Value
where
    F: FnMut(Node) -> Option<Node>,
{
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| apply_modifier(item, modifier))
                .filter(|item| !item.is_null())
                .collect(),
        ),
        Value::Object(node) => match modifier(node) {
            Some(node) => Value::Object(
                node.into_iter()
                    .map(|(key, field)| (key, apply_modifier(field, modifier)))
                    .filter(|(_, field)| !field.is_null())
                    .collect(),
            ),
            None => Value::Null,
        },
        scalar => scalar,
    }
}
