//! Inline mark rules for text nodes.
//!
//! ADF names its emphasis marks differently from the editor, folds super- and
//! subscript into one `subsup` mark, and rejects both empty `marks` arrays and
//! the HTML transport attributes the editor puts on links.

use super::NodeRule;
use crate::node::{marks, MarkKind, Node, NodeKind};
use serde_json::{json, Map, Value};

/// Link attributes that only make sense in HTML.
const LINK_TRANSPORT_ATTRS: [&str; 3] = ["rel", "class", "target"];

/// Renames emphasis marks and drops empty colour marks.
///
/// - `bold` → `strong`, `italic` → `em`
/// - `superscript` / `subscript` → `subsup` with `attrs.type` `sup` / `sub`
/// - `textColor` with an empty `attrs` object is dropped
///
/// Other marks keep their place. If no mark is left, `marks` is removed.
pub struct TextMarks;

impl NodeRule for TextMarks {
    fn name(&self) -> &str {
        "text-marks"
    }

    fn description(&self) -> &str {
        "Rename emphasis marks, fold sub/superscript into subsup, drop empty colours"
    }

    fn matches(&self, node: &Node) -> bool {
        NodeKind::of(node) == NodeKind::Text
            && marks(node).is_some_and(|m| m.is_empty() || m.iter().any(needs_rewrite))
    }

    fn rewrite(&self, mut node: Node) -> Option<Node> {
        let taken = match node.get_mut("marks") {
            Some(Value::Array(list)) => std::mem::take(list),
            _ => return Some(node),
        };
        let rewritten = taken.into_iter().filter_map(rewrite_mark).collect();
        store_marks(&mut node, rewritten);
        Some(node)
    }
}

/// Strips `rel`, `class` and `target` from link marks.
pub struct LinkMarkAttrs;

impl NodeRule for LinkMarkAttrs {
    fn name(&self) -> &str {
        "link-mark-attrs"
    }

    fn description(&self) -> &str {
        "Strip rel, class and target from link marks"
    }

    fn matches(&self, node: &Node) -> bool {
        NodeKind::of(node) == NodeKind::Text
            && marks(node).is_some_and(|m| m.iter().any(has_transport_attrs))
    }

    fn rewrite(&self, mut node: Node) -> Option<Node> {
        let taken = match node.get_mut("marks") {
            Some(Value::Array(list)) => std::mem::take(list),
            _ => return Some(node),
        };
        let rewritten = taken
            .into_iter()
            .map(|mut mark| {
                if MarkKind::of(&mark) == MarkKind::Link {
                    if let Some(attrs) = mark.get_mut("attrs").and_then(Value::as_object_mut) {
                        for key in LINK_TRANSPORT_ATTRS {
                            attrs.shift_remove(key);
                        }
                    }
                }
                mark
            })
            .collect();
        store_marks(&mut node, rewritten);
        Some(node)
    }
}

fn needs_rewrite(mark: &Value) -> bool {
    match MarkKind::of(mark) {
        MarkKind::Bold | MarkKind::Italic | MarkKind::Superscript | MarkKind::Subscript => true,
        MarkKind::TextColor => has_empty_attrs(mark),
        MarkKind::Link | MarkKind::Other => false,
    }
}

fn rewrite_mark(mark: Value) -> Option<Value> {
    match MarkKind::of(&mark) {
        MarkKind::Bold => Some(retag(mark, "strong")),
        MarkKind::Italic => Some(retag(mark, "em")),
        MarkKind::Superscript => Some(json!({"type": "subsup", "attrs": {"type": "sup"}})),
        MarkKind::Subscript => Some(json!({"type": "subsup", "attrs": {"type": "sub"}})),
        MarkKind::TextColor if has_empty_attrs(&mark) => None,
        _ => Some(mark),
    }
}

fn retag(mut mark: Value, tag: &str) -> Value {
    if let Some(fields) = mark.as_object_mut() {
        fields.insert("type".to_string(), Value::String(tag.to_string()));
    }
    mark
}

fn has_empty_attrs(mark: &Value) -> bool {
    mark.get("attrs")
        .and_then(Value::as_object)
        .is_some_and(Map::is_empty)
}

fn has_transport_attrs(mark: &Value) -> bool {
    MarkKind::of(mark) == MarkKind::Link
        && mark
            .get("attrs")
            .and_then(Value::as_object)
            .is_some_and(|attrs| LINK_TRANSPORT_ATTRS.iter().any(|key| attrs.contains_key(*key)))
}

/// ADF rejects `marks: []`, so an emptied list removes the field.
fn store_marks(node: &mut Node, marks: Vec<Value>) {
    if marks.is_empty() {
        node.shift_remove("marks");
    } else {
        node.insert("marks".to_string(), Value::Array(marks));
    }
}
