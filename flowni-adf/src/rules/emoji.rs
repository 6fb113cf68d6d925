//! Emoji rule.

use super::NodeRule;
use crate::node::{attrs, attrs_mut, Node, NodeKind};
use serde_json::Value;

/// Replaces `attrs.name` with an ADF `shortName` of the form `:name:`.
pub struct EmojiShortName;

impl NodeRule for EmojiShortName {
    fn name(&self) -> &str {
        "emoji-shortname"
    }

    fn description(&self) -> &str {
        "Replace emoji 'name' with a ':name:' shortName"
    }

    fn matches(&self, node: &Node) -> bool {
        NodeKind::of(node) == NodeKind::Emoji
            && attrs(node).is_some_and(|a| a.get("name").is_some_and(Value::is_string))
    }

    fn rewrite(&self, mut node: Node) -> Option<Node> {
        if let Some(attrs) = attrs_mut(&mut node) {
            if let Some(Value::String(name)) = attrs.shift_remove("name") {
                attrs.insert("shortName".to_string(), Value::String(format!(":{name}:")));
            }
        }
        Some(node)
    }
}
