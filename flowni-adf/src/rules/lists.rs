//! List attribute rules.
//!
//! The editor stores presentation hints on lists (`tight`, a `start` number on
//! ordered lists). ADF bullet lists take no attributes at all, and ordered
//! lists call their first number `order`.

use super::NodeRule;
use crate::node::{attrs, attrs_mut, Node, NodeKind};

/// Removes `attrs` from bullet lists.
pub struct BulletListAttrs;

impl NodeRule for BulletListAttrs {
    fn name(&self) -> &str {
        "bullet-list-attrs"
    }

    fn description(&self) -> &str {
        "Remove attributes from bullet lists"
    }

    fn matches(&self, node: &Node) -> bool {
        NodeKind::of(node) == NodeKind::BulletList && node.contains_key("attrs")
    }

    fn rewrite(&self, mut node: Node) -> Option<Node> {
        node.shift_remove("attrs");
        Some(node)
    }
}

/// Drops `tight` and renames `start` to `order` on ordered lists.
pub struct OrderedListAttrs;

impl NodeRule for OrderedListAttrs {
    fn name(&self) -> &str {
        "ordered-list-attrs"
    }

    fn description(&self) -> &str {
        "Drop 'tight' and rename 'start' to 'order' on ordered lists"
    }

    fn matches(&self, node: &Node) -> bool {
        NodeKind::of(node) == NodeKind::OrderedList
            && attrs(node).is_some_and(|a| a.contains_key("tight") || a.contains_key("start"))
    }

    fn rewrite(&self, mut node: Node) -> Option<Node> {
        if let Some(attrs) = attrs_mut(&mut node) {
            attrs.shift_remove("tight");
            if let Some(start) = attrs.shift_remove("start") {
                attrs.insert("order".to_string(), start);
            }
        }
        Some(node)
    }
}
