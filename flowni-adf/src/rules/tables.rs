//! Table cell rules.

use super::NodeRule;
use crate::node::{attrs, attrs_mut, Node, NodeKind};
use serde_json::Value;

/// Turns `attrs.colwidth: null` on header and body cells into `[]`.
pub struct TableColwidth;

impl NodeRule for TableColwidth {
    fn name(&self) -> &str {
        "table-colwidth"
    }

    fn description(&self) -> &str {
        "Replace a null cell colwidth with an empty list"
    }

    fn matches(&self, node: &Node) -> bool {
        NodeKind::of(node).is_table_cell()
            && attrs(node).and_then(|a| a.get("colwidth")) == Some(&Value::Null)
    }

    fn rewrite(&self, mut node: Node) -> Option<Node> {
        if let Some(attrs) = attrs_mut(&mut node) {
            attrs.insert("colwidth".to_string(), Value::Array(Vec::new()));
        }
        Some(node)
    }
}
