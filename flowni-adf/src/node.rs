//! Typed views over the untyped JSON document tree.
//!
//! Documents arrive as arbitrary JSON, so the tree itself stays a
//! [`serde_json::Value`]. What the rules need is a reliable way to ask "what
//! kind of node is this", which [`NodeKind`] and [`MarkKind`] answer by parsing
//! the `type` tag once into a closed enum. Rules then `match` on the enum
//! instead of probing strings.

use serde_json::{Map, Value};

/// A document node: a JSON object carrying at least a `type` tag.
pub type Node = Map<String, Value>;

/// Node tags that the rule table knows about.
///
/// Anything else, including objects without a `type` string (for example
/// `attrs` maps the walker descends into), is [`NodeKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    BulletList,
    OrderedList,
    Text,
    CodeBlock,
    Paragraph,
    HorizontalRule,
    Emoji,
    TableHeader,
    TableCell,
    Image,
    File,
    Youtube,
    Iframely,
    Figma,
    Other,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "bulletList" => NodeKind::BulletList,
            "orderedList" => NodeKind::OrderedList,
            "text" => NodeKind::Text,
            "codeBlock" => NodeKind::CodeBlock,
            "paragraph" => NodeKind::Paragraph,
            "horizontalRule" => NodeKind::HorizontalRule,
            "emoji" => NodeKind::Emoji,
            "tableHeader" => NodeKind::TableHeader,
            "tableCell" => NodeKind::TableCell,
            "image" => NodeKind::Image,
            "file" => NodeKind::File,
            "youtube" => NodeKind::Youtube,
            "iframely" => NodeKind::Iframely,
            "figma" => NodeKind::Figma,
            _ => NodeKind::Other,
        }
    }

    /// Classify a node by its `type` field.
    pub fn of(node: &Node) -> Self {
        node_type(node).map_or(NodeKind::Other, NodeKind::from_tag)
    }

    /// Embedded media that ADF has no equivalent for.
    pub fn is_embed(self) -> bool {
        matches!(
            self,
            NodeKind::Image | NodeKind::File | NodeKind::Youtube | NodeKind::Iframely | NodeKind::Figma
        )
    }

    pub fn is_table_cell(self) -> bool {
        matches!(self, NodeKind::TableHeader | NodeKind::TableCell)
    }
}

/// Mark tags that the rule table rewrites or inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    Bold,
    Italic,
    Superscript,
    Subscript,
    TextColor,
    Link,
    Other,
}

impl MarkKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "bold" => MarkKind::Bold,
            "italic" => MarkKind::Italic,
            "superscript" => MarkKind::Superscript,
            "subscript" => MarkKind::Subscript,
            "textColor" => MarkKind::TextColor,
            "link" => MarkKind::Link,
            _ => MarkKind::Other,
        }
    }

    /// Classify a mark value. Non-object marks are [`MarkKind::Other`].
    pub fn of(mark: &Value) -> Self {
        mark.as_object()
            .and_then(node_type)
            .map_or(MarkKind::Other, MarkKind::from_tag)
    }
}

/// The `type` tag of a node, if it is a string.
pub fn node_type(node: &Node) -> Option<&str> {
    node.get("type").and_then(Value::as_str)
}

/// The `attrs` map of a node, if present and an object.
pub fn attrs(node: &Node) -> Option<&Node> {
    node.get("attrs").and_then(Value::as_object)
}

pub fn attrs_mut(node: &mut Node) -> Option<&mut Node> {
    node.get_mut("attrs").and_then(Value::as_object_mut)
}

/// The `marks` array of a node, if present and an array.
pub fn marks(node: &Node) -> Option<&Vec<Value>> {
    node.get("marks").and_then(Value::as_array)
}

/// Build a node from a `type` tag alone.
pub fn bare(tag: &str) -> Node {
    let mut node = Node::new();
    node.insert("type".to_string(), Value::String(tag.to_string()));
    node
}
