//! Block-level rules: code blocks, embeds, rules and empty paragraphs.

use super::{NodeRule, DEFAULT_CODE_LANGUAGE};
use crate::node::{attrs, attrs_mut, bare, Node, NodeKind};
use serde_json::Value;

/// Gives code blocks with `attrs.language: null` a concrete language.
///
/// Jira renders a code block without a language as plain text and rejects an
/// explicit `null`. A missing `language` key is left alone.
pub struct CodeBlockLanguage {
    language: String,
}

impl CodeBlockLanguage {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for CodeBlockLanguage {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LANGUAGE)
    }
}

impl NodeRule for CodeBlockLanguage {
    fn name(&self) -> &str {
        "code-block-language"
    }

    fn description(&self) -> &str {
        "Default a null code block language"
    }

    fn matches(&self, node: &Node) -> bool {
        NodeKind::of(node) == NodeKind::CodeBlock
            && attrs(node).and_then(|a| a.get("language")) == Some(&Value::Null)
    }

    fn rewrite(&self, mut node: Node) -> Option<Node> {
        if let Some(attrs) = attrs_mut(&mut node) {
            attrs.insert(
                "language".to_string(),
                Value::String(self.language.clone()),
            );
        }
        Some(node)
    }
}

/// Deletes media embeds that ADF cannot represent inline.
///
/// Covers `image`, `file`, `youtube`, `iframely` and `figma`. The walker then
/// removes the hole from the parent's `content`.
pub struct IncompatibleEmbeds;

impl NodeRule for IncompatibleEmbeds {
    fn name(&self) -> &str {
        "incompatible-embeds"
    }

    fn description(&self) -> &str {
        "Delete image, file, youtube, iframely and figma embeds"
    }

    fn matches(&self, node: &Node) -> bool {
        NodeKind::of(node).is_embed()
    }

    fn rewrite(&self, _node: Node) -> Option<Node> {
        None
    }
}

/// Replaces `horizontalRule` with a bare `{"type": "rule"}`.
pub struct HorizontalRule;

impl NodeRule for HorizontalRule {
    fn name(&self) -> &str {
        "horizontal-rule"
    }

    fn description(&self) -> &str {
        "Replace horizontal rules with a bare ADF rule"
    }

    fn matches(&self, node: &Node) -> bool {
        NodeKind::of(node) == NodeKind::HorizontalRule
    }

    fn rewrite(&self, _node: Node) -> Option<Node> {
        Some(bare("rule"))
    }
}

/// Deletes paragraphs that carry nothing but their `type`.
///
/// A paragraph with an empty `content` array is kept.
pub struct EmptyParagraph;

impl NodeRule for EmptyParagraph {
    fn name(&self) -> &str {
        "empty-paragraph"
    }

    fn description(&self) -> &str {
        "Delete paragraphs with no fields besides their type"
    }

    fn matches(&self, node: &Node) -> bool {
        NodeKind::of(node) == NodeKind::Paragraph && node.len() == 1
    }

    fn rewrite(&self, _node: Node) -> Option<Node> {
        None
    }
}
