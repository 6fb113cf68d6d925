//! Node rewrite rules
//!
//! Each rule targets one node tag (or a small family of tags) and is
//! independent of every other rule: it never assumes another rule has already
//! touched the node, and its output never triggers a different rule that the
//! input did not already trigger. The registry relies on this to run the whole
//! table as one composed function per node.
//!
//! Rules are grouped by the part of the document they concern:
//!
//! - `lists`: bullet and ordered list attributes
//! - `marks`: inline text marks, including links
//! - `blocks`: code blocks, embeds, horizontal rules, empty paragraphs
//! - `tables`: header and cell column widths
//! - `emoji`: emoji short names

pub mod blocks;
pub mod emoji;
pub mod lists;
pub mod marks;
pub mod tables;

use crate::node::Node;

pub use blocks::{CodeBlockLanguage, EmptyParagraph, HorizontalRule, IncompatibleEmbeds};
pub use emoji::EmojiShortName;
pub use lists::{BulletListAttrs, OrderedListAttrs};
pub use marks::{LinkMarkAttrs, TextMarks};
pub use tables::TableColwidth;

/// Language assigned to code blocks that do not declare one.
pub const DEFAULT_CODE_LANGUAGE: &str = "javascript";

/// A single node-level rewrite
///
/// Implementors say which nodes they care about ([`NodeRule::matches`]) and how
/// to rewrite them ([`NodeRule::rewrite`]). Returning `None` from `rewrite`
/// deletes the node.
///
/// # Examples
///
/// ```ignore
/// struct DropNotes;
///
/// impl NodeRule for DropNotes {
///     fn name(&self) -> &str {
///         "drop-notes"
///     }
///
///     fn matches(&self, node: &Node) -> bool {
///         node_type(node) == Some("note")
///     }
///
///     fn rewrite(&self, _node: Node) -> Option<Node> {
///         None
///     }
/// }
/// ```
pub trait NodeRule: Send + Sync {
    /// Stable, kebab-case name used in config and reports
    fn name(&self) -> &str;

    /// One-line description shown by `--list-rules`
    fn description(&self) -> &str {
        ""
    }

    /// Whether this rule would change `node`
    fn matches(&self, node: &Node) -> bool;

    /// Rewrite a node this rule matches
    ///
    /// Only called when [`NodeRule::matches`] returned true. Must not panic on
    /// odd shapes; anything unexpected is left as it is.
    fn rewrite(&self, node: Node) -> Option<Node>;

    /// Rewrite `node` if it matches, otherwise hand it back untouched.
    fn apply(&self, node: Node) -> Option<Node> {
        if self.matches(&node) {
            self.rewrite(node)
        } else {
            Some(node)
        }
    }
}

/// The full rule table in application order.
pub fn default_rules(code_language: &str) -> Vec<Box<dyn NodeRule>> {
    vec![
        Box::new(BulletListAttrs),
        Box::new(OrderedListAttrs),
        Box::new(TextMarks),
        Box::new(CodeBlockLanguage::new(code_language)),
        Box::new(IncompatibleEmbeds),
        Box::new(TableColwidth),
        Box::new(HorizontalRule),
        Box::new(EmptyParagraph),
        Box::new(LinkMarkAttrs),
        Box::new(EmojiShortName),
    ]
}
