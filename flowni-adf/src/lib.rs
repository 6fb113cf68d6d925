//! Editor documents to Atlassian Document Format
//!
//!     The product's rich-text editor stores documents as a ProseMirror-style JSON tree. Jira
//!     accepts issue descriptions as ADF, which is close to that tree but not identical: some
//!     nodes and marks have other names, some attributes are forbidden, some embeds have no ADF
//!     equivalent at all. This crate rewrites the former into the latter.
//!
//!     This is a pure lib: no I/O, no network, no environment. Sending the result to Jira is the
//!     caller's job.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── node.rs                 # Node alias, NodeKind / MarkKind tag views
//!     ├── walker.rs               # Generic recursive descent with deletion
//!     ├── rules
//!     │   ├── mod.rs              # NodeRule trait, default rule table
//!     │   ├── lists.rs
//!     │   ├── marks.rs
//!     │   ├── blocks.rs
//!     │   ├── tables.rs
//!     │   └── emoji.rs
//!     ├── registry.rs             # RuleRegistry, ordered fold over the table
//!     ├── options.rs              # ConvertOptions
//!     └── pipeline.rs             # Converter, envelope, text in / text out
//!
//! Core Algorithm
//!
//!     The walker visits the tree top-down. Each object is first handed to the whole rule table,
//!     folded left to right, and only then are its field values visited. A rule can therefore
//!     replace a node (the replacement's fields are what get visited) or delete it (the node is
//!     excised from its parent array, or dropped from its parent object).
//!
//!     Rules are independent: none assumes another has run, and none produces output that newly
//!     triggers a different rule. That makes the order of the table irrelevant to the result,
//!     which the rule tests check.
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── pipeline                # Document-level behavior and properties
//!     ├── rules                   # One file per rule family, through the public API
//!     └── fixtures                # <name>.json input, <name>.adf.json expected output
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.

pub mod error;
pub mod node;
pub mod options;
pub mod pipeline;
pub mod registry;
pub mod rules;
pub mod walker;

pub use error::ConvertError;
pub use node::{MarkKind, Node, NodeKind};
pub use options::ConvertOptions;
pub use pipeline::{convert_str, convert_to_adf, to_adf_document, ConversionReport, Converter};
pub use registry::RuleRegistry;
pub use rules::NodeRule;
