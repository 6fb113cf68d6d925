//! Conversion pipeline
//!
//! Ties the walker to a rule registry. One conversion is one walk; every object
//! in the document is offered to the whole rule table before its fields are
//! visited.

use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::registry::RuleRegistry;
use crate::walker::apply_modifier;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

/// ADF version stamped on every envelope.
pub const ADF_VERSION: u64 = 1;

/// What a conversion did to a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Objects offered to the rule table (nodes, marks and attribute maps)
    pub objects_visited: usize,
    /// Nodes removed by a rule
    pub nodes_deleted: usize,
    /// Rule name → number of nodes it rewrote or deleted
    pub rewrites: BTreeMap<String, usize>,
}

impl ConversionReport {
    /// Total number of rule firings.
    pub fn total_rewrites(&self) -> usize {
        self.rewrites.values().sum()
    }

    pub fn count(&self, rule: &str) -> usize {
        self.rewrites.get(rule).copied().unwrap_or(0)
    }
}

/// Converts editor documents to ADF with a fixed rule table.
pub struct Converter {
    registry: RuleRegistry,
}

impl Converter {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Build a converter whose rule table follows `options`.
    pub fn from_options(options: &ConvertOptions) -> Result<Self, ConvertError> {
        RuleRegistry::with_options(options).map(Self::new)
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Rewrite `document` into ADF.
    ///
    /// Never fails. Scalars come back unchanged; a root that a rule deletes
    /// comes back as `null`.
    pub fn convert(&self, document: Value) -> Value {
        self.convert_with_report(document).0
    }

    /// Rewrite `document` and count what each rule did.
    pub fn convert_with_report(&self, document: Value) -> (Value, ConversionReport) {
        let mut report = ConversionReport::default();
        let converted = apply_modifier(document, &mut |node| {
            report.objects_visited += 1;
            self.registry.apply_observed(node, &mut |rule, deleted| {
                *report.rewrites.entry(rule.to_string()).or_insert(0) += 1;
                if deleted {
                    report.nodes_deleted += 1;
                }
            })
        });
        debug!(
            objects = report.objects_visited,
            rewrites = report.total_rewrites(),
            deleted = report.nodes_deleted,
            "converted document to ADF"
        );
        (converted, report)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(RuleRegistry::with_defaults())
    }
}

/// Rewrite `document` into ADF using the default rule table.
pub fn convert_to_adf(document: Value) -> Value {
    static DEFAULT: OnceLock<Converter> = OnceLock::new();
    DEFAULT.get_or_init(Converter::default).convert(document)
}

/// Wrap a converted document for the Jira REST API.
///
/// Produces `{"version": 1, ...converted}`. Fields of `converted` follow the
/// version stamp and win on collision; anything that is not an object
/// contributes no fields.
pub fn to_adf_document(converted: Value) -> Value {
    let mut envelope = Map::new();
    envelope.insert("version".to_string(), Value::from(ADF_VERSION));
    if let Value::Object(fields) = converted {
        envelope.extend(fields);
    }
    Value::Object(envelope)
}

/// Parse JSON text, convert it and serialize the result.
///
/// Honors `options.envelope` and `options.pretty` in addition to the rule
/// table options.
pub fn convert_str(source: &str, options: &ConvertOptions) -> Result<String, ConvertError> {
    let converter = Converter::from_options(options)?;
    let document: Value =
        serde_json::from_str(source).map_err(|e| ConvertError::ParseError(e.to_string()))?;
    let converted = converter.convert(document);
    render(converted, options)
}

/// Serialize a converted document according to `options`.
pub fn render(converted: Value, options: &ConvertOptions) -> Result<String, ConvertError> {
    let output = if options.envelope {
        to_adf_document(converted)
    } else {
        converted
    };
    let text = if options.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };
    text.map_err(|e| ConvertError::SerializationError(e.to_string()))
}
