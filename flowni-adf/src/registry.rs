//! Rule registry
//!
//! Holds the rule table in application order and folds it over a node. The
//! table is built once per converter; rules can be replaced or removed by name
//! before the first conversion.

use crate::error::ConvertError;
use crate::node::{Node, NodeKind};
use crate::options::ConvertOptions;
use crate::rules::{self, NodeRule};
use tracing::trace;

/// Ordered table of node rules
///
/// # Examples
///
/// ```ignore
/// let mut registry = RuleRegistry::with_defaults();
/// registry.remove("emoji-shortname")?;
///
/// let node = registry.apply(node);
/// ```
pub struct RuleRegistry {
    rules: Vec<Box<dyn NodeRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        RuleRegistry { rules: Vec::new() }
    }

    /// Register a rule
    ///
    /// A rule with the same name is replaced in place, keeping its position in
    /// the table. New rules run after every existing one.
    pub fn register<R: NodeRule + 'static>(&mut self, rule: R) {
        self.register_boxed(Box::new(rule));
    }

    pub fn register_boxed(&mut self, rule: Box<dyn NodeRule>) {
        match self.position(rule.name()) {
            Some(index) => self.rules[index] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by name
    pub fn get(&self, name: &str) -> Result<&dyn NodeRule, ConvertError> {
        self.position(name)
            .map(|index| self.rules[index].as_ref())
            .ok_or_else(|| ConvertError::RuleNotFound(name.to_string()))
    }

    /// Check if a rule exists
    pub fn has(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove a rule by name
    pub fn remove(&mut self, name: &str) -> Result<Box<dyn NodeRule>, ConvertError> {
        self.position(name)
            .map(|index| self.rules.remove(index))
            .ok_or_else(|| ConvertError::RuleNotFound(name.to_string()))
    }

    /// Rule names in application order
    pub fn list_rules(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.name().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn NodeRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule over `node`, in order.
    ///
    /// Equivalent to `ruleN(...rule2(rule1(node)))`. A deletion stops the fold,
    /// since no rule can bring a node back.
    pub fn apply(&self, node: Node) -> Option<Node> {
        self.apply_observed(node, &mut |_, _| {})
    }

    /// Like [`RuleRegistry::apply`], reporting each rule that fired.
    ///
    /// `observer` receives the rule name and whether the rule deleted the node.
    pub fn apply_observed<F>(&self, node: Node, observer: &mut F) -> Option<Node>
    where
        F: FnMut(&str, bool),
    {
        let mut current = node;
        for rule in &self.rules {
            if !rule.matches(&current) {
                continue;
            }
            let kind = NodeKind::of(&current);
            match rule.rewrite(current) {
                Some(next) => {
                    trace!(rule = rule.name(), ?kind, "rewrote node");
                    observer(rule.name(), false);
                    current = next;
                }
                None => {
                    trace!(rule = rule.name(), ?kind, "deleted node");
                    observer(rule.name(), true);
                    return None;
                }
            }
        }
        Some(current)
    }

    /// Create a registry with the default rule table
    pub fn with_defaults() -> Self {
        Self::with_code_language(rules::DEFAULT_CODE_LANGUAGE)
    }

    /// Default rule table with a different fallback code block language
    pub fn with_code_language(language: &str) -> Self {
        RuleRegistry {
            rules: rules::default_rules(language),
        }
    }

    /// Default rule table shaped by `options`
    ///
    /// Fails if `options.disabled_rules` names a rule that does not exist, so
    /// a typo in configuration is not silently ignored.
    pub fn with_options(options: &ConvertOptions) -> Result<Self, ConvertError> {
        let mut registry = Self::with_code_language(&options.code_language);
        for name in &options.disabled_rules {
            registry.remove(name)?;
        }
        Ok(registry)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|r| r.name() == name)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
