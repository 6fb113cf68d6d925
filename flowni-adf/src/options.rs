//! Conversion options shared by the library, config loader and CLI.

use crate::rules::DEFAULT_CODE_LANGUAGE;

/// Knobs for a conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Language assigned to code blocks whose language is `null`
    pub code_language: String,
    /// Rule names to leave out of the table
    pub disabled_rules: Vec<String>,
    /// Wrap the result as `{"version": 1, ...}` for the Jira API
    pub envelope: bool,
    /// Pretty-print serialized output
    pub pretty: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            code_language: DEFAULT_CODE_LANGUAGE.to_string(),
            disabled_rules: Vec::new(),
            envelope: true,
            pretty: true,
        }
    }
}
