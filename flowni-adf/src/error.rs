//! Error types for conversion operations
//!
//! The tree rewrite itself is total. Errors only come from the edges: reading
//! JSON text, writing it back out, and naming rules that do not exist.

use std::fmt;

/// Errors that can occur around a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Rule not found in registry
    RuleNotFound(String),
    /// Input text is not a JSON document
    ParseError(String),
    /// Error while writing the converted document
    SerializationError(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::RuleNotFound(name) => write!(f, "Rule '{name}' not found"),
            ConvertError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConvertError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
