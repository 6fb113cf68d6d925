//! Shared configuration loader for the flowni ADF toolchain.
//!
//! `defaults/flowni.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`FlowniConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use flowni_adf::ConvertOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/flowni.default.toml");

/// Top-level configuration consumed by flowni applications.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowniConfig {
    pub convert: ConvertConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Rule table knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_code_language: String,
    #[serde(default)]
    pub disabled_rules: Vec<String>,
}

/// How converted documents are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub envelope: bool,
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LogFormat {
    #[serde(rename = "human")]
    Human,
    #[serde(rename = "json")]
    Json,
}

impl FlowniConfig {
    /// Library options for this configuration.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            code_language: self.convert.default_code_language.clone(),
            disabled_rules: self.convert.disabled_rules.clone(),
            envelope: self.output.envelope,
            pretty: self.output.pretty,
        }
    }
}

impl From<&FlowniConfig> for ConvertOptions {
    fn from(config: &FlowniConfig) -> Self {
        config.convert_options()
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<FlowniConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<FlowniConfig, ConfigError> {
    Loader::new().build()
}
