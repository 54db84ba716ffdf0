//! Shared configuration loader for the delta toolchain.
//!
//! `defaults/delta.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`DeltaConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use delta_babel::{FormatOptions, IntermediateOptions};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/delta.default.toml");

/// Top-level configuration consumed by delta applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DeltaConfig {
    pub intermediate: IntermediateConfig,
    pub output: OutputConfig,
}

/// Mirrors [`IntermediateOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct IntermediateConfig {
    pub merge_adjacent_code_blocks: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty_json: bool,
}

impl From<&IntermediateConfig> for IntermediateOptions {
    fn from(config: &IntermediateConfig) -> Self {
        IntermediateOptions {
            merge_adjacent_code_blocks: config.merge_adjacent_code_blocks,
        }
    }
}

impl From<&DeltaConfig> for FormatOptions {
    fn from(config: &DeltaConfig) -> Self {
        FormatOptions {
            intermediate: (&config.intermediate).into(),
            pretty_json: config.output.pretty_json,
        }
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
    pub fn build(self) -> Result<DeltaConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DeltaConfig, ConfigError> {
    Loader::new().build()
}
