//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name, or detected from a file extension.

use crate::delta::Delta;
use crate::error::FormatError;
use crate::format::{Format, FormatOptions};
use crate::formats::{DeltaFormat, HtmlFormat, NpfFormat, SsmlFormat, TextFormat};
use std::collections::HashMap;
use std::path::Path;

/// Registry of document formats
///
/// Provides a centralized registry for all available formats.
/// Formats can be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let html = registry.convert("Hello", "text", "html")?;
/// assert_eq!(html, "<p>Hello</p>");
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Find the format claiming the extension of `path`
    pub fn detect_format(&self, path: &Path) -> Option<&dyn Format> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        self.formats
            .values()
            .map(|f| f.as_ref())
            .find(|f| f.file_extensions().contains(&extension.as_str()))
    }

    /// Parse source text using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Delta, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support parsing",
                format
            )));
        }
        fmt.parse(source)
    }

    /// Serialize a delta using the specified format
    pub fn serialize(&self, delta: &Delta, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(delta)
    }

    /// Parse with one format and serialize with another
    pub fn convert(&self, source: &str, from: &str, to: &str) -> Result<String, FormatError> {
        // Fail on the target before doing any work.
        self.get(to)?;
        let delta = self.parse(source, from)?;
        tracing::debug!(from, to, ops = delta.ops.len(), "converting");
        self.serialize(&delta, to)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        Self::with_options(FormatOptions::default())
    }

    /// Create a registry with the built-in formats configured by `options`
    pub fn with_options(options: FormatOptions) -> Self {
        let mut registry = Self::new();

        // Register built-in formats
        registry.register(DeltaFormat::new(options.pretty_json));
        registry.register(TextFormat);
        registry.register(HtmlFormat::new(options.intermediate));
        registry.register(NpfFormat::new(options.intermediate, options.pretty_json));
        registry.register(SsmlFormat::new(options.intermediate));

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
