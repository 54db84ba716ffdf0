//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for parsing into and serializing from a [`Delta`], the
//! hub every conversion passes through.

use crate::delta::Delta;
use crate::error::FormatError;
use crate::ir::IntermediateOptions;

/// Settings shared by the built-in formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// How deltas are grouped into blocks before rendering.
    pub intermediate: IntermediateOptions,
    /// Pretty-print JSON output (delta and NPF).
    pub pretty_json: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            intermediate: IntermediateOptions::default(),
            pretty_json: true,
        }
    }
}

/// Trait for document formats
///
/// Implementors provide conversion between a string representation and a [`Delta`].
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, delta: &Delta) -> Result<String, FormatError> {
///         Ok(delta_babel::delta_to_text(delta))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "delta", "html", "npf")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions (without the dot) that map to this format
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Delta)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Delta → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into a Delta
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse(&self, _source: &str) -> Result<Delta, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a Delta into source text
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(&self, _delta: &Delta) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
