//! Format implementations
//!
//! This module contains all format implementations that convert between
//! deltas and their text representations.

pub mod delta;
pub mod html;
pub mod npf;
pub mod ssml;
pub mod text;

pub use delta::DeltaFormat;
pub use html::HtmlFormat;
pub use npf::NpfFormat;
pub use ssml::SsmlFormat;
pub use text::TextFormat;
