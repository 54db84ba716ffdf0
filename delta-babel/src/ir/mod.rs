//! Intermediate Representation (IR) for delta documents.
//!
//! A delta keeps block formatting on trailing newlines, which is awkward for
//! anything that has to open a tag before it writes the content. The IR groups
//! the flat operations into blocks, each owning its inline runs, with the
//! block's formatting collected onto the block itself.
//!
//! # Design Philosophy
//!
//! - **Flat**: a document is a sequence of blocks; list nesting and wrappers are
//!   the renderers' business
//! - **Lossless for rendering**: every attribute from the delta survives, on the
//!   block (from the newline) or on the inline (from the text)
//! - **Read-only**: renderers consume the IR, nothing mutates it after the
//!   conversion finishes
//!
//! # Modules
//!
//! - [`nodes`]: `Block` and `Inline`
//!
//! The delta → IR conversion itself lives in
//! [`crate::mappings::flat_to_nested`].

pub mod nodes;

pub use crate::mappings::flat_to_nested::{delta_to_intermediate, IntermediateOptions};
pub use nodes::{Block, Inline};
