//! Helpers shared by more than one format.

pub mod escape;
pub mod mime;
