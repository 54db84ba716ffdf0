//! Node types of the intermediate tree.

use crate::delta::{Attributes, Insert};

/// One rendered block: a paragraph, heading, list item, quote or code block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub children: Vec<Inline>,
    pub attributes: Attributes,
}

/// A run of text or an embed inside a block.
#[derive(Debug, Clone, PartialEq)]
pub struct Inline {
    pub insert: Insert,
    pub attributes: Attributes,
}

impl Block {
    pub fn new(attributes: Attributes) -> Self {
        Block {
            children: Vec::new(),
            attributes,
        }
    }

    pub fn with_child(attributes: Attributes, child: Inline) -> Self {
        Block {
            children: vec![child],
            attributes,
        }
    }

    /// A block without children or attributes renders to nothing.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.attributes.is_empty()
    }
}

impl Inline {
    pub fn new(insert: impl Into<Insert>, attributes: Attributes) -> Self {
        Inline {
            insert: insert.into(),
            attributes,
        }
    }
}
