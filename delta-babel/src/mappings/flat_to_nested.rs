//! Converts a flat delta into the intermediate block tree.
//!
//! # The High-Level Concept
//!
//! A delta never says "a heading starts here". It says "this newline ends a
//! heading". So the converter cannot open a block when it sees formatting; it
//! keeps appending inline runs to the current block and, when a newline
//! arrives, folds the newline's attributes back onto the block it closes and
//! starts the next one.
//!
//! # The Algorithm
//!
//! Operations are processed strictly in order. The current block is the last
//! block produced so far.
//!
//! 1. **Pure newlines** (`"\n"`, `"\n\n"`, ...):
//!    - No block yet: start one carrying the newline's attributes
//!    - Otherwise: merge the attributes into the current block, then start a
//!      fresh, empty block
//!
//! 2. **Text containing newlines**:
//!    - Split on `\n`
//!    - A non-empty first segment continues the current line
//!    - Every further non-empty segment starts a block of its own, carrying the
//!      operation's attributes on the block and on the inline
//!    - When the text ends with a newline the line is closed: whatever comes
//!      next starts a new block instead of joining the last one
//!
//! 3. **Plain text**: append to the current line, opening a block if needed.
//!
//! 4. **Embeds**: always get a block of their own. The operation's attributes
//!    go on the block and on the inline.
//!
//! 5. **Code block merge** (optional, on by default): adjacent blocks that are
//!    both code blocks are merged, because `<pre>` keeps the line breaks that
//!    separate blocks elsewhere.

use crate::delta::{Attributes, Delta, Insert, Op};
use crate::ir::nodes::{Block, Inline};

/// Knobs for the delta → IR conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntermediateOptions {
    /// Merge consecutive `code-block` lines into a single block.
    pub merge_adjacent_code_blocks: bool,
}

impl Default for IntermediateOptions {
    fn default() -> Self {
        IntermediateOptions {
            merge_adjacent_code_blocks: true,
        }
    }
}

/// Blocks under construction.
#[derive(Debug, Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    /// The last text operation ended its line; the next run must not join it.
    line_closed: bool,
}

impl BlockBuilder {
    fn push(&mut self, op: &Op) {
        match &op.insert {
            Insert::Text(text) if is_pure_newlines(text) => self.push_newlines(&op.attributes),
            Insert::Text(text) if text.contains('\n') => self.push_lines(text, &op.attributes),
            Insert::Text(text) => self.push_inline(text, &op.attributes),
            embed => {
                tracing::trace!(?embed, "embed starts its own block");
                let inline = Inline::new(embed.clone(), op.attributes.clone());
                self.blocks
                    .push(Block::with_child(op.attributes.clone(), inline));
                self.line_closed = false;
            }
        }
    }

    fn push_newlines(&mut self, attributes: &Attributes) {
        match self.blocks.last_mut() {
            None => self.blocks.push(Block::new(attributes.clone())),
            Some(current) => {
                current.attributes.merge(attributes);
                self.blocks.push(Block::default());
            }
        }
        self.line_closed = false;
    }

    fn push_lines(&mut self, text: &str, attributes: &Attributes) {
        let mut segments = text.split('\n');

        if let Some(first) = segments.next().filter(|s| !s.is_empty()) {
            match open_line(&mut self.blocks, self.line_closed) {
                Some(current) => current
                    .children
                    .push(Inline::new(first, attributes.clone())),
                None => self.start_line(first, attributes),
            }
        }

        for segment in segments.filter(|s| !s.is_empty()) {
            self.start_line(segment, attributes);
        }

        self.line_closed = text.ends_with('\n');
    }

    fn push_inline(&mut self, text: &str, attributes: &Attributes) {
        if text.is_empty() {
            return;
        }
        if open_line(&mut self.blocks, self.line_closed).is_none() {
            self.blocks.push(Block::default());
        }
        if let Some(current) = self.blocks.last_mut() {
            current.children.push(Inline::new(text, attributes.clone()));
        }
        self.line_closed = false;
    }

    fn start_line(&mut self, text: &str, attributes: &Attributes) {
        self.blocks.push(Block::with_child(
            attributes.clone(),
            Inline::new(text, attributes.clone()),
        ));
    }
}

/// The block the next inline run should join, if the current line is still open.
fn open_line(blocks: &mut [Block], line_closed: bool) -> Option<&mut Block> {
    if line_closed {
        None
    } else {
        blocks.last_mut()
    }
}

fn is_pure_newlines(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c == '\n')
}

/// Convert a delta to the intermediate block sequence.
///
/// # Example
///
/// ```ignore
/// let delta = Delta::from_json(r#"{"ops": [{"insert": "Hello, world!\n"}]}"#)?;
/// let blocks = delta_to_intermediate(&delta, &IntermediateOptions::default());
/// assert_eq!(blocks.len(), 1);
/// ```
pub fn delta_to_intermediate(delta: &Delta, options: &IntermediateOptions) -> Vec<Block> {
    let mut builder = BlockBuilder::default();
    for op in &delta.ops {
        builder.push(op);
    }

    let mut blocks = builder.blocks;
    if options.merge_adjacent_code_blocks {
        merge_adjacent_code_blocks(&mut blocks);
    }
    blocks
}

/// Absorb every code block into the code block right before it.
pub fn merge_adjacent_code_blocks(blocks: &mut Vec<Block>) {
    let mut i = 0;
    while i + 1 < blocks.len() {
        if blocks[i].attributes.code_block() && blocks[i + 1].attributes.code_block() {
            let absorbed = blocks.remove(i + 1);
            blocks[i].children.extend(absorbed.children);
        } else {
            i += 1;
        }
    }
}
