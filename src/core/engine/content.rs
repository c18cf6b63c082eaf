//! Document content: an ordered list of blocks, each holding its text and the
//! inline styles of every character.
//!
//! Offsets are counted in `char`s, never bytes.

use std::ops::Range;

use super::style::{BlockType, InlineStyle, StyleSet};

/// Length of generated block keys.
const KEY_LEN: usize = 5;

/// Generate a short random block key.
pub fn generate_key() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..KEY_LEN].to_string()
}

/// One paragraph-level unit of the document.
///
/// Invariant: `styles.len() == text.chars().count()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    pub key: String,
    pub block_type: BlockType,
    pub depth: u8,
    text: String,
    styles: Vec<StyleSet>,
}

impl ContentBlock {
    pub fn new(block_type: BlockType) -> Self {
        Self {
            key: generate_key(),
            block_type,
            depth: 0,
            text: String::new(),
            styles: Vec::new(),
        }
    }

    /// Build a block from text with every character unstyled.
    pub fn from_text(block_type: BlockType, text: &str) -> Self {
        let mut block = Self::new(block_type);
        block.insert(0, text, &StyleSet::new());
        block
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// True when the text is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn style_at(&self, offset: usize) -> Option<&StyleSet> {
        self.styles.get(offset)
    }

    pub fn styles(&self) -> &[StyleSet] {
        &self.styles
    }

    pub fn chars(&self) -> impl Iterator<Item = (char, &StyleSet)> {
        self.text.chars().zip(self.styles.iter())
    }

    fn byte_index(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert `text` at `offset`, every new character carrying `style`.
    /// `text` must not contain newlines; block splitting is the caller's job.
    pub fn insert(&mut self, offset: usize, text: &str, style: &StyleSet) {
        let offset = offset.min(self.len());
        let at = self.byte_index(offset);
        self.text.insert_str(at, text);
        let inserted = text.chars().count();
        self.styles
            .splice(offset..offset, std::iter::repeat_n(style.clone(), inserted));
    }

    /// Remove the chars in `range` (clamped to the block).
    pub fn remove(&mut self, range: Range<usize>) {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        if start == end {
            return;
        }
        let (from, to) = (self.byte_index(start), self.byte_index(end));
        self.text.replace_range(from..to, "");
        self.styles.drain(start..end);
    }

    /// Split at `offset`, returning the tail as (text, styles) and keeping the head.
    pub fn split_off(&mut self, offset: usize) -> (String, Vec<StyleSet>) {
        let offset = offset.min(self.len());
        let at = self.byte_index(offset);
        let text = self.text.split_off(at);
        let styles = self.styles.split_off(offset);
        (text, styles)
    }

    /// Append text with explicit per-char styles.
    pub fn append(&mut self, text: &str, styles: Vec<StyleSet>) {
        debug_assert_eq!(text.chars().count(), styles.len());
        self.text.push_str(text);
        self.styles.extend(styles);
    }

    /// Add or remove `style` on every char in `range`.
    pub fn set_style(&mut self, range: Range<usize>, style: &InlineStyle, present: bool) {
        let end = range.end.min(self.len());
        for set in &mut self.styles[range.start.min(end)..end] {
            if present {
                set.insert(style.clone());
            } else {
                set.remove(style);
            }
        }
    }

    /// Replace the per-char styles wholesale. Extra entries are dropped,
    /// missing ones are filled with empty sets.
    pub(crate) fn with_styles(mut self, mut styles: Vec<StyleSet>) -> Self {
        styles.resize(self.len(), StyleSet::new());
        self.styles = styles;
        self
    }

    pub(crate) fn with_parts(key: String, block_type: BlockType, depth: u8, text: String) -> Self {
        let len = text.chars().count();
        Self {
            key,
            block_type,
            depth,
            text,
            styles: vec![StyleSet::new(); len],
        }
    }
}

/// The whole document. Never empty: there is always at least one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentState {
    blocks: Vec<ContentBlock>,
}

impl Default for ContentState {
    fn default() -> Self {
        Self {
            blocks: vec![ContentBlock::new(BlockType::Unstyled)],
        }
    }
}

impl ContentState {
    /// Build from blocks; an empty list becomes a single empty block.
    pub fn from_blocks(blocks: Vec<ContentBlock>) -> Self {
        if blocks.is_empty() {
            Self::default()
        } else {
            Self { blocks }
        }
    }

    /// Build an unstyled document with one block per line of `text`.
    pub fn from_plain_text(text: &str) -> Self {
        Self::from_blocks(
            text.split('\n')
                .map(|line| ContentBlock::from_text(BlockType::Unstyled, line))
                .collect(),
        )
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&ContentBlock> {
        self.blocks.get(index)
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Block text joined with newlines.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(ContentBlock::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True when the document is a single empty block.
    pub fn is_empty(&self) -> bool {
        self.blocks.len() == 1 && self.blocks[0].is_empty()
    }

    pub(crate) fn block_mut(&mut self, index: usize) -> &mut ContentBlock {
        &mut self.blocks[index]
    }

    pub(crate) fn insert_block(&mut self, index: usize, block: ContentBlock) {
        self.blocks.insert(index, block);
    }

    pub(crate) fn remove_block(&mut self, index: usize) -> ContentBlock {
        let block = self.blocks.remove(index);
        if self.blocks.is_empty() {
            self.blocks.push(ContentBlock::new(BlockType::Unstyled));
        }
        block
    }
}
