//! Pure wrapping of document blocks into visual lines.
//!
//! Lines break at the character that would overflow the width, measured in
//! terminal columns with `unicode-width`. Wrapping never splits a character
//! and never trims whitespace, so every char offset of a block lands on
//! exactly one visual line.

use unicode_width::UnicodeWidthChar;

use crate::core::engine::{BlockType, ContentState, Position};
use crate::tui::style_map::block_prefix;

/// One row of the editor surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualLine {
    pub block: usize,
    /// Char range of the block shown on this row.
    pub start: usize,
    pub end: usize,
    /// List bullet or quote bar on a block's first row, blank padding after.
    pub prefix: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentLayout {
    pub lines: Vec<VisualLine>,
}

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

fn str_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

impl DocumentLayout {
    pub fn new(content: &ContentState, width: u16) -> Self {
        let width = usize::from(width).max(1);
        let mut lines = Vec::new();
        let mut ordinal = 0;

        for (index, block) in content.blocks().iter().enumerate() {
            ordinal = if block.block_type == BlockType::OrderedListItem {
                ordinal + 1
            } else {
                0
            };
            let prefix = block_prefix(block.block_type, ordinal);
            let prefix_width = str_width(&prefix);
            let padding = " ".repeat(prefix_width);
            // Narrow terminals still get one column of text per row
            let available = width.saturating_sub(prefix_width).max(1);

            let mut start = 0;
            let mut used = 0;
            let mut first = true;
            for (offset, ch) in block.text().chars().enumerate() {
                let w = char_width(ch);
                if used + w > available && offset > start {
                    lines.push(VisualLine {
                        block: index,
                        start,
                        end: offset,
                        prefix: if first { prefix.clone() } else { padding.clone() },
                    });
                    first = false;
                    start = offset;
                    used = 0;
                }
                used += w;
            }
            lines.push(VisualLine {
                block: index,
                start,
                end: block.len(),
                prefix: if first { prefix } else { padding },
            });
        }

        Self { lines }
    }

    /// Row and column where the caret at `position` is drawn.
    pub fn locate(&self, content: &ContentState, position: Position) -> (usize, usize) {
        let mut found = None;
        for (row, line) in self.lines.iter().enumerate() {
            if line.block != position.block {
                continue;
            }
            found = Some(row);
            if position.offset < line.end {
                break;
            }
        }
        let Some(row) = found else {
            return (0, 0);
        };

        let line = &self.lines[row];
        let column = content
            .block(line.block)
            .map(|block| {
                block
                    .text()
                    .chars()
                    .skip(line.start)
                    .take(position.offset.saturating_sub(line.start))
                    .map(char_width)
                    .sum::<usize>()
            })
            .unwrap_or(0);
        (row, str_width(&line.prefix) + column)
    }
}
