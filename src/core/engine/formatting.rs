//! Style and block-type toggles, plus the rich key-command handler.
//!
//! `handle_key_command` only claims the commands it knows how to turn into
//! formatting changes and returns `None` for everything else, leaving plain
//! editing to the caller's default handling.

use log::debug;

use super::command;
use super::style::{BlockType, InlineStyle, StyleSet};
use super::{EditorState, SelectionState};

impl EditorState {
    /// Toggle `style` over the selection.
    ///
    /// With a collapsed caret nothing in the document changes; the style is
    /// flipped in the override so the next typed text picks it up. With a
    /// range, the style is removed everywhere if the first selected char has
    /// it, otherwise applied everywhere.
    pub fn toggle_inline_style(&self, style: &InlineStyle) -> EditorState {
        let selection = self.selection();
        let mut current = self.current_inline_style();
        let present = match self.first_selected_style() {
            Some(first) => first.contains(style),
            None => current.contains(style),
        };

        if selection.is_collapsed() {
            if present {
                current.remove(style);
            } else {
                current.insert(style.clone());
            }
            return EditorState::from_parts(self.content().clone(), selection, Some(current));
        }

        let (start, end) = (selection.start(), selection.end());
        let mut content = self.content().clone();
        for index in start.block..=end.block {
            let block = content.block_mut(index);
            let from = if index == start.block { start.offset } else { 0 };
            let to = if index == end.block { end.offset } else { block.len() };
            block.set_style(from..to, style, !present);
        }
        EditorState::from_parts(content, selection, None)
    }

    /// Styles of the first char inside the selection, skipping block ends and
    /// empty blocks the range only passes through.
    fn first_selected_style(&self) -> Option<&StyleSet> {
        let selection = self.selection();
        let (start, end) = (selection.start(), selection.end());
        (start.block..=end.block).find_map(|index| {
            let block = self.content().block(index)?;
            let from = if index == start.block { start.offset } else { 0 };
            let to = if index == end.block { end.offset } else { block.len() };
            if from < to { block.style_at(from) } else { None }
        })
    }

    /// Set `block_type` on every block the selection touches, or reset them
    /// to unstyled when the start block already has that type.
    pub fn toggle_block_type(&self, block_type: BlockType) -> EditorState {
        let selection = self.selection();
        let (start, end) = (selection.start(), selection.end());

        // A range ending at offset 0 of a later block doesn't touch that block
        let last = if end.block > start.block && end.offset == 0 {
            end.block - 1
        } else {
            end.block
        };

        let target = if self.start_block().block_type == block_type {
            BlockType::Unstyled
        } else {
            block_type
        };

        let mut content = self.content().clone();
        for index in start.block..=last {
            content.block_mut(index).block_type = target;
        }
        EditorState::from_parts(content, selection, self.style_override().cloned())
    }

    /// Toggle a block type given by name. Unknown names leave the state as is.
    pub fn toggle_block_type_named(&self, name: &str) -> EditorState {
        match name.parse::<BlockType>() {
            Ok(block_type) => self.toggle_block_type(block_type),
            Err(e) => {
                debug!("Ignoring block toggle: {}", e);
                self.clone()
            }
        }
    }

    /// Apply a rich editing command. Returns `None` when the command isn't
    /// one this handler deals with, or doesn't apply at the current caret.
    pub fn handle_key_command(&self, name: &str) -> Option<EditorState> {
        match name {
            command::BOLD => Some(self.toggle_inline_style(&InlineStyle::Bold)),
            command::ITALIC => Some(self.toggle_inline_style(&InlineStyle::Italic)),
            command::UNDERLINE => Some(self.toggle_inline_style(&InlineStyle::Underline)),
            command::CODE => Some(self.toggle_inline_style(&InlineStyle::Code)),
            command::STRIKETHROUGH => Some(self.toggle_inline_style(&InlineStyle::Strikethrough)),
            command::BACKSPACE | command::BACKSPACE_WORD => self.remove_block_style_at_start(),
            _ => None,
        }
    }

    /// Backspace at offset 0 of a styled block removes the block style
    /// instead of merging with the previous block. This only applies to the
    /// first block or an empty one; a code block directly after a non-empty
    /// code block merges as usual.
    fn remove_block_style_at_start(&self) -> Option<EditorState> {
        let selection = self.selection();
        if !selection.is_collapsed() || selection.focus.offset != 0 {
            return None;
        }

        let index = selection.focus.block;
        let block = self.start_block();
        if !block.is_empty() && index != 0 {
            return None;
        }
        if block.block_type == BlockType::Unstyled {
            return None;
        }
        let previous = index
            .checked_sub(1)
            .and_then(|before| self.content().block(before));
        if block.block_type == BlockType::CodeBlock
            && previous.is_some_and(|p| p.block_type == BlockType::CodeBlock && !p.is_empty())
        {
            return None;
        }

        let mut content = self.content().clone();
        content.block_mut(index).block_type = BlockType::Unstyled;
        Some(EditorState::from_parts(
            content,
            SelectionState::collapsed(selection.focus),
            self.style_override().cloned(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::{ContentState, Position, StyleSet};

    fn state(text: &str) -> EditorState {
        EditorState::with_content(ContentState::from_plain_text(text))
    }

    fn select(state: &EditorState, anchor: (usize, usize), focus: (usize, usize)) -> EditorState {
        state.with_selection(SelectionState::range(
            Position::new(anchor.0, anchor.1),
            Position::new(focus.0, focus.1),
        ))
    }

    #[test]
    fn test_toggle_on_collapsed_caret_sets_override_only() {
        let before = state("hello");
        let after = before.toggle_inline_style(&InlineStyle::Bold);
        assert_eq!(after.content(), before.content());
        assert_eq!(
            after.style_override(),
            Some(&StyleSet::from([InlineStyle::Bold]))
        );
    }

    #[test]
    fn test_toggle_twice_on_range_restores_original_styles() {
        let before = select(&state("hello world"), (0, 0), (0, 5));
        let once = before.toggle_inline_style(&InlineStyle::Bold);
        assert!(once.content().blocks()[0].styles()[..5]
            .iter()
            .all(|s| s.contains(&InlineStyle::Bold)));
        assert!(once.content().blocks()[0].styles()[5..].iter().all(|s| s.is_empty()));

        let twice = once.toggle_inline_style(&InlineStyle::Bold);
        assert_eq!(twice.content(), before.content());
    }

    #[test]
    fn test_toggle_twice_on_caret_restores_original_style() {
        let before = state("");
        let twice = before
            .toggle_inline_style(&InlineStyle::Bold)
            .toggle_inline_style(&InlineStyle::Bold);
        assert!(twice.current_inline_style().is_empty());
    }

    #[test]
    fn test_toggle_twice_on_range_from_block_end_restores_content() {
        let before = select(&state("ab\ncd"), (0, 2), (1, 2));
        let once = before.toggle_inline_style(&InlineStyle::Bold);
        assert!(once.content().blocks()[1]
            .styles()
            .iter()
            .all(|s| s.contains(&InlineStyle::Bold)));
        assert!(once.content().blocks()[0].styles().iter().all(|s| s.is_empty()));

        let twice = once.toggle_inline_style(&InlineStyle::Bold);
        assert_eq!(twice.content(), before.content());
    }

    #[test]
    fn test_range_toggle_spans_blocks() {
        let before = select(&state("ab\ncd"), (0, 1), (1, 1));
        let after = before.toggle_inline_style(&InlineStyle::Underline);
        let blocks = after.content().blocks();
        assert!(blocks[0].styles()[0].is_empty());
        assert!(blocks[0].styles()[1].contains(&InlineStyle::Underline));
        assert!(blocks[1].styles()[0].contains(&InlineStyle::Underline));
        assert!(blocks[1].styles()[1].is_empty());
    }

    #[test]
    fn test_toggle_block_type_and_back() {
        let before = state("title");
        let heading = before.toggle_block_type(BlockType::HeaderOne);
        assert_eq!(heading.start_block().block_type, BlockType::HeaderOne);
        let back = heading.toggle_block_type(BlockType::HeaderOne);
        assert_eq!(back.start_block().block_type, BlockType::Unstyled);
    }

    #[test]
    fn test_block_toggle_skips_block_selected_at_offset_zero() {
        let before = select(&state("a\nb\nc"), (0, 0), (2, 0));
        let after = before.toggle_block_type(BlockType::Blockquote);
        let types: Vec<_> = after.content().blocks().iter().map(|b| b.block_type).collect();
        assert_eq!(
            types,
            vec![BlockType::Blockquote, BlockType::Blockquote, BlockType::Unstyled]
        );
    }

    #[test]
    fn test_unknown_block_type_name_is_noop() {
        let before = state("x");
        assert_eq!(before.toggle_block_type_named("header-nine"), before);
        assert_eq!(
            before.toggle_block_type_named("header-two").start_block().block_type,
            BlockType::HeaderTwo
        );
    }

    #[test]
    fn test_key_command_styles() {
        let before = select(&state("hey"), (0, 0), (0, 3));
        let after = before.handle_key_command(command::ITALIC).unwrap();
        assert!(after.content().blocks()[0].styles().iter().all(|s| s.contains(&InlineStyle::Italic)));
    }

    #[test]
    fn test_unknown_key_command_returns_none() {
        assert!(state("hey").handle_key_command("transpose-characters").is_none());
        assert!(state("hey").handle_key_command(command::SPLIT_BLOCK).is_none());
    }

    #[test]
    fn test_backspace_at_start_of_heading_resets_type() {
        let heading = state("title").toggle_block_type(BlockType::HeaderOne);
        let after = heading.handle_key_command(command::BACKSPACE).unwrap();
        assert_eq!(after.start_block().block_type, BlockType::Unstyled);
        assert_eq!(after.content().plain_text(), "title");
    }

    #[test]
    fn test_backspace_at_start_of_later_heading_merges() {
        let doc = select(&state("intro\ntitle"), (1, 0), (1, 5)).toggle_block_type(BlockType::HeaderOne);
        let caret = select(&doc, (1, 0), (1, 0));
        assert!(caret.handle_key_command(command::BACKSPACE).is_none());

        let merged = caret.apply_default_command(command::BACKSPACE).unwrap();
        assert_eq!(merged.content().plain_text(), "introtitle");
    }

    #[test]
    fn test_backspace_in_empty_later_block_resets_type() {
        let doc = select(&state("intro\n"), (1, 0), (1, 0)).toggle_block_type(BlockType::UnorderedListItem);
        let after = doc.handle_key_command(command::BACKSPACE).unwrap();
        assert_eq!(after.content().block_count(), 2);
        assert_eq!(after.content().blocks()[1].block_type, BlockType::Unstyled);
    }

    #[test]
    fn test_backspace_in_empty_code_block_after_code_merges() {
        let first = state("let x = 1;\n").toggle_block_type(BlockType::CodeBlock);
        let caret = select(&first, (1, 0), (1, 0)).toggle_block_type(BlockType::CodeBlock);
        assert_eq!(caret.content().blocks()[0].block_type, BlockType::CodeBlock);
        assert_eq!(caret.content().blocks()[1].block_type, BlockType::CodeBlock);
        assert!(caret.handle_key_command(command::BACKSPACE).is_none());
    }

    #[test]
    fn test_backspace_inside_text_is_not_claimed() {
        let heading = state("title")
            .toggle_block_type(BlockType::HeaderOne)
            .move_caret(crate::core::engine::Motion::LineEnd, false);
        assert!(heading.handle_key_command(command::BACKSPACE).is_none());
        assert!(state("plain").handle_key_command(command::BACKSPACE).is_none());
    }
}
