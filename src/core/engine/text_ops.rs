//! Plain editing: insertion, deletion and block splitting.
//!
//! These are the defaults an editor falls back to when no handler claimed an
//! input or command.

use super::command;
use super::content::{ContentBlock, ContentState};
use super::style::BlockType;
use super::{EditorState, Position, SelectionState};

impl EditorState {
    /// Replace the selection with `text`, styled with the current inline
    /// style. Newlines in `text` split blocks.
    pub fn insert_text(&self, text: &str) -> EditorState {
        let style = self.current_inline_style();
        let (mut content, mut caret) = self.remove_selected();

        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            content.block_mut(caret.block).insert(caret.offset, first, &style);
            caret.offset += first.chars().count();
        }
        for line in lines {
            caret = split_at(&mut content, caret);
            content.block_mut(caret.block).insert(0, line, &style);
            caret.offset = line.chars().count();
        }

        EditorState::from_parts(content, SelectionState::collapsed(caret), None)
    }

    /// Split the caret's block in two (Enter).
    ///
    /// An empty list item is turned back into a plain block instead of
    /// producing another empty item.
    pub fn split_block(&self) -> EditorState {
        let start = self.start_block();
        if self.selection().is_collapsed()
            && start.is_empty()
            && start.block_type.is_list_item()
        {
            return self.toggle_block_type(start.block_type);
        }

        let (mut content, caret) = self.remove_selected();
        let caret = split_at(&mut content, caret);
        EditorState::from_parts(content, SelectionState::collapsed(caret), None)
    }

    /// Delete the selection, or the char before the caret. At offset 0 the
    /// block merges into the previous one.
    pub fn delete_backward(&self) -> EditorState {
        let selection = self.selection();
        if !selection.is_collapsed() {
            return self.delete_selection();
        }

        let caret = selection.focus;
        if caret.offset > 0 {
            return self.delete_range(Position::new(caret.block, caret.offset - 1), caret);
        }
        if caret.block > 0 {
            let previous_len = self.content().blocks()[caret.block - 1].len();
            return self.delete_range(Position::new(caret.block - 1, previous_len), caret);
        }
        self.clone()
    }

    /// Delete the selection, or the char after the caret. At the end of a
    /// block the next block merges into this one.
    pub fn delete_forward(&self) -> EditorState {
        let selection = self.selection();
        if !selection.is_collapsed() {
            return self.delete_selection();
        }

        let caret = selection.focus;
        let len = self.content().blocks()[caret.block].len();
        if caret.offset < len {
            return self.delete_range(caret, Position::new(caret.block, caret.offset + 1));
        }
        if caret.block + 1 < self.content().block_count() {
            return self.delete_range(caret, Position::new(caret.block + 1, 0));
        }
        self.clone()
    }

    /// Delete back to the previous word boundary within the block.
    pub fn delete_word_backward(&self) -> EditorState {
        let selection = self.selection();
        if !selection.is_collapsed() || selection.focus.offset == 0 {
            return self.delete_backward();
        }

        let caret = selection.focus;
        let chars: Vec<char> = self.content().blocks()[caret.block].text().chars().collect();
        let boundary = prev_word_boundary(&chars, caret.offset);
        self.delete_range(Position::new(caret.block, boundary), caret)
    }

    pub fn delete_selection(&self) -> EditorState {
        let (content, caret) = self.remove_selected();
        EditorState::from_parts(content, SelectionState::collapsed(caret), None)
    }

    /// Default handling for commands the rich handler declined.
    pub fn apply_default_command(&self, name: &str) -> Option<EditorState> {
        match name {
            command::BACKSPACE => Some(self.delete_backward()),
            command::BACKSPACE_WORD => Some(self.delete_word_backward()),
            command::DELETE => Some(self.delete_forward()),
            command::SPLIT_BLOCK => Some(self.split_block()),
            _ => None,
        }
    }

    fn delete_range(&self, start: Position, end: Position) -> EditorState {
        self.with_selection(SelectionState::range(start, end))
            .delete_selection()
    }

    /// Remove the selected text, returning the new content and caret.
    fn remove_selected(&self) -> (ContentState, Position) {
        let selection = self.selection();
        let mut content = self.content().clone();
        let (start, end) = (selection.start(), selection.end());
        if selection.is_collapsed() {
            return (content, start);
        }

        if start.block == end.block {
            content.block_mut(start.block).remove(start.offset..end.offset);
            return (content, start);
        }

        // Keep the head of the start block, append the tail of the end block
        let (tail_text, tail_styles) = {
            let end_block = content.block_mut(end.block);
            end_block.split_off(end.offset)
        };
        for index in (start.block + 1..=end.block).rev() {
            content.remove_block(index);
        }
        let head = content.block_mut(start.block);
        head.remove(start.offset..head.len());
        head.append(&tail_text, tail_styles);
        (content, start)
    }
}

/// Split the block at `at`, returning the caret at the start of the new block.
fn split_at(content: &mut ContentState, at: Position) -> Position {
    let block = content.block_mut(at.block);
    let at_end = at.offset >= block.len();
    let (text, styles) = block.split_off(at.offset);

    // Headings end where the line ends; other types carry over
    let block_type = if at_end && block.block_type.heading_level().is_some() {
        BlockType::Unstyled
    } else {
        block.block_type
    };

    let mut next = ContentBlock::new(block_type);
    next.append(&text, styles);
    content.insert_block(at.block + 1, next);
    Position::new(at.block + 1, 0)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Skip non-word chars backwards, then word chars.
fn prev_word_boundary(chars: &[char], pos: usize) -> usize {
    let mut i = pos.min(chars.len());
    while i > 0 && !is_word_char(chars[i - 1]) {
        i -= 1;
    }
    while i > 0 && is_word_char(chars[i - 1]) {
        i -= 1;
    }
    i
}
