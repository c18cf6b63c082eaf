//! # Rich-Text Engine
//!
//! An immutable editor value plus the operations that derive new values
//! from it. Nothing here mutates an `EditorState` in place: every operation
//! takes `&self` and returns the next state, so a holder can compare old and
//! new values and decide what to do with the change.
//!
//! ```text
//! EditorState
//! ├── content: ContentState          // blocks of styled text
//! ├── selection: SelectionState      // anchor + focus
//! └── style_override: Option<..>     // style for the next typed text
//! ```
//!
//! ## Modules
//!
//! - [`style`]: inline styles and block types
//! - [`content`]: blocks and the document
//! - [`selection`]: positions and caret motion
//! - [`formatting`]: style/block toggles and rich key commands
//! - [`text_ops`]: insertion, deletion, block splitting
//! - [`raw`]: conversion to and from the storable raw form

pub mod command;
pub mod content;
pub mod formatting;
pub mod raw;
pub mod selection;
pub mod style;
pub mod text_ops;

pub use content::{ContentBlock, ContentState};
pub use raw::RawContent;
pub use selection::{Motion, Position, SelectionState};
pub use style::{BlockType, InlineStyle, StyleSet};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorState {
    content: ContentState,
    selection: SelectionState,
    style_override: Option<StyleSet>,
}

impl EditorState {
    /// A document with one empty unstyled block and the caret at its start.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap existing content, caret at the start of the document.
    pub fn with_content(content: ContentState) -> Self {
        Self {
            content,
            selection: SelectionState::default(),
            style_override: None,
        }
    }

    pub fn content(&self) -> &ContentState {
        &self.content
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn style_override(&self) -> Option<&StyleSet> {
        self.style_override.as_ref()
    }

    /// Same content, new selection. Moving the caret drops any style override.
    pub fn with_selection(&self, selection: SelectionState) -> Self {
        Self {
            content: self.content.clone(),
            selection: self.clamp(selection),
            style_override: None,
        }
    }

    /// The block holding the start of the selection.
    pub fn start_block(&self) -> &ContentBlock {
        let index = self.selection.start().block.min(self.content.block_count() - 1);
        &self.content.blocks()[index]
    }

    /// The style the next inserted text will carry.
    ///
    /// An explicit override wins. Otherwise a collapsed caret continues the
    /// style of the char before it (or the first char at offset 0). A range
    /// reports the style of its first char, or of the char before the start
    /// when the range starts at the end of a block. With no char to look at
    /// in the block, the last char of the nearest earlier non-empty block
    /// decides.
    pub fn current_inline_style(&self) -> StyleSet {
        if let Some(style) = &self.style_override {
            return style.clone();
        }

        let start = self.selection.start();
        let Some(block) = self.content.block(start.block) else {
            return StyleSet::new();
        };

        let lookup = if self.selection.is_collapsed() {
            if start.offset > 0 {
                Some(start.offset - 1)
            } else if !block.is_empty() {
                Some(0)
            } else {
                None
            }
        } else if start.offset < block.len() {
            Some(start.offset)
        } else if start.offset > 0 {
            Some(start.offset - 1)
        } else {
            None
        };

        match lookup.and_then(|offset| block.style_at(offset)) {
            Some(style) => style.clone(),
            None => self.style_above(start.block),
        }
    }

    /// Style of the last char in the nearest non-empty block before `index`.
    fn style_above(&self, index: usize) -> StyleSet {
        self.content.blocks()[..index]
            .iter()
            .rev()
            .find(|block| !block.is_empty())
            .and_then(|block| block.styles().last())
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn from_parts(
        content: ContentState,
        selection: SelectionState,
        style_override: Option<StyleSet>,
    ) -> Self {
        let mut state = Self {
            content,
            selection,
            style_override,
        };
        state.selection = state.clamp(selection);
        state
    }

    fn clamp(&self, selection: SelectionState) -> SelectionState {
        let clamp_position = |position: Position| {
            let last = self.content.block_count() - 1;
            let block = position.block.min(last);
            let len = self.content.block(block).map_or(0, ContentBlock::len);
            Position::new(block, position.offset.min(len))
        };
        SelectionState::range(clamp_position(selection.anchor), clamp_position(selection.focus))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_has_one_blank_block() {
        let state = EditorState::empty();
        assert_eq!(state.content().block_count(), 1);
        assert!(state.start_block().is_blank());
        assert!(state.selection().is_collapsed());
        assert!(state.current_inline_style().is_empty());
    }

    #[test]
    fn test_with_selection_clamps_out_of_range_positions() {
        let state = EditorState::with_content(ContentState::from_plain_text("abc"));
        let moved = state.with_selection(SelectionState::collapsed(Position::new(9, 99)));
        assert_eq!(moved.selection().focus, Position::new(0, 3));
    }

    #[test]
    fn test_current_style_follows_previous_char() {
        let mut content = ContentState::from_plain_text("ab");
        content.block_mut(0).set_style(0..1, &InlineStyle::Bold, true);
        let state = EditorState::with_content(content);

        let after_a = state.with_selection(SelectionState::collapsed(Position::new(0, 1)));
        assert!(after_a.current_inline_style().contains(&InlineStyle::Bold));

        let after_b = state.with_selection(SelectionState::collapsed(Position::new(0, 2)));
        assert!(after_b.current_inline_style().is_empty());

        // Offset 0 looks at the first char
        assert!(state.current_inline_style().contains(&InlineStyle::Bold));
    }

    #[test]
    fn test_empty_block_continues_style_from_above() {
        let mut content = ContentState::from_plain_text("ab\n\n");
        content.block_mut(0).set_style(0..2, &InlineStyle::Bold, true);
        let state = EditorState::with_content(content);

        let caret = state.with_selection(SelectionState::collapsed(Position::new(2, 0)));
        assert!(caret.current_inline_style().contains(&InlineStyle::Bold));

        let range = state.with_selection(SelectionState::range(
            Position::new(1, 0),
            Position::new(2, 0),
        ));
        assert!(range.current_inline_style().contains(&InlineStyle::Bold));
    }

    #[test]
    fn test_range_starting_at_block_end_uses_char_before() {
        let mut content = ContentState::from_plain_text("ab\ncd");
        content.block_mut(0).set_style(1..2, &InlineStyle::Italic, true);
        let state = EditorState::with_content(content).with_selection(SelectionState::range(
            Position::new(0, 2),
            Position::new(1, 2),
        ));
        assert_eq!(state.current_inline_style(), StyleSet::from([InlineStyle::Italic]));
    }
}
