//! Selection positions and caret motion.

use super::EditorState;

/// A caret position: block index plus char offset within that block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub block: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(block: usize, offset: usize) -> Self {
        Self { block, offset }
    }
}

/// Anchor is where the selection started, focus is where the caret is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub anchor: Position,
    pub focus: Position,
}

impl SelectionState {
    pub fn collapsed(at: Position) -> Self {
        Self {
            anchor: at,
            focus: at,
        }
    }

    pub fn range(anchor: Position, focus: Position) -> Self {
        Self { anchor, focus }
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    pub fn start(&self) -> Position {
        self.anchor.min(self.focus)
    }

    pub fn end(&self) -> Position {
        self.anchor.max(self.focus)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    DocumentStart,
    DocumentEnd,
}

impl EditorState {
    /// Move the focus by `motion`. With `extend` the anchor stays put;
    /// otherwise the selection collapses to the new caret.
    pub fn move_caret(&self, motion: Motion, extend: bool) -> EditorState {
        let selection = self.selection();

        // A plain Left/Right on a range collapses to the matching edge
        if !extend && !selection.is_collapsed() {
            match motion {
                Motion::Left => return self.with_selection(SelectionState::collapsed(selection.start())),
                Motion::Right => return self.with_selection(SelectionState::collapsed(selection.end())),
                _ => {}
            }
        }

        let focus = self.motion_target(selection.focus, motion);
        let next = if extend {
            SelectionState::range(selection.anchor, focus)
        } else {
            SelectionState::collapsed(focus)
        };
        self.with_selection(next)
    }

    fn motion_target(&self, from: Position, motion: Motion) -> Position {
        let content = self.content();
        let block_len = |index: usize| content.block(index).map_or(0, |b| b.len());
        let last = content.block_count() - 1;

        match motion {
            Motion::Left => {
                if from.offset > 0 {
                    Position::new(from.block, from.offset - 1)
                } else if from.block > 0 {
                    Position::new(from.block - 1, block_len(from.block - 1))
                } else {
                    from
                }
            }
            Motion::Right => {
                if from.offset < block_len(from.block) {
                    Position::new(from.block, from.offset + 1)
                } else if from.block < last {
                    Position::new(from.block + 1, 0)
                } else {
                    from
                }
            }
            Motion::Up => {
                if from.block == 0 {
                    Position::new(0, 0)
                } else {
                    let target = from.block - 1;
                    Position::new(target, from.offset.min(block_len(target)))
                }
            }
            Motion::Down => {
                if from.block >= last {
                    Position::new(last, block_len(last))
                } else {
                    let target = from.block + 1;
                    Position::new(target, from.offset.min(block_len(target)))
                }
            }
            Motion::LineStart => Position::new(from.block, 0),
            Motion::LineEnd => Position::new(from.block, block_len(from.block)),
            Motion::DocumentStart => Position::new(0, 0),
            Motion::DocumentEnd => Position::new(last, block_len(last)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::ContentState;

    fn two_lines() -> EditorState {
        EditorState::with_content(ContentState::from_plain_text("hello\nhi"))
    }

    #[test]
    fn test_start_and_end_order_positions() {
        let selection = SelectionState::range(Position::new(1, 2), Position::new(0, 4));
        assert_eq!(selection.start(), Position::new(0, 4));
        assert_eq!(selection.end(), Position::new(1, 2));
        assert!(!selection.is_collapsed());
    }

    #[test]
    fn test_right_wraps_to_next_block() {
        let state = two_lines().move_caret(Motion::LineEnd, false);
        assert_eq!(state.selection().focus, Position::new(0, 5));
        let state = state.move_caret(Motion::Right, false);
        assert_eq!(state.selection().focus, Position::new(1, 0));
    }

    #[test]
    fn test_left_at_document_start_stays() {
        let state = two_lines().move_caret(Motion::Left, false);
        assert_eq!(state.selection().focus, Position::new(0, 0));
    }

    #[test]
    fn test_down_clamps_offset_to_shorter_block() {
        let state = two_lines()
            .move_caret(Motion::LineEnd, false)
            .move_caret(Motion::Down, false);
        assert_eq!(state.selection().focus, Position::new(1, 2));
    }

    #[test]
    fn test_extend_keeps_anchor() {
        let state = two_lines()
            .move_caret(Motion::Right, true)
            .move_caret(Motion::Right, true);
        assert_eq!(state.selection().anchor, Position::new(0, 0));
        assert_eq!(state.selection().focus, Position::new(0, 2));

        let collapsed = state.move_caret(Motion::Left, false);
        assert_eq!(collapsed.selection(), SelectionState::collapsed(Position::new(0, 0)));
    }

    #[test]
    fn test_document_end() {
        let state = two_lines().move_caret(Motion::DocumentEnd, false);
        assert_eq!(state.selection().focus, Position::new(1, 2));
    }
}
