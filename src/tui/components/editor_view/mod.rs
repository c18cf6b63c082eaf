//! # EditorView Component
//!
//! The editing surface: every block of the document, wrapped to the width of
//! the pane, with inline styles applied per character. The selected range is
//! drawn reversed and the terminal cursor sits at the focus of the selection.
//!
//! ## State
//!
//! `EditorViewState` persists across frames and only holds the vertical
//! scroll offset. The offset follows the caret: it moves the least amount
//! needed to keep the caret row on screen.

mod layout;

pub use layout::{DocumentLayout, VisualLine};

use ratatui::Frame;
use ratatui::layout::{Position as ScreenPosition, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::engine::{EditorState, Position};
use crate::tui::component::Component;
use crate::tui::style_map::{block_style, char_style};

/// Borders consumed on each axis
const BORDER_OVERHEAD: u16 = 2;
const BORDER_OFFSET: u16 = 1;

#[derive(Debug, Default)]
pub struct EditorViewState {
    pub scroll_offset: usize,
}

impl EditorViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scroll just enough to show `row` in a viewport `height` rows tall.
    fn follow(&mut self, row: usize, height: usize) {
        if height == 0 {
            return;
        }
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + height {
            self.scroll_offset = row + 1 - height;
        }
    }
}

pub struct EditorView<'a> {
    pub state: &'a mut EditorViewState,
    pub editor: &'a EditorState,
}

impl EditorView<'_> {
    fn render_line(&self, line: &VisualLine) -> Line<'static> {
        let Some(block) = self.editor.content().block(line.block) else {
            return Line::default();
        };
        let base = block_style(block.block_type);
        let selection = self.editor.selection();
        let (start, end) = (selection.start(), selection.end());

        let mut spans = Vec::new();
        if !line.prefix.is_empty() {
            spans.push(Span::styled(line.prefix.clone(), base));
        }

        // Group runs of equally styled chars into one span
        let mut run = String::new();
        let mut run_style = None;
        for (offset, (ch, styles)) in block
            .chars()
            .enumerate()
            .skip(line.start)
            .take(line.end - line.start)
        {
            let mut style = char_style(base, styles);
            let here = Position::new(line.block, offset);
            if start <= here && here < end {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if run_style.is_some_and(|s: Style| s != style) {
                spans.push(Span::styled(std::mem::take(&mut run), run_style.unwrap_or(base)));
            }
            run_style = Some(style);
            run.push(ch);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style.unwrap_or(base)));
        }

        Line::from(spans)
    }
}

impl Component for EditorView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(BORDER_OVERHEAD);
        let inner_height = usize::from(area.height.saturating_sub(BORDER_OVERHEAD));

        let content = self.editor.content();
        let layout = DocumentLayout::new(content, inner_width);
        let (caret_row, caret_col) = layout.locate(content, self.editor.selection().focus);
        self.state.follow(caret_row, inner_height);

        let lines: Vec<Line> = layout
            .lines
            .iter()
            .skip(self.state.scroll_offset)
            .take(inner_height)
            .map(|line| self.render_line(line))
            .collect();

        let paragraph = Paragraph::new(lines).block(Block::bordered().title("Editor"));
        frame.render_widget(paragraph, area);

        if inner_width > 0 && inner_height > 0 {
            let column = (caret_col as u16).min(inner_width - 1);
            let row = (caret_row - self.state.scroll_offset) as u16;
            frame.set_cursor_position(ScreenPosition::new(
                area.x + BORDER_OFFSET + column,
                area.y + BORDER_OFFSET + row,
            ));
        }
    }
}
