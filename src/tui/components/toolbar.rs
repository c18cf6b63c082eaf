//! # Toolbar Component
//!
//! A row of four buttons above the editor: Bold, Underline, Heading, Save.
//! Each can be pressed with its function key (F1-F4) or clicked.
//!
//! The toolbar keeps the screen rects of its buttons from the last render so
//! a mouse click can be mapped back to a button.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::engine::{BlockType, InlineStyle, StyleSet};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    Bold,
    Underline,
    Heading,
    Save,
}

impl ToolbarButton {
    pub const ALL: [ToolbarButton; 4] = [
        ToolbarButton::Bold,
        ToolbarButton::Underline,
        ToolbarButton::Heading,
        ToolbarButton::Save,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ToolbarButton::Bold => "Bold",
            ToolbarButton::Underline => "Underline",
            ToolbarButton::Heading => "Heading",
            ToolbarButton::Save => "Save",
        }
    }

    pub fn key_hint(self) -> &'static str {
        match self {
            ToolbarButton::Bold => "F1",
            ToolbarButton::Underline => "F2",
            ToolbarButton::Heading => "F3",
            ToolbarButton::Save => "F4",
        }
    }

    fn text(self) -> String {
        format!("[ {} {} ]", self.label(), self.key_hint())
    }
}

/// Persistent toolbar state, kept across frames in `TuiState`.
#[derive(Debug, Default)]
pub struct ToolbarState {
    /// Button rects from the last render, in `ToolbarButton::ALL` order.
    pub button_areas: Vec<(ToolbarButton, Rect)>,
}

impl ToolbarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<ToolbarButton> {
        self.button_areas
            .iter()
            .find(|(_, rect)| {
                row >= rect.y
                    && row < rect.y + rect.height
                    && column >= rect.x
                    && column < rect.x + rect.width
            })
            .map(|(button, _)| *button)
    }
}

impl EventHandler for ToolbarState {
    type Event = ToolbarButton;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ToolbarButton> {
        match event {
            TuiEvent::Button(button) => Some(*button),
            TuiEvent::MouseClick(column, row) => self.hit_test(*column, *row),
            _ => None,
        }
    }
}

/// Per-frame wrapper: borrows the persistent state plus props for rendering.
pub struct Toolbar<'a> {
    pub state: &'a mut ToolbarState,
    /// Style the next typed character will get; lights up Bold/Underline.
    pub active_styles: StyleSet,
    /// Type of the block holding the caret; lights up Heading.
    pub block_type: BlockType,
}

impl Toolbar<'_> {
    fn is_active(&self, button: ToolbarButton) -> bool {
        match button {
            ToolbarButton::Bold => self.active_styles.contains(&InlineStyle::Bold),
            ToolbarButton::Underline => self.active_styles.contains(&InlineStyle::Underline),
            ToolbarButton::Heading => self.block_type == BlockType::HeaderOne,
            ToolbarButton::Save => false,
        }
    }
}

impl Component for Toolbar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut areas = Vec::with_capacity(ToolbarButton::ALL.len());
        let mut x = area.x;
        let right = area.x + area.width;

        for button in ToolbarButton::ALL {
            let text = button.text();
            let width = (text.chars().count() as u16).min(right.saturating_sub(x));
            if width == 0 {
                break;
            }
            let rect = Rect::new(x, area.y, width, area.height.min(1));

            let style = if self.is_active(button) {
                Style::new().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::new().fg(Color::Cyan)
            };
            frame.render_widget(Span::styled(text, style), rect);
            areas.push((button, rect));

            // One column gap between buttons
            x = x.saturating_add(width + 1);
        }

        self.state.button_areas = areas;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_toolbar(state: &mut ToolbarState, active_styles: StyleSet) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut toolbar = Toolbar {
                    state: &mut *state,
                    active_styles: active_styles.clone(),
                    block_type: BlockType::Unstyled,
                };
                toolbar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_all_buttons() {
        let mut state = ToolbarState::new();
        let text = render_toolbar(&mut state, StyleSet::new());
        assert!(text.contains("[ Bold F1 ]"));
        assert!(text.contains("[ Underline F2 ]"));
        assert!(text.contains("[ Heading F3 ]"));
        assert!(text.contains("[ Save F4 ]"));
        assert_eq!(state.button_areas.len(), 4);
    }

    #[test]
    fn test_click_maps_to_button() {
        let mut state = ToolbarState::new();
        render_toolbar(&mut state, StyleSet::new());

        // "[ Bold F1 ]" occupies columns 0..11, then a gap at 11
        assert_eq!(
            state.handle_event(&TuiEvent::MouseClick(2, 0)),
            Some(ToolbarButton::Bold)
        );
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(11, 0)), None);
        assert_eq!(
            state.handle_event(&TuiEvent::MouseClick(12, 0)),
            Some(ToolbarButton::Underline)
        );
        assert_eq!(state.handle_event(&TuiEvent::MouseClick(2, 5)), None);
    }

    #[test]
    fn test_function_key_passes_through() {
        let mut state = ToolbarState::new();
        assert_eq!(
            state.handle_event(&TuiEvent::Button(ToolbarButton::Save)),
            Some(ToolbarButton::Save)
        );
        assert_eq!(state.handle_event(&TuiEvent::InputChar('a')), None);
    }

    #[test]
    fn test_active_button_highlight() {
        let mut state = ToolbarState::new();
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut toolbar = Toolbar {
                    state: &mut state,
                    active_styles: [InlineStyle::Bold].into_iter().collect(),
                    block_type: BlockType::Unstyled,
                };
                toolbar.render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(2, 0)].bg, Color::Cyan);
        assert_ne!(buffer[(14, 0)].bg, Color::Cyan);
    }
}
