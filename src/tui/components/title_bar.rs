//! # TitleBar Component
//!
//! Top line of the screen: the editor title plus the latest status message
//! (e.g. "Saved 14:02:11" or a storage error).
//!
//! Stateless: both props come from the core `App` and are passed in each frame.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub const TITLE: &str = "Draftpad Text Editor";

pub struct TitleBar {
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            TITLE,
            Style::new().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.status_message.as_str()));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_with_status() {
        let text = rendered(&mut TitleBar::new("Saved 10:00:00".to_string()));
        assert!(text.contains("Draftpad Text Editor"));
        assert!(text.contains("| Saved 10:00:00"));
    }

    #[test]
    fn test_title_without_status() {
        let text = rendered(&mut TitleBar::new(String::new()));
        assert!(text.contains("Draftpad Text Editor"));
        assert!(!text.contains('|'));
    }
}
