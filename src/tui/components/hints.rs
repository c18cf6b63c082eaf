//! Help lines below the editor, one per trigger character.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::panel::{TRIGGERS, Trigger};
use crate::tui::component::Component;

pub fn hint_text(trigger: &Trigger) -> String {
    format!("Type '{}' for {}", trigger.ch, trigger.label)
}

/// Rows the hint block needs.
pub fn hint_height() -> u16 {
    TRIGGERS.len() as u16
}

pub struct Hints;

impl Component for Hints {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::new().add_modifier(Modifier::DIM);
        let lines: Vec<Line> = TRIGGERS
            .iter()
            .map(|trigger| Line::styled(hint_text(trigger), style))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}
