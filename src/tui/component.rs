use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the editor screen.
///
/// Components receive their data as props (struct fields) and render into a
/// `Frame` within the given `Rect`. `render` takes `&mut self` so a component
/// can cache layout from the last frame (button hit areas, scroll offsets)
/// for use when the next event arrives.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that turns terminal events into its own higher-level events.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
