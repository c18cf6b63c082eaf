use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::hints::hint_height;
use crate::tui::components::{EditorView, Hints, TitleBar, Toolbar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let hints_height = if app.show_hints { hint_height() } else { 0 };
    let layout = Layout::vertical([Length(1), Length(1), Min(3), Length(hints_height)]);
    let [title_area, toolbar_area, editor_area, hints_area] = layout.areas(frame.area());

    TitleBar::new(app.status_message.clone()).render(frame, title_area);

    let editor = app.panel.editor_state();
    Toolbar {
        state: &mut tui.toolbar,
        active_styles: editor.current_inline_style(),
        block_type: editor.start_block().block_type,
    }
    .render(frame, toolbar_area);

    EditorView {
        state: &mut tui.editor_view,
        editor,
    }
    .render(frame, editor_area);

    if app.show_hints {
        Hints.render(frame, hints_area);
    }
}
