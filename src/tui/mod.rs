//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the editor,
//! and translates terminal events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop sleeps up to 500ms waiting for input and only redraws after an
//! event arrived. All pending events are drained before the next draw so a
//! large paste or key repeat burst costs one frame.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
pub mod keybinding;
pub mod style_map;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::engine::{BlockType, InlineStyle};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{EditorViewState, ToolbarButton, ToolbarState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core editing logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub toolbar: ToolbarState,
    pub editor_view: EditorViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Ctrl+Backspace and Cmd+S through;
        // terminals without it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

fn button_action(button: ToolbarButton) -> Action {
    match button {
        ToolbarButton::Bold => Action::ToggleInlineStyle(InlineStyle::Bold),
        ToolbarButton::Underline => Action::ToggleInlineStyle(InlineStyle::Underline),
        ToolbarButton::Heading => Action::ToggleBlockType(BlockType::HeaderOne),
        ToolbarButton::Save => Action::Save,
    }
}

/// Map a terminal event to a core action. `None` means redraw only.
fn event_to_action(tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None,
        TuiEvent::Button(_) | TuiEvent::MouseClick(_, _) => {
            tui.toolbar.handle_event(&event).map(button_action)
        }
        TuiEvent::Command(command) => Some(Action::KeyCommand(command.to_string())),
        TuiEvent::InputChar(ch) => Some(Action::Input(ch)),
        TuiEvent::Paste(text) => Some(Action::Paste(text)),
        TuiEvent::Move { motion, extend } => Some(Action::Move { motion, extend }),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Editor closed");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain all pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            if let Some(action) = event_to_action(tui, event)
                && update(app, action)? == Effect::Quit
            {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}
