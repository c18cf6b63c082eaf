use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::core::engine::Motion;
use crate::tui::components::ToolbarButton;
use crate::tui::keybinding::key_binding;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Lifecycle
    Quit,
    ForceQuit, // Ctrl+C
    Resize,

    // Editing
    Command(&'static str), // Resolved by the key binding function
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Move { motion: Motion, extend: bool },

    // Toolbar (F1-F4 or mouse)
    Button(ToolbarButton),
    MouseClick(u16, u16),
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(translate_event(event::read()?))
    } else {
        Ok(None)
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

pub fn translate_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Release events arrive when the terminal reports event types
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);

    let modifiers = key_event.modifiers;
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let extend = modifiers.contains(KeyModifiers::SHIFT);

    match key_event.code {
        KeyCode::Char('c') if ctrl => return Some(TuiEvent::ForceQuit),
        KeyCode::Char('q') if ctrl => return Some(TuiEvent::Quit),
        KeyCode::Esc => return Some(TuiEvent::Quit),
        KeyCode::F(1) => return Some(TuiEvent::Button(ToolbarButton::Bold)),
        KeyCode::F(2) => return Some(TuiEvent::Button(ToolbarButton::Underline)),
        KeyCode::F(3) => return Some(TuiEvent::Button(ToolbarButton::Heading)),
        KeyCode::F(4) => return Some(TuiEvent::Button(ToolbarButton::Save)),
        _ => {}
    }

    if let Some(command) = key_binding(&key_event) {
        return Some(TuiEvent::Command(command));
    }

    let motion = match key_event.code {
        KeyCode::Left => Motion::Left,
        KeyCode::Right => Motion::Right,
        KeyCode::Up => Motion::Up,
        KeyCode::Down => Motion::Down,
        KeyCode::Home if ctrl => Motion::DocumentStart,
        KeyCode::End if ctrl => Motion::DocumentEnd,
        KeyCode::Home => Motion::LineStart,
        KeyCode::End => Motion::LineEnd,
        KeyCode::Char(c)
            if !modifiers.intersects(
                KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META,
            ) =>
        {
            return Some(TuiEvent::InputChar(c));
        }
        _ => return None,
    };
    Some(TuiEvent::Move { motion, extend })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::command;
    use crate::core::panel::SAVE_COMMAND;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_chars_become_input() {
        assert_eq!(
            translate_event(press(KeyCode::Char('#'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('#'))
        );
        assert_eq!(
            translate_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('A'))
        );
    }

    #[test]
    fn test_ctrl_s_resolves_to_save_command() {
        assert_eq!(
            translate_event(press(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Command(SAVE_COMMAND))
        );
    }

    #[test]
    fn test_enter_is_split_block() {
        assert_eq!(
            translate_event(press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(TuiEvent::Command(command::SPLIT_BLOCK))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate_event(press(KeyCode::Esc, KeyModifiers::NONE)), Some(TuiEvent::Quit));
        assert_eq!(
            translate_event(press(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Quit)
        );
        assert_eq!(
            translate_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_function_keys_press_buttons() {
        assert_eq!(
            translate_event(press(KeyCode::F(3), KeyModifiers::NONE)),
            Some(TuiEvent::Button(ToolbarButton::Heading))
        );
    }

    #[test]
    fn test_shift_arrow_extends() {
        assert_eq!(
            translate_event(press(KeyCode::Right, KeyModifiers::SHIFT)),
            Some(TuiEvent::Move { motion: Motion::Right, extend: true })
        );
        assert_eq!(
            translate_event(press(KeyCode::End, KeyModifiers::CONTROL)),
            Some(TuiEvent::Move { motion: Motion::DocumentEnd, extend: false })
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate_event(Event::Key(release)), None);
    }

    #[test]
    fn test_left_click() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate_event(click), Some(TuiEvent::MouseClick(4, 1)));
    }
}
