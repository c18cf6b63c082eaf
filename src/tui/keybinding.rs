//! Key binding resolution: physical key chords to editor command names.
//!
//! [`key_binding`] is the editor's binding function. It claims Ctrl/Cmd+S for
//! the save command and defers everything else to [`default_key_binding`].
//! Keys that resolve to `None` are handled as text input or caret motion.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::engine::command;
use crate::core::panel::SAVE_COMMAND;

/// Control, or the platform command key (reported as Super or Meta).
fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER | KeyModifiers::META)
}

pub fn key_binding(key: &KeyEvent) -> Option<&'static str> {
    if matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && has_command_modifier(key.modifiers)
    {
        return Some(SAVE_COMMAND);
    }
    default_key_binding(key)
}

pub fn default_key_binding(key: &KeyEvent) -> Option<&'static str> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char(c) if ctrl || alt => match c.to_ascii_lowercase() {
            'b' if ctrl => Some(command::BOLD),
            'i' => Some(command::ITALIC),
            'u' if ctrl => Some(command::UNDERLINE),
            'k' if ctrl => Some(command::CODE),
            'x' if ctrl => Some(command::STRIKETHROUGH),
            // Ctrl+H is Backspace in many terminals
            'h' if ctrl => Some(command::BACKSPACE),
            'w' if ctrl => Some(command::BACKSPACE_WORD),
            _ => None,
        },
        KeyCode::Backspace if ctrl || alt => Some(command::BACKSPACE_WORD),
        KeyCode::Backspace => Some(command::BACKSPACE),
        KeyCode::Delete => Some(command::DELETE),
        KeyCode::Enter => Some(command::SPLIT_BLOCK),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_s_is_save() {
        assert_eq!(
            key_binding(&key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Some(SAVE_COMMAND)
        );
    }

    #[test]
    fn test_cmd_s_is_save() {
        assert_eq!(
            key_binding(&key(KeyCode::Char('s'), KeyModifiers::SUPER)),
            Some(SAVE_COMMAND)
        );
        assert_eq!(
            key_binding(&key(KeyCode::Char('S'), KeyModifiers::META | KeyModifiers::SHIFT)),
            Some(SAVE_COMMAND)
        );
    }

    #[test]
    fn test_plain_s_is_text() {
        assert_eq!(key_binding(&key(KeyCode::Char('s'), KeyModifiers::NONE)), None);
        assert_eq!(key_binding(&key(KeyCode::Char('S'), KeyModifiers::SHIFT)), None);
    }

    #[test]
    fn test_default_bindings() {
        assert_eq!(key_binding(&key(KeyCode::Char('b'), KeyModifiers::CONTROL)), Some(command::BOLD));
        assert_eq!(key_binding(&key(KeyCode::Char('u'), KeyModifiers::CONTROL)), Some(command::UNDERLINE));
        assert_eq!(key_binding(&key(KeyCode::Char('i'), KeyModifiers::ALT)), Some(command::ITALIC));
        assert_eq!(key_binding(&key(KeyCode::Enter, KeyModifiers::NONE)), Some(command::SPLIT_BLOCK));
        assert_eq!(key_binding(&key(KeyCode::Backspace, KeyModifiers::NONE)), Some(command::BACKSPACE));
        assert_eq!(
            key_binding(&key(KeyCode::Backspace, KeyModifiers::ALT)),
            Some(command::BACKSPACE_WORD)
        );
        assert_eq!(key_binding(&key(KeyCode::Delete, KeyModifiers::NONE)), Some(command::DELETE));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(key_binding(&key(KeyCode::Left, KeyModifiers::NONE)), None);
        assert_eq!(key_binding(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)), None);
    }
}
