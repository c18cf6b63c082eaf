//! # Actions
//!
//! Everything the user can do to the editor becomes an `Action`.
//! Clicking Bold is `Action::ToggleInlineStyle(Bold)`, typing a character is
//! `Action::Input(c)`, Ctrl+S is `Action::KeyCommand("save-editor-content")`.
//!
//! `update()` routes the action to the panel, which persists the document as
//! part of adopting each new state, and returns an `Effect` for the adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ stored record) + Effect
//! ```

use chrono::Local;
use log::debug;

use crate::core::engine::{BlockType, InlineStyle, Motion};
use crate::core::panel::{HandleValue, SAVE_COMMAND};
use crate::core::state::App;
use crate::core::storage::StoreError;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleInlineStyle(InlineStyle),
    ToggleBlockType(BlockType),
    /// Named command from the key binding layer.
    KeyCommand(String),
    /// A typed character, offered to the trigger handler first.
    Input(char),
    Paste(String),
    Move { motion: Motion, extend: bool },
    Save,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Result<Effect, StoreError> {
    debug!("update: {:?}", action);
    match action {
        Action::ToggleInlineStyle(style) => app.panel.toggle_inline_style(&style)?,
        Action::ToggleBlockType(block_type) => app.panel.toggle_block_type(block_type)?,
        Action::KeyCommand(command) => {
            match app.panel.handle_key_command(&command)? {
                HandleValue::Handled if command == SAVE_COMMAND => mark_saved(app),
                HandleValue::Handled => {}
                HandleValue::NotHandled => {
                    if !app.panel.apply_default_command(&command)? {
                        debug!("No default handling for '{}'", command);
                    }
                }
            }
        }
        Action::Input(ch) => {
            if app.panel.handle_before_input(ch)? == HandleValue::NotHandled {
                let mut buf = [0u8; 4];
                app.panel.insert_text(ch.encode_utf8(&mut buf))?;
            }
        }
        Action::Paste(text) => {
            // Normalize CRLF from terminals that paste Windows line endings
            let text = text.replace("\r\n", "\n").replace('\r', "\n");
            app.panel.insert_text(&text)?;
        }
        Action::Move { motion, extend } => app.panel.move_caret(motion, extend)?,
        Action::Save => {
            app.panel.save()?;
            mark_saved(app);
        }
        Action::Quit => return Ok(Effect::Quit),
    }
    Ok(Effect::None)
}

fn mark_saved(app: &mut App) {
    app.status_message = format!("Saved {}", Local::now().format("%H:%M:%S"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::command;
    use crate::core::storage::STORAGE_KEY;
    use crate::test_support::{stored_text, test_app};

    fn type_str(app: &mut App, text: &str) {
        for ch in text.chars() {
            update(app, Action::Input(ch)).unwrap();
        }
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit).unwrap(), Effect::Quit);
    }

    #[test]
    fn test_typing_persists_each_character() {
        let mut app = test_app();
        type_str(&mut app, "hello");
        assert_eq!(stored_text(&app.panel).as_deref(), Some("hello"));
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_trigger_then_text() {
        let mut app = test_app();
        type_str(&mut app, "#Heading");
        let block = app.panel.editor_state().start_block();
        assert_eq!(block.block_type, BlockType::HeaderOne);
        assert_eq!(block.text(), "Heading");
    }

    #[test]
    fn test_unclaimed_command_falls_back_to_default() {
        let mut app = test_app();
        type_str(&mut app, "ab");
        update(&mut app, Action::KeyCommand(command::SPLIT_BLOCK.to_string())).unwrap();
        type_str(&mut app, "c");
        update(&mut app, Action::KeyCommand(command::BACKSPACE.to_string())).unwrap();
        update(&mut app, Action::KeyCommand(command::BACKSPACE.to_string())).unwrap();
        assert_eq!(app.panel.editor_state().content().plain_text(), "ab");
    }

    #[test]
    fn test_save_command_sets_status() {
        let mut app = test_app();
        update(&mut app, Action::KeyCommand(SAVE_COMMAND.to_string())).unwrap();
        assert!(app.status_message.starts_with("Saved "));
        assert!(app.panel.store().get(STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_save_button() {
        let mut app = test_app();
        update(&mut app, Action::Save).unwrap();
        assert!(app.status_message.starts_with("Saved "));
    }

    #[test]
    fn test_paste_normalizes_line_endings() {
        let mut app = test_app();
        update(&mut app, Action::Paste("one\r\ntwo".to_string())).unwrap();
        assert_eq!(app.panel.editor_state().content().block_count(), 2);
        assert_eq!(stored_text(&app.panel).as_deref(), Some("one\ntwo"));
    }

    #[test]
    fn test_toolbar_actions() {
        let mut app = test_app();
        update(&mut app, Action::ToggleBlockType(BlockType::HeaderOne)).unwrap();
        update(&mut app, Action::ToggleInlineStyle(InlineStyle::Underline)).unwrap();
        type_str(&mut app, "x");
        let block = app.panel.editor_state().start_block();
        assert_eq!(block.block_type, BlockType::HeaderOne);
        assert!(block.styles()[0].contains(&InlineStyle::Underline));
    }
}
