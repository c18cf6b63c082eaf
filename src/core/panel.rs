//! # Rich-Text Panel
//!
//! Owns the current `EditorState` and keeps the stored document in step with
//! it. Every accepted edit goes through [`RichTextPanel::on_change`], which
//! adopts the new state and immediately writes its serialized content to the
//! store, so what is on disk always matches what is on screen.
//!
//! ```text
//! gesture ──► panel op ──► engine op ──► new EditorState
//!                                             │
//!                                        on_change()
//!                                             │
//!                              adopt + serialize + store.set()
//! ```

use log::{debug, info, warn};

use crate::core::engine::{self, BlockType, EditorState, InlineStyle, Motion};
use crate::core::storage::{Store, StoreError};

/// Command produced by the Ctrl/Cmd+S binding.
pub const SAVE_COMMAND: &str = "save-editor-content";

/// Whether a handler consumed an input or command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleValue {
    Handled,
    NotHandled,
}

/// What a trigger character toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
    Block(BlockType),
    /// Inline style by name, so custom styles fit in a static table.
    Inline(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    pub ch: char,
    pub action: TriggerAction,
    /// Short description for the hint lines.
    pub label: &'static str,
}

/// Characters that format an empty line instead of being typed.
pub const TRIGGERS: &[Trigger] = &[
    Trigger {
        ch: '#',
        action: TriggerAction::Block(BlockType::HeaderOne),
        label: "Heading",
    },
    Trigger {
        ch: '*',
        action: TriggerAction::Inline("BOLD"),
        label: "Bold",
    },
    Trigger {
        ch: '^',
        action: TriggerAction::Inline("UNDERLINE"),
        label: "Underline",
    },
    Trigger {
        ch: '@',
        action: TriggerAction::Inline("COLOR-RED"),
        label: "Red text",
    },
];

pub fn trigger_for(ch: char) -> Option<&'static Trigger> {
    TRIGGERS.iter().find(|trigger| trigger.ch == ch)
}

pub struct RichTextPanel {
    state: EditorState,
    store: Box<dyn Store>,
    key: String,
    save_command_enabled: bool,
}

impl RichTextPanel {
    /// Create the panel, reading the initial document from `store`.
    ///
    /// A missing record, a failing read or a record that doesn't parse all
    /// start an empty document.
    pub fn load(store: Box<dyn Store>, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = match store.get(&key) {
            Ok(Some(json)) => match engine::raw::deserialize(&json) {
                Ok(content) => {
                    info!("Loaded document '{}' ({} blocks)", key, content.block_count());
                    EditorState::with_content(content)
                }
                Err(e) => {
                    warn!("Stored document '{}' is unreadable, starting empty: {}", key, e);
                    EditorState::empty()
                }
            },
            Ok(None) => {
                info!("No stored document '{}', starting empty", key);
                EditorState::empty()
            }
            Err(e) => {
                warn!("Failed to read stored document '{}', starting empty: {}", key, e);
                EditorState::empty()
            }
        };

        Self {
            state,
            store,
            key,
            save_command_enabled: true,
        }
    }

    /// Whether the save command is routed to [`save`](Self::save). When
    /// disabled it falls through as an unhandled command.
    pub fn with_save_command(mut self, enabled: bool) -> Self {
        self.save_command_enabled = enabled;
        self
    }

    pub fn editor_state(&self) -> &EditorState {
        &self.state
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Adopt `next` as the current state and persist it if it differs.
    pub fn on_change(&mut self, next: EditorState) -> Result<(), StoreError> {
        if next == self.state {
            return Ok(());
        }
        self.state = next;
        self.persist()
    }

    pub fn toggle_inline_style(&mut self, style: &InlineStyle) -> Result<(), StoreError> {
        let next = self.state.toggle_inline_style(style);
        self.on_change(next)
    }

    pub fn toggle_block_type(&mut self, block_type: BlockType) -> Result<(), StoreError> {
        let next = self.state.toggle_block_type(block_type);
        self.on_change(next)
    }

    /// Toggle a block type by name; unknown names change nothing.
    pub fn toggle_block_type_named(&mut self, name: &str) -> Result<(), StoreError> {
        let next = self.state.toggle_block_type_named(name);
        self.on_change(next)
    }

    /// Handle a named editing command.
    ///
    /// `Handled` means a new state was adopted (or the document was saved);
    /// `NotHandled` leaves the state untouched so the caller can fall back to
    /// default handling.
    pub fn handle_key_command(&mut self, command: &str) -> Result<HandleValue, StoreError> {
        if command == SAVE_COMMAND && self.save_command_enabled {
            self.save()?;
            return Ok(HandleValue::Handled);
        }

        match self.state.handle_key_command(command) {
            Some(next) => {
                self.on_change(next)?;
                Ok(HandleValue::Handled)
            }
            None => {
                debug!("Key command '{}' not handled", command);
                Ok(HandleValue::NotHandled)
            }
        }
    }

    /// Called before `ch` is inserted. Trigger characters typed into a blank
    /// block apply their toggle and are swallowed.
    pub fn handle_before_input(&mut self, ch: char) -> Result<HandleValue, StoreError> {
        if !self.state.start_block().is_blank() {
            return Ok(HandleValue::NotHandled);
        }
        let Some(trigger) = trigger_for(ch) else {
            return Ok(HandleValue::NotHandled);
        };

        debug!("Trigger '{}' -> {:?}", ch, trigger.action);
        let next = match trigger.action {
            TriggerAction::Block(block_type) => self.state.toggle_block_type(block_type),
            TriggerAction::Inline(name) => self.state.toggle_inline_style(&InlineStyle::from(name)),
        };
        self.on_change(next)?;
        Ok(HandleValue::Handled)
    }

    /// Insert text at the caret (default input handling and paste).
    pub fn insert_text(&mut self, text: &str) -> Result<(), StoreError> {
        let next = self.state.insert_text(text);
        self.on_change(next)
    }

    /// Default handling for a command nobody claimed. Returns whether the
    /// command was recognised.
    pub fn apply_default_command(&mut self, command: &str) -> Result<bool, StoreError> {
        match self.state.apply_default_command(command) {
            Some(next) => {
                self.on_change(next)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn move_caret(&mut self, motion: Motion, extend: bool) -> Result<(), StoreError> {
        let next = self.state.move_caret(motion, extend);
        self.on_change(next)
    }

    /// Write the current document regardless of whether it changed.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.persist()?;
        info!("Saved document '{}'", self.key);
        Ok(())
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let json = engine::raw::serialize(self.state.content())?;
        self.store.set(&self.key, &json)
    }
}
