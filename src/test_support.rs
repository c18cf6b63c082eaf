//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;

use crate::core::engine;
use crate::core::panel::RichTextPanel;
use crate::core::storage::{MemoryStore, STORAGE_KEY, Store, StoreError};

/// A store whose reads and writes always fail.
pub struct FailingStore;

impl Store for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "read refused")))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io(io::Error::new(io::ErrorKind::StorageFull, "quota exceeded")))
    }
}

/// Creates a panel over an empty in-memory store.
pub fn test_panel() -> RichTextPanel {
    RichTextPanel::load(Box::new(MemoryStore::new()), STORAGE_KEY)
}

/// Plain text of the document currently in the panel's store, if any.
pub fn stored_text(panel: &RichTextPanel) -> Option<String> {
    let json = panel.store().get(panel.key()).ok()??;
    engine::raw::deserialize(&json).ok().map(|c| c.plain_text())
}

/// Creates a test App around `test_panel()`.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(test_panel())
}
