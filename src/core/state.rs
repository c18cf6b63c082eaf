//! # Application State
//!
//! Core state for Draftpad. Presentation state (button hit areas, scroll
//! offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── panel: RichTextPanel     // document + store
//! ├── status_message: String   // status line text
//! └── show_hints: bool         // render the trigger hints
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::panel::RichTextPanel;
use crate::core::storage::FileStore;

pub struct App {
    pub panel: RichTextPanel,
    pub status_message: String,
    pub show_hints: bool,
}

impl App {
    pub fn new(panel: RichTextPanel) -> Self {
        Self {
            panel,
            status_message: String::new(),
            show_hints: true,
        }
    }

    /// Open the file store named by the config and load the document from it.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let store = FileStore::new(&config.storage_path);
        let panel = RichTextPanel::load(Box::new(store), config.storage_key.clone())
            .with_save_command(config.save_on_ctrl_s);
        Self {
            show_hints: config.show_hints,
            ..Self::new(panel)
        }
    }
}
