//! # TUI Components
//!
//! ## Component Architecture
//!
//! Stateless components receive everything as props each frame:
//! - `TitleBar`: editor title plus status message
//! - `Hints`: one help line per trigger character
//!
//! Stateful components split into a persistent state struct owned by
//! `TuiState` and a per-frame wrapper that borrows it alongside props:
//! - `Toolbar` / `ToolbarState`: buttons and their last hit areas
//! - `EditorView` / `EditorViewState`: the document surface and its scroll
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── toolbar.rs       (Bold / Underline / Heading / Save)
//! ├── editor_view/     (Wrapped document with caret and selection)
//! └── hints.rs         (Trigger help lines)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod editor_view;
pub mod hints;
pub mod toolbar;
pub use editor_view::{EditorView, EditorViewState};
pub use hints::Hints;
pub use toolbar::{Toolbar, ToolbarButton, ToolbarState};
