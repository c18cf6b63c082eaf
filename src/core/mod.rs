//! # Core Application Logic
//!
//! This module contains Draftpad's editing logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • engine (doc values)  │
//!                    │  • panel (state+store)  │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No terminal, no UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`engine`]: immutable rich-text editor values and their operations
//! - [`storage`]: the `Store` trait, file-backed and in-memory stores
//! - [`panel`]: `RichTextPanel`, the document holder that persists on change
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings file and override resolution

pub mod action;
pub mod config;
pub mod engine;
pub mod panel;
pub mod state;
pub mod storage;
