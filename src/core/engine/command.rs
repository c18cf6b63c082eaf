//! Editor command names produced by key bindings and consumed by the
//! command handlers.

pub const BOLD: &str = "bold";
pub const ITALIC: &str = "italic";
pub const UNDERLINE: &str = "underline";
pub const CODE: &str = "code";
pub const STRIKETHROUGH: &str = "strikethrough";

pub const BACKSPACE: &str = "backspace";
pub const BACKSPACE_WORD: &str = "backspace-word";
pub const DELETE: &str = "delete";
pub const SPLIT_BLOCK: &str = "split-block";
