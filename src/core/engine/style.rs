//! Inline styles and block types.
//!
//! Both are identified on the wire by the same string names the raw format
//! uses (`"BOLD"`, `"header-one"`, ...). Inline styles are open-ended: any
//! name that isn't built in becomes `InlineStyle::Custom` and is rendered
//! through the UI's style map. Block types are a closed set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named inline style applied to individual characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    Code,
    Strikethrough,
    /// Application-defined style, e.g. `COLOR-RED`.
    Custom(String),
}

impl InlineStyle {
    pub fn name(&self) -> &str {
        match self {
            InlineStyle::Bold => "BOLD",
            InlineStyle::Italic => "ITALIC",
            InlineStyle::Underline => "UNDERLINE",
            InlineStyle::Code => "CODE",
            InlineStyle::Strikethrough => "STRIKETHROUGH",
            InlineStyle::Custom(name) => name,
        }
    }
}

impl From<&str> for InlineStyle {
    fn from(name: &str) -> Self {
        match name {
            "BOLD" => InlineStyle::Bold,
            "ITALIC" => InlineStyle::Italic,
            "UNDERLINE" => InlineStyle::Underline,
            "CODE" => InlineStyle::Code,
            "STRIKETHROUGH" => InlineStyle::Strikethrough,
            other => InlineStyle::Custom(other.to_string()),
        }
    }
}

impl From<String> for InlineStyle {
    fn from(name: String) -> Self {
        match InlineStyle::from(name.as_str()) {
            InlineStyle::Custom(_) => InlineStyle::Custom(name),
            builtin => builtin,
        }
    }
}

impl From<InlineStyle> for String {
    fn from(style: InlineStyle) -> Self {
        match style {
            InlineStyle::Custom(name) => name,
            builtin => builtin.name().to_string(),
        }
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of inline styles carried by one character.
pub type StyleSet = BTreeSet<InlineStyle>;

/// Block-level type of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    #[default]
    Unstyled,
    HeaderOne,
    HeaderTwo,
    HeaderThree,
    HeaderFour,
    HeaderFive,
    HeaderSix,
    Blockquote,
    CodeBlock,
    UnorderedListItem,
    OrderedListItem,
}

impl BlockType {
    pub const ALL: [BlockType; 11] = [
        BlockType::Unstyled,
        BlockType::HeaderOne,
        BlockType::HeaderTwo,
        BlockType::HeaderThree,
        BlockType::HeaderFour,
        BlockType::HeaderFive,
        BlockType::HeaderSix,
        BlockType::Blockquote,
        BlockType::CodeBlock,
        BlockType::UnorderedListItem,
        BlockType::OrderedListItem,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockType::Unstyled => "unstyled",
            BlockType::HeaderOne => "header-one",
            BlockType::HeaderTwo => "header-two",
            BlockType::HeaderThree => "header-three",
            BlockType::HeaderFour => "header-four",
            BlockType::HeaderFive => "header-five",
            BlockType::HeaderSix => "header-six",
            BlockType::Blockquote => "blockquote",
            BlockType::CodeBlock => "code-block",
            BlockType::UnorderedListItem => "unordered-list-item",
            BlockType::OrderedListItem => "ordered-list-item",
        }
    }

    /// Heading level 1..=6, or `None` for non-heading blocks.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            BlockType::HeaderOne => Some(1),
            BlockType::HeaderTwo => Some(2),
            BlockType::HeaderThree => Some(3),
            BlockType::HeaderFour => Some(4),
            BlockType::HeaderFive => Some(5),
            BlockType::HeaderSix => Some(6),
            _ => None,
        }
    }

    pub fn is_list_item(self) -> bool {
        matches!(
            self,
            BlockType::UnorderedListItem | BlockType::OrderedListItem
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown block type: {0}")]
pub struct UnknownBlockType(pub String);

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|block_type| block_type.name() == s)
            .ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
