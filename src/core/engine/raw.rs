//! Raw (storable) form of the document.
//!
//! The shape follows the familiar raw draft layout: a list of blocks, each
//! with its text, type and inline style ranges, plus an entity map. Entity
//! ranges, block data and the entity map are carried as empty values since
//! the editor has no entities. Offsets and lengths count chars.
//!
//! ```json
//! {
//!   "blocks": [
//!     {
//!       "key": "a1b2c",
//!       "text": "hello",
//!       "type": "header-one",
//!       "depth": 0,
//!       "inlineStyleRanges": [{ "offset": 0, "length": 5, "style": "BOLD" }],
//!       "entityRanges": [],
//!       "data": {}
//!     }
//!   ],
//!   "entityMap": {}
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::content::{ContentBlock, ContentState, generate_key};
use super::style::{BlockType, InlineStyle, StyleSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContent {
    pub blocks: Vec<RawBlock>,
    #[serde(default)]
    pub entity_map: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    #[serde(default)]
    pub key: String,
    pub text: String,
    #[serde(rename = "type", default)]
    pub block_type: BlockType,
    #[serde(default)]
    pub depth: u8,
    #[serde(default)]
    pub inline_style_ranges: Vec<RawStyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<Value>,
    #[serde(default)]
    pub data: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: InlineStyle,
}

impl RawContent {
    /// Convert document content to its raw form.
    pub fn from_content(content: &ContentState) -> Self {
        Self {
            blocks: content.blocks().iter().map(raw_block).collect(),
            entity_map: Map::new(),
        }
    }

    /// Rebuild document content. Style ranges reaching past the end of a
    /// block are clipped; blocks without a key get a fresh one.
    pub fn into_content(self) -> ContentState {
        ContentState::from_blocks(self.blocks.into_iter().map(content_block).collect())
    }
}

/// Serialize content to the JSON text stored under the document key.
pub fn serialize(content: &ContentState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&RawContent::from_content(content))
}

/// Parse stored JSON text back into content.
pub fn deserialize(json: &str) -> Result<ContentState, serde_json::Error> {
    serde_json::from_str::<RawContent>(json).map(RawContent::into_content)
}

fn raw_block(block: &ContentBlock) -> RawBlock {
    RawBlock {
        key: block.key.clone(),
        text: block.text().to_string(),
        block_type: block.block_type,
        depth: block.depth,
        inline_style_ranges: style_ranges(block.styles()),
        entity_ranges: Vec::new(),
        data: Map::new(),
    }
}

/// Collapse per-char style sets into one range per contiguous run of each style.
fn style_ranges(styles: &[StyleSet]) -> Vec<RawStyleRange> {
    let used: StyleSet = styles.iter().flatten().cloned().collect();
    let mut ranges = Vec::new();

    for style in used {
        let mut run_start: Option<usize> = None;
        for (offset, set) in styles.iter().enumerate() {
            match (set.contains(&style), run_start) {
                (true, None) => run_start = Some(offset),
                (false, Some(start)) => {
                    ranges.push(RawStyleRange {
                        offset: start,
                        length: offset - start,
                        style: style.clone(),
                    });
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            ranges.push(RawStyleRange {
                offset: start,
                length: styles.len() - start,
                style: style.clone(),
            });
        }
    }
    ranges
}

fn content_block(raw: RawBlock) -> ContentBlock {
    let key = if raw.key.is_empty() {
        generate_key()
    } else {
        raw.key
    };
    let len = raw.text.chars().count();

    let mut styles = vec![StyleSet::new(); len];
    for range in raw.inline_style_ranges {
        let end = range.offset.saturating_add(range.length).min(len);
        for set in styles.iter_mut().take(end).skip(range.offset) {
            set.insert(range.style.clone());
        }
    }

    ContentBlock::with_parts(key, raw.block_type, raw.depth, raw.text).with_styles(styles)
}
