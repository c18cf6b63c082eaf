//! Terminal rendering of editor styles.
//!
//! Inline styles map onto ratatui modifiers and colors. `COLOR-RED` is the
//! one custom style the editor defines; other custom names render plain.
//! Block types get a base style and a line prefix.

use ratatui::style::{Color, Modifier, Style};

use crate::core::engine::{BlockType, InlineStyle, StyleSet};

/// Name of the red text style toggled by the `@` trigger.
pub const COLOR_RED: &str = "COLOR-RED";

pub fn inline_style(style: &InlineStyle) -> Style {
    match style {
        InlineStyle::Bold => Style::new().add_modifier(Modifier::BOLD),
        InlineStyle::Italic => Style::new().add_modifier(Modifier::ITALIC),
        InlineStyle::Underline => Style::new().add_modifier(Modifier::UNDERLINED),
        InlineStyle::Code => Style::new().bg(Color::DarkGray),
        InlineStyle::Strikethrough => Style::new().add_modifier(Modifier::CROSSED_OUT),
        InlineStyle::Custom(name) if name == COLOR_RED => Style::new().fg(Color::Red),
        InlineStyle::Custom(_) => Style::new(),
    }
}

/// Combined style of a character carrying `styles`, on top of `base`.
pub fn char_style(base: Style, styles: &StyleSet) -> Style {
    styles
        .iter()
        .fold(base, |acc, style| acc.patch(inline_style(style)))
}

pub fn block_style(block_type: BlockType) -> Style {
    match block_type {
        BlockType::HeaderOne => Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        BlockType::HeaderTwo | BlockType::HeaderThree => {
            Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        }
        BlockType::HeaderFour | BlockType::HeaderFive | BlockType::HeaderSix => {
            Style::new().add_modifier(Modifier::BOLD)
        }
        BlockType::Blockquote => Style::new().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        BlockType::CodeBlock => Style::new().bg(Color::DarkGray),
        BlockType::Unstyled | BlockType::UnorderedListItem | BlockType::OrderedListItem => {
            Style::new()
        }
    }
}

/// Text drawn before the first visual line of a block.
///
/// `ordinal` is the 1-based position of the block in its run of ordered
/// list items.
pub fn block_prefix(block_type: BlockType, ordinal: usize) -> String {
    match block_type {
        BlockType::UnorderedListItem => "• ".to_string(),
        BlockType::OrderedListItem => format!("{}. ", ordinal),
        BlockType::Blockquote => "│ ".to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_custom_style() {
        let style = inline_style(&InlineStyle::from(COLOR_RED));
        assert_eq!(style.fg, Some(Color::Red));
        assert_eq!(inline_style(&InlineStyle::from("COLOR-TEAL")), Style::new());
    }

    #[test]
    fn test_char_style_combines() {
        let styles: StyleSet = [InlineStyle::Bold, InlineStyle::Underline].into_iter().collect();
        let style = char_style(Style::new(), &styles);
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(block_prefix(BlockType::UnorderedListItem, 1), "• ");
        assert_eq!(block_prefix(BlockType::OrderedListItem, 3), "3. ");
        assert_eq!(block_prefix(BlockType::Unstyled, 1), "");
    }
}
