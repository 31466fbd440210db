//! The style table: a static mapping from each [`TokenKind`] to the visual
//! attributes it renders with.

use crate::dimension::mm;
use crate::font::{FontFamily, FontStyle, FontWeight};
use serde::{Deserialize, Serialize};
use vellum_types::{Color, TokenKind};

/// Visual attributes for one token kind. Pure data; the layout engine reads
/// it, the renderer applies it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub style: FontStyle,
    /// Font size in points.
    pub size: f32,
    /// Vertical advance of a rendered row, in points.
    pub line_height: f32,
    pub color: Color,
    pub fill: Color,
}

impl TextStyle {
    const fn body(weight: FontWeight, style: FontStyle, color: Color, fill: Color) -> Self {
        Self {
            family: FontFamily::Helvetica,
            weight,
            style,
            size: 14.0,
            line_height: mm(6.0),
            color,
            fill,
        }
    }

    const fn heading(size: f32, line_height: f32) -> Self {
        Self {
            family: FontFamily::Helvetica,
            weight: FontWeight::Bold,
            style: FontStyle::Normal,
            size,
            line_height,
            color: Color::BLACK,
            fill: Color::WHITE,
        }
    }
}

const PARAGRAPH: TextStyle =
    TextStyle::body(FontWeight::Regular, FontStyle::Normal, Color::BLACK, Color::WHITE);
const BOLD: TextStyle =
    TextStyle::body(FontWeight::Bold, FontStyle::Normal, Color::BLACK, Color::WHITE);
const ITALIC: TextStyle =
    TextStyle::body(FontWeight::Regular, FontStyle::Oblique, Color::BLACK, Color::WHITE);
const LINK: TextStyle =
    TextStyle::body(FontWeight::Regular, FontStyle::Normal, Color::BLUE, Color::WHITE);
const BLOCKQUOTE: TextStyle =
    TextStyle::body(FontWeight::Regular, FontStyle::Normal, Color::BLACK, Color::gray(240));

const CODE: TextStyle = TextStyle {
    family: FontFamily::Courier,
    weight: FontWeight::Regular,
    style: FontStyle::Normal,
    size: 14.0,
    line_height: mm(6.0),
    color: Color::BLACK,
    fill: Color::gray(220),
};

// Sizes and line heights step down from level 1 to 6, with heights shared
// pairwise as in the original layout constants.
const HEADINGS: [TextStyle; 6] = [
    TextStyle::heading(22.0, mm(9.0)),
    TextStyle::heading(20.0, mm(9.0)),
    TextStyle::heading(18.0, mm(8.0)),
    TextStyle::heading(17.0, mm(8.0)),
    TextStyle::heading(16.0, mm(7.0)),
    TextStyle::heading(15.0, mm(7.0)),
];

/// Resolves token kinds to their [`TextStyle`]. The kind set is closed, so
/// this is an exhaustive match rather than a lookup table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleTable;

impl StyleTable {
    pub fn new() -> Self {
        Self
    }

    pub fn style_for(&self, kind: TokenKind) -> &'static TextStyle {
        match kind {
            TokenKind::Paragraph => &PARAGRAPH,
            TokenKind::Heading(level) => {
                let idx = (level.clamp(1, 6) - 1) as usize;
                &HEADINGS[idx]
            }
            TokenKind::Bold => &BOLD,
            TokenKind::Italic => &ITALIC,
            TokenKind::Code => &CODE,
            TokenKind::Link => &LINK,
            TokenKind::Image => &PARAGRAPH,
            TokenKind::Blockquote => &BLOCKQUOTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_sizes_decrease_monotonically() {
        let table = StyleTable::new();
        for level in 1..6u8 {
            let upper = table.style_for(TokenKind::Heading(level));
            let lower = table.style_for(TokenKind::Heading(level + 1));
            assert!(upper.size > lower.size, "h{} should be larger than h{}", level, level + 1);
            assert!(upper.line_height >= lower.line_height);
        }
    }

    #[test]
    fn code_uses_courier_on_gray() {
        let style = StyleTable::new().style_for(TokenKind::Code);
        assert_eq!(style.family, FontFamily::Courier);
        assert_eq!(style.fill, Color::gray(220));
    }

    #[test]
    fn links_are_blue() {
        let style = StyleTable::new().style_for(TokenKind::Link);
        assert_eq!(style.color, Color::BLUE);
    }

    #[test]
    fn out_of_range_heading_levels_clamp() {
        let table = StyleTable::new();
        assert_eq!(table.style_for(TokenKind::Heading(0)), table.style_for(TokenKind::Heading(1)));
        assert_eq!(table.style_for(TokenKind::Heading(9)), table.style_for(TokenKind::Heading(6)));
    }
}
