//! The closed vocabulary of semantic token kinds shared by the tokenizer
//! and the style table.
//!
//! The tokenizer only ever depends on this enum, never on the rendering
//! values a kind maps to.

use serde::{Deserialize, Serialize};

/// Semantic classification of a piece of inline or block content.
///
/// `Heading` carries its level (1-6) as data; everything else is a bare
/// variant. The set is closed: downstream consumers dispatch with an
/// exhaustive `match`, not dynamic lookup.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Paragraph,
    Heading(u8),
    Bold,
    Italic,
    Code,
    Link,
    Image,
    Blockquote,
}

impl TokenKind {
    /// Construct a heading kind, clamping the level into the 1-6 range the
    /// tokenizer can actually produce.
    pub fn heading(level: u8) -> Self {
        TokenKind::Heading(level.clamp(1, 6))
    }
}
