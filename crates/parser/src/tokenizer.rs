//! Line classification and inline scanning.
//!
//! Tokenization is total: every input string produces a valid [`Document`].
//! Malformed markup never errors — an unmatched delimiter simply stays in
//! the text as a literal character.

use crate::patterns::{BLOCKQUOTE, HEADING, INLINE};
use crate::token::{Document, Line, Token};
use vellum_types::TokenKind;

/// Tokenize raw input into a [`Document`], one [`Line`] per
/// newline-separated segment (a trailing newline yields a trailing empty
/// segment, and therefore a trailing blank line).
pub fn tokenize(input: &str) -> Document {
    Document { lines: input.split('\n').map(classify_line).collect() }
}

/// Classify one raw line in priority order: heading, blockquote, then
/// paragraph with inline scanning. Classification is independent per line;
/// no state crosses line boundaries.
fn classify_line(line: &str) -> Line {
    let mut tokens = if let Some(caps) = HEADING.captures(line) {
        let level = caps[1].len() as u8;
        let text = caps.get(2).map_or("", |m| m.as_str());
        let text = text.trim().trim_end_matches('#').trim_end();
        vec![Token::new(TokenKind::heading(level), text)]
    } else if let Some(caps) = BLOCKQUOTE.captures(line) {
        // A blockquote line is a single token; no inline styling inside.
        vec![Token::new(TokenKind::Blockquote, caps[1].trim())]
    } else {
        scan_inline(line, TokenKind::Paragraph)
    };

    // A line is never empty: blank and whitespace-only input still renders
    // as one empty paragraph row.
    if tokens.is_empty() {
        tokens.push(Token::new(TokenKind::Paragraph, ""));
    }
    tokens
}

/// Split paragraph text into styled spans and plain runs of `base` text.
/// Plain runs are trimmed and dropped when empty.
fn scan_inline(content: &str, base: TokenKind) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for span in INLINE.find_iter(content) {
        if span.start() > last {
            push_plain(&mut tokens, &content[last..span.start()], base);
        }
        tokens.push(classify_span(span.as_str(), base));
        last = span.end();
    }
    if last < content.len() {
        push_plain(&mut tokens, &content[last..], base);
    }
    tokens
}

fn push_plain(tokens: &mut Vec<Token>, text: &str, base: TokenKind) {
    let text = text.trim();
    if !text.is_empty() {
        tokens.push(Token::new(base, text));
    }
}

/// Re-classify a matched span by its own delimiters, stripping them. The
/// span shapes are fixed by the inline pattern, so the delimiter checks
/// here are exhaustive for real matches; the fallback only guards against
/// a future pattern change.
fn classify_span(span: &str, base: TokenKind) -> Token {
    if span.starts_with("![") {
        let (text, url) = split_link_span(span, 2);
        Token::with_reference(TokenKind::Image, text, url)
    } else if span.starts_with('[') {
        let (text, url) = split_link_span(span, 1);
        Token::with_reference(TokenKind::Link, text, url)
    } else if span.starts_with("**") {
        Token::new(TokenKind::Bold, &span[2..span.len() - 2])
    } else if span.starts_with('*') {
        Token::new(TokenKind::Italic, &span[1..span.len() - 1])
    } else if span.starts_with('`') {
        Token::new(TokenKind::Code, &span[1..span.len() - 1])
    } else {
        Token::new(base, span.trim())
    }
}

/// Split `[text](url)` / `![text](url)` into its two fields: display text up
/// to the first `]`, URL from after the `](` to the span's final `)`.
/// Nested brackets or parentheses are not interpreted; they stay verbatim in
/// whichever field they land in.
fn split_link_span(span: &str, text_start: usize) -> (&str, &str) {
    let bracket = span.find(']').unwrap_or(span.len() - 1);
    let text = &span[text_start..bracket];
    let url = &span[bracket + 2..span.len() - 1];
    (text, url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(line: &str) -> Vec<Token> {
        let doc = tokenize(line);
        assert_eq!(doc.len(), 1);
        doc.lines.into_iter().next().unwrap()
    }

    #[test]
    fn line_count_matches_newline_segments() {
        assert_eq!(tokenize("").len(), 1);
        assert_eq!(tokenize("a").len(), 1);
        assert_eq!(tokenize("a\nb").len(), 2);
        // Trailing newline yields a trailing empty segment.
        assert_eq!(tokenize("a\nb\n").len(), 3);
    }

    #[test]
    fn heading_levels_from_hash_run() {
        for level in 1..=6u8 {
            let line = format!("{} title", "#".repeat(level as usize));
            let tokens = single(&line);
            assert_eq!(tokens, vec![Token::new(TokenKind::Heading(level), "title")]);
        }
    }

    #[test]
    fn heading_strips_trailing_hashes_and_whitespace() {
        assert_eq!(single("## Hello ##"), vec![Token::new(TokenKind::Heading(2), "Hello")]);
        assert_eq!(single("#hello"), vec![Token::new(TokenKind::Heading(1), "hello")]);
    }

    #[test]
    fn leading_whitespace_disqualifies_heading() {
        assert_eq!(single("   # hello"), vec![Token::new(TokenKind::Paragraph, "# hello")]);
    }

    #[test]
    fn seven_hashes_is_not_a_heading() {
        assert_eq!(single("####### x"), vec![Token::new(TokenKind::Paragraph, "####### x")]);
    }

    #[test]
    fn bare_hash_run_is_an_empty_heading() {
        assert_eq!(single("###"), vec![Token::new(TokenKind::Heading(3), "")]);
    }

    #[test]
    fn blockquote_with_up_to_three_leading_spaces() {
        assert_eq!(single("> quoted"), vec![Token::new(TokenKind::Blockquote, "quoted")]);
        assert_eq!(single("   > quoted"), vec![Token::new(TokenKind::Blockquote, "quoted")]);
        // Four spaces is no longer a blockquote.
        assert_eq!(single("    > quoted"), vec![Token::new(TokenKind::Paragraph, "> quoted")]);
    }

    #[test]
    fn blockquote_applies_no_inline_styling() {
        assert_eq!(
            single("> has **bold** inside"),
            vec![Token::new(TokenKind::Blockquote, "has **bold** inside")]
        );
    }

    #[test]
    fn consecutive_blockquote_lines_stay_separate() {
        let doc = tokenize("> one\n> two");
        assert_eq!(doc.lines[0], vec![Token::new(TokenKind::Blockquote, "one")]);
        assert_eq!(doc.lines[1], vec![Token::new(TokenKind::Blockquote, "two")]);
    }

    #[test]
    fn inline_spans_in_reading_order() {
        assert_eq!(
            single("**bold** and *italic* and `code`"),
            vec![
                Token::new(TokenKind::Bold, "bold"),
                Token::new(TokenKind::Paragraph, "and"),
                Token::new(TokenKind::Italic, "italic"),
                Token::new(TokenKind::Paragraph, "and"),
                Token::new(TokenKind::Code, "code"),
            ]
        );
    }

    #[test]
    fn link_extracts_text_and_url() {
        assert_eq!(
            single("[text](http://x)"),
            vec![Token::with_reference(TokenKind::Link, "text", "http://x")]
        );
    }

    #[test]
    fn image_wins_over_link() {
        assert_eq!(
            single("![alt](http://x)"),
            vec![Token::with_reference(TokenKind::Image, "alt", "http://x")]
        );
    }

    #[test]
    fn link_inside_plain_text() {
        assert_eq!(
            single("see [docs](http://d) here"),
            vec![
                Token::new(TokenKind::Paragraph, "see"),
                Token::with_reference(TokenKind::Link, "docs", "http://d"),
                Token::new(TokenKind::Paragraph, "here"),
            ]
        );
    }

    #[test]
    fn unpaired_star_stays_literal() {
        assert_eq!(
            single("and * is used"),
            vec![Token::new(TokenKind::Paragraph, "and * is used")]
        );
    }

    #[test]
    fn adversarial_overlap_prefers_earliest_bold() {
        // Leftmost-first with bold listed before italic: the `**a*b**` pair
        // matches, the dangling `c*` stays literal.
        assert_eq!(
            single("**a*b**c*"),
            vec![
                Token::new(TokenKind::Bold, "a*b"),
                Token::new(TokenKind::Paragraph, "c*"),
            ]
        );
    }

    #[test]
    fn blank_and_whitespace_lines_yield_one_empty_paragraph_token() {
        assert_eq!(single(""), vec![Token::new(TokenKind::Paragraph, "")]);
        assert_eq!(single("   \t "), vec![Token::new(TokenKind::Paragraph, "")]);
    }

    #[test]
    fn tokenizer_is_total_on_garbage() {
        // No panic, no error, just literal text.
        for garbage in ["[", "![", "**", "`", "*](", "[a](", "![]("] {
            let tokens = single(garbage);
            assert!(!tokens.is_empty());
        }
    }
}
