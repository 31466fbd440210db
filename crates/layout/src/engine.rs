//! The layout pass: tokenized lines in, an ordered draw-op stream out.
//!
//! Layout is strictly sequential. The cursor is threaded through every
//! token in reading order, and the emitted ops are only meaningful in that
//! order; no part of this pass may be reordered or run concurrently.

use crate::cursor::Cursor;
use crate::measure::{ImageSizer, TextMeasurer};
use crate::ops::DrawOp;
use crate::LayoutError;
use vellum_parser::{Document, Token};
use vellum_style::{PageMetrics, StyleTable, TextStyle};
use vellum_types::TokenKind;

/// Fixed spacing added after each measured word, in points.
pub const WORD_SPACING: f32 = vellum_style::mm(2.0);

/// Width of the filled blockquote indicator, in points. The rendering
/// surface must advance by the same amount when it paints one.
pub const QUOTE_MARKER_WIDTH: f32 = vellum_style::mm(2.0);

/// Word-wraps and paginates a [`Document`] into [`DrawOp`]s.
///
/// The engine owns no mutable state between runs: [`layout`] is a pure
/// transformation, so laying out the same document twice yields an
/// identical op stream.
///
/// [`layout`]: LayoutEngine::layout
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    page: PageMetrics,
    styles: StyleTable,
}

impl LayoutEngine {
    pub fn new(page: PageMetrics, styles: StyleTable) -> Self {
        Self { page, styles }
    }

    pub fn page(&self) -> &PageMetrics {
        &self.page
    }

    pub fn layout(
        &self,
        doc: &Document,
        measurer: &dyn TextMeasurer,
        images: &dyn ImageSizer,
    ) -> Result<Vec<DrawOp>, LayoutError> {
        let mut pass = LayoutPass {
            page: &self.page,
            measurer,
            cursor: Cursor::at_origin(&self.page),
            active_style: None,
            ops: Vec::new(),
        };

        for line in doc {
            // The unconditional end-of-line advance uses the tallest style
            // on the line, so a heading next to body text keeps its spacing.
            let dominant = line
                .iter()
                .map(|t| self.styles.style_for(t.kind).line_height)
                .fold(0.0f32, f32::max);

            for token in line {
                let style = self.styles.style_for(token.kind);
                pass.set_style(style);
                match token.kind {
                    TokenKind::Image => pass.place_image(token, style, images)?,
                    _ => pass.place_words(token, style),
                }
            }

            pass.advance_line(dominant);
        }

        log::debug!(
            "laid out {} lines into {} draw ops",
            doc.len(),
            pass.ops.len()
        );
        Ok(pass.ops)
    }
}

/// Mutable state for one run over a document. Lives exactly as long as the
/// pass; nothing here survives into the next conversion.
struct LayoutPass<'a> {
    page: &'a PageMetrics,
    measurer: &'a dyn TextMeasurer,
    cursor: Cursor,
    active_style: Option<TextStyle>,
    ops: Vec<DrawOp>,
}

impl LayoutPass<'_> {
    fn set_style(&mut self, style: &TextStyle) {
        if self.active_style.as_ref() != Some(style) {
            self.ops.push(DrawOp::SetStyle(*style));
            self.active_style = Some(*style);
        }
    }

    fn right_edge(&self) -> f32 {
        self.page.margins.left + self.page.content_width()
    }

    /// Close the current output line and drop to the next one, starting a
    /// new page first if the next row would not fit.
    fn advance_line(&mut self, height: f32) {
        self.ops.push(DrawOp::AdvanceLine(height));
        self.cursor.x = self.page.margins.left;
        self.cursor.y += height;
        if self.cursor.y + height > self.page.content_bottom() {
            self.advance_page();
        }
    }

    fn advance_page(&mut self) {
        self.ops.push(DrawOp::AdvancePage);
        self.cursor = Cursor::at_origin(self.page);
    }

    fn emit_quote_marker(&mut self, height: f32) {
        self.ops.push(DrawOp::DrawBlockquoteMarker(height));
        self.cursor.x += QUOTE_MARKER_WIDTH;
    }

    /// Lay out one token's words, wrapping before the right edge. Handles
    /// the blockquote marker and per-word link regions.
    fn place_words(&mut self, token: &Token, style: &TextStyle) {
        let quoted = token.kind == TokenKind::Blockquote;
        if quoted {
            self.emit_quote_marker(style.line_height);
        }

        // Bold and italic spans never paint a background; everything else
        // fills unless the fill color would be invisible anyway.
        let filled = match token.kind {
            TokenKind::Bold | TokenKind::Italic => false,
            _ => !style.fill.is_white(),
        };

        for word in token.content.split_whitespace() {
            let measured =
                self.measurer
                    .measure(style.family, style.weight, style.size, word);

            if self.cursor.x + WORD_SPACING + measured > self.right_edge() {
                self.advance_line(style.line_height);
                if quoted {
                    self.emit_quote_marker(style.line_height);
                }
            }

            let placed = measured + WORD_SPACING;
            if token.kind == TokenKind::Link {
                self.ops.push(DrawOp::DrawLinkRegion {
                    width: placed,
                    height: style.line_height,
                    target: token.reference.clone().unwrap_or_default(),
                });
            }
            self.ops.push(DrawOp::DrawWord {
                text: word.to_string(),
                width: placed,
                height: style.line_height,
                filled,
            });
            self.cursor.x += placed;
        }
    }

    /// Images break the word flow: they always start their own line, are
    /// scaled down to the content width when wider, and advance the cursor
    /// by their drawn height.
    fn place_image(
        &mut self,
        token: &Token,
        style: &TextStyle,
        images: &dyn ImageSizer,
    ) -> Result<(), LayoutError> {
        self.advance_line(style.line_height);

        let source = token.reference.clone().unwrap_or_default();
        let intrinsic = images.intrinsic_size(&source)?;

        let content_width = self.page.content_width();
        let (width, height) = if intrinsic.width > content_width {
            (content_width, intrinsic.height * content_width / intrinsic.width)
        } else {
            (intrinsic.width, intrinsic.height)
        };

        if self.cursor.y + height > self.page.content_bottom() {
            self.advance_page();
        }

        self.ops.push(DrawOp::DrawImage {
            source,
            x: self.cursor.x,
            y: self.cursor.y,
            width,
            height,
        });
        self.cursor.y += height;
        Ok(())
    }
}
