use crate::error::RenderError;
use std::io::Write;
use vellum_layout::DrawOp;

/// A rendering surface: consumes the layout engine's ordered op stream and
/// serializes the finished document.
///
/// The surface owns everything the ops leave implicit — actual page
/// creation, font selection, color state, and the output byte format. It
/// mirrors the engine's cursor by replaying the same width/height
/// advances, which is why op order must be preserved exactly.
pub trait DocumentRenderer {
    /// Consume the draw-op stream for one conversion, in order.
    fn render(&mut self, ops: &[DrawOp]) -> Result<(), RenderError>;

    /// Serialize the rendered document into `writer`. Called after the op
    /// stream is exhausted.
    fn export_to(&mut self, writer: &mut dyn Write) -> Result<(), RenderError>;
}
