//! Wires the conversion pipeline together: tokenizer → layout engine →
//! rendering surface.

use crate::error::PipelineError;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use vellum_layout::{DrawOp, LayoutEngine};
use vellum_parser::tokenize;
use vellum_render_core::DocumentRenderer;
use vellum_render_lopdf::{Base14Metrics, ImageCache, LopdfRenderer};
use vellum_style::{PageMetrics, StyleTable};

/// One configured conversion pipeline.
///
/// The converter is stateless across runs — the image cache only memoizes
/// file reads — so a single instance can convert any number of documents
/// and always produce the same output for the same input.
pub struct Converter {
    engine: LayoutEngine,
    measurer: Base14Metrics,
    images: Arc<ImageCache>,
}

impl Converter {
    pub fn new() -> Self {
        Self::with_page(PageMetrics::a4())
    }

    pub fn with_page(page: PageMetrics) -> Self {
        Self {
            engine: LayoutEngine::new(page, StyleTable::new()),
            measurer: Base14Metrics::new(),
            images: Arc::new(ImageCache::new()),
        }
    }

    /// Run the parse + layout core only, returning the inspectable op
    /// stream instead of rendering it.
    pub fn to_draw_ops(&self, markdown: &str) -> Result<Vec<DrawOp>, PipelineError> {
        let doc = tokenize(markdown);
        log::debug!("tokenized {} input lines", doc.len());
        Ok(self.engine.layout(&doc, &self.measurer, self.images.as_ref())?)
    }

    /// Convert markdown and serialize the PDF into `writer`.
    pub fn generate_to_writer<W: Write>(
        &self,
        markdown: &str,
        writer: &mut W,
    ) -> Result<(), PipelineError> {
        let ops = self.to_draw_ops(markdown)?;
        let mut renderer = LopdfRenderer::new(*self.engine.page(), self.images.clone());
        renderer.render(&ops)?;
        renderer.export_to(writer)?;
        Ok(())
    }

    /// Convert markdown and write the PDF to `path`.
    ///
    /// The document is rendered into memory first and only written once
    /// complete, so a failed conversion never leaves a partial file behind.
    pub fn generate_to_file(&self, markdown: &str, path: &Path) -> Result<(), PipelineError> {
        let mut buffer = Vec::new();
        self.generate_to_writer(markdown, &mut buffer)?;
        fs::write(path, &buffer)?;
        log::info!("wrote {} bytes to {}", buffer.len(), path.display());
        Ok(())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
