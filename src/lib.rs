//! Vellum converts a small markdown dialect into a paginated PDF.
//!
//! The core is two passes: a total tokenizer that classifies lines into
//! styled token streams ([`vellum_parser`]) and a layout engine that
//! word-wraps and paginates them into an ordered draw-op stream
//! ([`vellum_layout`]). The op stream is consumed by a rendering surface
//! ([`vellum_render_lopdf`]); [`Converter`] wires the three together.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::Converter;

// Re-exports for callers that want to drive the passes individually.
pub use vellum_layout::{DrawOp, ImageSizer, LayoutEngine, TextMeasurer};
pub use vellum_parser::{tokenize, Document, Line, Token};
pub use vellum_render_core::DocumentRenderer;
pub use vellum_render_lopdf::{Base14Metrics, ImageCache, LopdfRenderer};
pub use vellum_style::{PageMetrics, StyleTable, TextStyle};
pub use vellum_types::TokenKind;
