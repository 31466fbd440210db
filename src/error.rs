// src/error.rs
//! The unified error type for a whole conversion.

use thiserror::Error;
use vellum_layout::LayoutError;
use vellum_render_core::RenderError;

/// Everything that can abort a conversion. The tokenizer never appears
/// here: it is total by construction, so failures only come from the
/// collaborators around the core.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}
