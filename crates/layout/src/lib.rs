use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Failed to resolve image '{path}': {message}")]
    ImageResolve { path: String, message: String },
}

pub mod cursor;
pub mod engine;
pub mod measure;
pub mod ops;

pub use cursor::Cursor;
pub use engine::{LayoutEngine, QUOTE_MARKER_WIDTH, WORD_SPACING};
pub use measure::{ImageSizer, TextMeasurer};
pub use ops::DrawOp;
