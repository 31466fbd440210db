//! Shared helpers for the integration suites.

use vellum::{Converter, DrawOp, PipelineError};

pub type TestResult = Result<(), PipelineError>;

/// Convert markdown all the way to PDF bytes.
pub fn convert(markdown: &str) -> Result<Vec<u8>, PipelineError> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut buffer = Vec::new();
    Converter::new().generate_to_writer(markdown, &mut buffer)?;
    Ok(buffer)
}

/// Run only the parse + layout core.
pub fn draw_ops(markdown: &str) -> Result<Vec<DrawOp>, PipelineError> {
    let _ = env_logger::builder().is_test(true).try_init();
    Converter::new().to_draw_ops(markdown)
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
