pub mod images;
pub mod metrics;
pub mod renderer;

pub use images::{ImageCache, ImageData, ImageFormat};
pub use metrics::Base14Metrics;
pub use renderer::LopdfRenderer;

#[cfg(test)]
mod renderer_test;
