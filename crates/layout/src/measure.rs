//! Collaborator seams the layout engine calls into but does not implement:
//! text measurement and image metadata resolution.

use crate::LayoutError;
use vellum_style::{FontFamily, FontWeight};
use vellum_types::Size;

/// Text-measurement capability supplied by the caller.
///
/// Implementations must be deterministic: identical inputs yield identical
/// widths, or layout stops being reproducible.
pub trait TextMeasurer {
    /// Width of `text` set in the given face at `size`, in document units.
    fn measure(&self, family: FontFamily, weight: FontWeight, size: f32, text: &str) -> f32;
}

/// Resolves an image reference to its intrinsic dimensions.
///
/// Failure here is fatal to the whole conversion; there is no partial
/// output and no retry.
pub trait ImageSizer {
    fn intrinsic_size(&self, source: &str) -> Result<Size, LayoutError>;
}
