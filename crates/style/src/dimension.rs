//! Page geometry primitives. All values are PDF points; `mm` converts from
//! the millimetre figures the style constants are defined in.

use serde::{Deserialize, Serialize};
use vellum_types::{Point, Size};

/// Millimetres to PDF points (1 pt = 1/72 in).
pub const fn mm(value: f32) -> f32 {
    value * 72.0 / 25.4
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub const fn all(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }
}

/// Physical page size plus margins; everything the layout engine needs to
/// know about where content may go.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub size: Size,
    pub margins: Margins,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageMetrics {
    /// A4 portrait with 10 mm margins, the geometry every conversion uses
    /// unless the caller overrides it.
    pub const fn a4() -> Self {
        Self {
            size: Size { width: mm(210.0), height: mm(297.0) },
            margins: Margins::all(mm(10.0)),
        }
    }

    /// Width available to content between the side margins.
    pub fn content_width(&self) -> f32 {
        self.size.width - self.margins.left - self.margins.right
    }

    /// Height available to content between the top and bottom margins.
    pub fn content_height(&self) -> f32 {
        self.size.height - self.margins.top - self.margins.bottom
    }

    /// Top-left corner of the content area; where the cursor starts on
    /// every fresh page.
    pub fn content_origin(&self) -> Point {
        Point::new(self.margins.left, self.margins.top)
    }

    /// The y coordinate content must not cross.
    pub fn content_bottom(&self) -> f32 {
        self.margins.top + self.content_height()
    }
}
