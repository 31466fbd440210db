use vellum_style::PageMetrics;
use vellum_types::Point;

/// The engine's drawing position on the active page. Two observable
/// states: at line start (x at the left margin) or mid-line. Created at the
/// start of a layout pass and discarded with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub x: f32,
    pub y: f32,
}

impl Cursor {
    pub fn at_origin(page: &PageMetrics) -> Self {
        let Point { x, y } = page.content_origin();
        Self { x, y }
    }

    pub fn at_line_start(&self, page: &PageMetrics) -> bool {
        self.x <= page.margins.left
    }
}
