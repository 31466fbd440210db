use vellum_style::TextStyle;

/// One atomic instruction to the rendering surface.
///
/// Word-level ops are cursor-implicit: the surface mirrors the engine's
/// cursor, advancing by each op's width or height. Only images carry an
/// explicit position, since they are placed outside the word flow.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Make `style` the active text style for subsequent words. Emitted
    /// only when the style actually changes.
    SetStyle(TextStyle),
    /// Place one word at the cursor. `width` includes the inter-word
    /// spacing; `filled` asks the surface to paint the word's background.
    DrawWord {
        text: String,
        width: f32,
        height: f32,
        filled: bool,
    },
    /// A clickable region covering exactly the next word's bounding box.
    /// Link granularity is per word by design.
    DrawLinkRegion {
        width: f32,
        height: f32,
        target: String,
    },
    /// End the current output line: move the cursor down by the given
    /// height and back to the left margin.
    AdvanceLine(f32),
    /// The next content belongs on a fresh page.
    AdvancePage,
    /// Place an image at an explicit position, already scaled to fit the
    /// content width.
    DrawImage {
        source: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// The filled indicator at the start of each blockquote sub-line.
    DrawBlockquoteMarker(f32),
}
