pub mod dimension;
pub mod font;
pub mod stylesheet;

pub use dimension::{mm, Margins, PageMetrics};
pub use font::{FontFamily, FontStyle, FontWeight};
pub use stylesheet::{StyleTable, TextStyle};
