pub mod color;
pub mod geometry;
pub mod token;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use token::TokenKind;
