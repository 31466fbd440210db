use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLUE: Color = Color::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Pure white fills are elided at layout time, so the renderer never
    /// has to paint an invisible background.
    pub const fn is_white(&self) -> bool {
        self.r == 255 && self.g == 255 && self.b == 255
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_detection() {
        assert!(Color::WHITE.is_white());
        assert!(!Color::gray(254).is_white());
        assert!(!Color::BLUE.is_white());
    }
}
