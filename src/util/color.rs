use serde::{Deserialize, Serialize};

/// An opaque display color, handed to the view layer for sticker materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to `0.0..=1.0`.
    pub fn to_f32(self) -> [f32; 3] {
        [self.r, self.g, self.b].map(|c| c as f32 / 255.0)
    }
}

pub const WHITE: Color = Color::new(255, 255, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const GREEN: Color = Color::new(0, 128, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const ORANGE: Color = Color::new(255, 165, 0);
pub const RED: Color = Color::new(255, 0, 0);
