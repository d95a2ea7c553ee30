//! Flat RGB color type

use serde::{Deserialize, Serialize};

/// Flat RGB color with components in the `0.0..=1.0` range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Color {
    /// Opaque black
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    /// Opaque white
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    /// Pure red
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    /// Pure green
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    /// Pure blue
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    /// Create a color from RGB components
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}
