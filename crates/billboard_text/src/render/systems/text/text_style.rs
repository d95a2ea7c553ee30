//! Persistable text styling

use serde::{Deserialize, Serialize};

use super::text_layout::{Halign, Valign};
use crate::render::primitives::Color;

/// Configuration for a rendered label
///
/// The bundle of draw settings a caller would keep in a chart or legend
/// style file. Defaults match the plain drawing path: right/ground
/// alignment, black text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Horizontal alignment relative to the anchor
    pub halign: Halign,
    /// Vertical alignment relative to the anchor
    pub valign: Valign,
    /// Flat text color
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            halign: Halign::Right,
            valign: Valign::Ground,
            color: Color::BLACK,
        }
    }
}
