//! Billboard text layout
//!
//! Converts a string plus alignment settings into the pixel-space origin
//! offsets and total footprint used by both rasterization and bounds
//! derivation. Pure math over the font's fixed metrics; no I/O, no state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bitmap_font::BitmapFont;
use crate::render::TextError;

/// Horizontal alignment of text relative to its anchor
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Halign {
    /// The anchor sits at the right edge of the text
    Left,
    /// The anchor sits at the horizontal middle of the text
    Center,
    /// The anchor sits at the left edge of the text
    Right,
}

/// Vertical alignment of text relative to its anchor
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Valign {
    /// The anchor sits at the top edge of the text
    Top,
    /// The anchor sits at the vertical middle of the text
    Center,
    /// The anchor sits on the font's visual baseline
    Ground,
    /// The anchor sits at the bottom edge of the text
    Bottom,
}

impl FromStr for Halign {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Halign::Left),
            "center" => Ok(Halign::Center),
            "right" => Ok(Halign::Right),
            _ => Err(TextError::InvalidAlignment(format!("horizontal '{s}'"))),
        }
    }
}

impl FromStr for Valign {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Valign::Top),
            "center" => Ok(Valign::Center),
            "ground" => Ok(Valign::Ground),
            "bottom" => Ok(Valign::Bottom),
            _ => Err(TextError::InvalidAlignment(format!("vertical '{s}'"))),
        }
    }
}

/// Pixel footprint of one rendered string relative to its anchor
///
/// The origin offsets are negated: they point from the lower-left corner of
/// the footprint back to the anchor. The bounds derivation adds them to the
/// projected anchor to find the footprint's bottom-left screen corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Total occupied width in pixels
    pub total_width_px: f32,
    /// Total occupied height in pixels
    pub total_height_px: f32,
    /// Signed x offset from anchor to the footprint's lower-left corner
    pub origin_offset_x_px: f32,
    /// Signed y offset from anchor to the footprint's lower-left corner
    pub origin_offset_y_px: f32,
}

/// Compute origin offsets and footprint for a string
///
/// `text` is consumed as a sequence of 8-bit code units; the character count
/// is its byte length, matching what rasterization blits. Deterministic for
/// any input.
pub fn layout(text: &str, halign: Halign, valign: Valign, font: &BitmapFont) -> TextMetrics {
    let nchar = text.len() as f32;
    let xmove = font.advance();

    let xorig = match halign {
        Halign::Right => 0.0,
        Halign::Center => nchar * xmove / 2.0,
        Halign::Left => nchar * xmove,
    };

    // The original layout computed the centering bias with integer division,
    // so an odd glyph height centers one pixel low.
    let yorig = match valign {
        Valign::Top => 0.0,
        Valign::Ground => font.ground_baseline() as f32,
        Valign::Center => (font.height() / 2) as f32,
        Valign::Bottom => font.height() as f32,
    };

    TextMetrics {
        total_width_px: nchar * xmove,
        total_height_px: font.height() as f32,
        origin_offset_x_px: -xorig,
        origin_offset_y_px: -yorig,
    }
}
