//! Raster backend abstraction for glyph blitting
//!
//! This module defines the trait that raster backends implement to draw
//! glyph bitmaps at pixel offsets from a 3D-anchored raster cursor. Two
//! variants exist behind the one trait: a legacy immediate-mode path and a
//! forward-compatible emulation path. The variant is selected once per
//! graphics context from its capability flags, never re-checked per glyph.

use crate::foundation::math::{Vec2, Vec3};
use crate::render::primitives::Color;

bitflags::bitflags! {
    /// Runtime capabilities of a graphics context
    ///
    /// Queried once at context setup to select the raster backend variant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ContextCapabilities: u32 {
        /// The context supports legacy immediate-mode raster operations
        const IMMEDIATE_RASTER = 1 << 0;
        /// The context requires the forward-compatible emulation path
        const VERTEX_EMULATION = 1 << 1;
    }
}

/// Glyph blitting backend
///
/// Backends hold the process-wide raster cursor and color for one graphics
/// context. Calls are not reentrant with respect to that shared cursor;
/// callers follow the usual one-thread-per-graphics-context discipline of
/// immediate-mode APIs. Backend-level failures are fatal to the enclosing
/// frame and carry no error channel here.
pub trait RasterBackend {
    /// Position the raster cursor at a model-space point with a flat color
    ///
    /// All subsequent blits draw relative to this cursor until it is set
    /// again.
    fn set_color_and_position(&mut self, color: Color, position: Vec3);

    /// Draw one glyph bitmap and advance the cursor
    ///
    /// The bitmap is `height` rows of `width` pixels, one byte per row,
    /// stored bottom-to-top with the most significant bit leftmost. Its
    /// lower-left pixel lands at `cursor - origin`; the cursor then moves by
    /// `advance` pixels.
    fn blit(&mut self, width: u32, height: u32, origin: Vec2, advance: Vec2, bitmap: &[u8]);

    /// Submit any buffered raster work
    ///
    /// A no-op on immediate paths; emulation paths rasterize their queued
    /// glyphs here.
    fn flush(&mut self) {}

    /// Downcast to the concrete backend type for advanced operations
    fn as_any(&self) -> &dyn std::any::Any;
}
