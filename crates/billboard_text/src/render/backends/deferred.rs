//! Forward-compatible emulated raster path

use crate::foundation::math::{Vec2, Vec3};
use crate::render::api::{CameraProjector, RasterBackend};
use crate::render::primitives::{Camera, Color};

use super::surface::PixelSurface;

/// One recorded glyph blit awaiting submission
#[derive(Debug, Clone)]
pub struct GlyphQuad {
    /// Flat color the glyph is drawn with
    pub color: Color,
    /// Model-space raster anchor the quad is positioned from
    pub anchor: Vec3,
    /// Pixel offset of the glyph's lower-left corner from the projected anchor
    pub offset: Vec2,
    /// Glyph width in pixels
    pub width: u32,
    /// Glyph height in pixels
    pub height: u32,
    /// Bitmap rows, bottom-to-top, most significant bit leftmost
    pub bitmap: Vec<u8>,
}

/// Emulation raster backend for contexts without immediate-mode raster ops
///
/// Records glyph quads per blit instead of touching pixels; `flush` projects
/// the anchors and rasterizes the queue through the same pixel-write path
/// the immediate backend uses. The pending queue doubles as the submission
/// list a modern pipeline would upload.
pub struct DeferredRaster {
    camera: Camera,
    surface: PixelSurface,
    color: Color,
    anchor: Option<Vec3>,
    pen: Vec2,
    queue: Vec<GlyphQuad>,
}

impl DeferredRaster {
    /// Create a deferred backend drawing into `surface` through `camera`
    pub fn new(camera: Camera, surface: PixelSurface) -> Self {
        Self {
            camera,
            surface,
            color: Color::BLACK,
            anchor: None,
            pen: Vec2::zeros(),
            queue: Vec::new(),
        }
    }

    /// Glyph quads recorded since the last flush
    pub fn pending(&self) -> &[GlyphQuad] {
        &self.queue
    }

    /// The surface flushed into so far
    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    /// Consume the backend and take the surface
    pub fn into_surface(self) -> PixelSurface {
        self.surface
    }
}

impl RasterBackend for DeferredRaster {
    fn set_color_and_position(&mut self, color: Color, position: Vec3) {
        self.color = color;
        self.anchor = Some(position);
        self.pen = Vec2::zeros();
    }

    fn blit(&mut self, width: u32, height: u32, origin: Vec2, advance: Vec2, bitmap: &[u8]) {
        let Some(anchor) = self.anchor else {
            log::warn!("glyph blit before any raster position; dropped");
            return;
        };

        self.queue.push(GlyphQuad {
            color: self.color,
            anchor,
            offset: self.pen - origin,
            width,
            height,
            bitmap: bitmap.to_vec(),
        });
        self.pen += advance;
    }

    fn flush(&mut self) {
        let quads = self.queue.len();
        for quad in self.queue.drain(..) {
            let Some(screen) = self.camera.model_to_screen(quad.anchor) else {
                continue;
            };
            self.surface.blit_bitmap(
                screen.x + quad.offset.x,
                screen.y + quad.offset.y,
                quad.width,
                quad.height,
                &quad.bitmap,
                quad.color,
            );
        }
        log::trace!("flushed {quads} glyph quads");
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
