//! Legacy immediate-mode raster path

use crate::foundation::math::{Vec2, Vec3};
use crate::render::api::{CameraProjector, RasterBackend};
use crate::render::primitives::{Camera, Color};

use super::surface::PixelSurface;

/// Immediate-mode raster backend
///
/// Projects the raster position to window coordinates when it is set and
/// writes glyph pixels straight into the surface on every blit. An
/// unprojectable raster position invalidates the cursor and subsequent
/// blits are dropped until it is set again, per immediate-mode
/// raster-position semantics.
pub struct ImmediateRaster {
    camera: Camera,
    surface: PixelSurface,
    cursor: Option<Vec3>,
    color: Color,
}

impl ImmediateRaster {
    /// Create an immediate backend drawing into `surface` through `camera`
    pub fn new(camera: Camera, surface: PixelSurface) -> Self {
        Self {
            camera,
            surface,
            cursor: None,
            color: Color::BLACK,
        }
    }

    /// The surface drawn into so far
    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    /// Consume the backend and take the surface
    pub fn into_surface(self) -> PixelSurface {
        self.surface
    }

    /// Current window-space cursor; `None` while the raster position is invalid
    pub fn cursor(&self) -> Option<Vec3> {
        self.cursor
    }
}

impl RasterBackend for ImmediateRaster {
    fn set_color_and_position(&mut self, color: Color, position: Vec3) {
        self.color = color;
        self.cursor = self.camera.model_to_screen(position);
        if self.cursor.is_none() {
            log::debug!("raster position {position:?} does not project; blits will be dropped");
        }
    }

    fn blit(&mut self, width: u32, height: u32, origin: Vec2, advance: Vec2, bitmap: &[u8]) {
        let Some(cursor) = self.cursor.as_mut() else {
            return;
        };

        self.surface.blit_bitmap(
            cursor.x - origin.x,
            cursor.y - origin.y,
            width,
            height,
            bitmap,
            self.color,
        );

        cursor.x += advance.x;
        cursor.y += advance.y;
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::primitives::Viewport;

    fn test_camera() -> Camera {
        // One world unit per pixel, origin projected to the surface center.
        Camera::orthographic(
            Vec3::new(0.0, 0.0, 10.0),
            64.0,
            Viewport::new(64.0, 64.0),
            0.1,
            100.0,
        )
    }

    #[test]
    fn blit_lands_relative_to_the_projected_cursor() {
        let mut raster = ImmediateRaster::new(test_camera(), PixelSurface::new(64, 64));
        raster.set_color_and_position(Color::WHITE, Vec3::zeros());

        // Anchor projects to (32, 32); a single set bit at the cursor.
        raster.blit(8, 1, Vec2::zeros(), Vec2::new(10.0, 0.0), &[0x80]);

        assert_eq!(raster.surface().pixel(32, 32), Some([255, 255, 255, 255]));
        assert_eq!(raster.surface().coverage(), 1);
        // Cursor advanced for the next character.
        assert_eq!(raster.cursor().unwrap().x, 42.0);
    }

    #[test]
    fn origin_offsets_shift_the_bitmap() {
        let mut raster = ImmediateRaster::new(test_camera(), PixelSurface::new(64, 64));
        raster.set_color_and_position(Color::WHITE, Vec3::zeros());

        raster.blit(8, 1, Vec2::new(4.0, 2.0), Vec2::zeros(), &[0x80]);

        assert_eq!(raster.surface().pixel(28, 30), Some([255, 255, 255, 255]));
    }

    #[test]
    fn invalid_raster_position_drops_blits() {
        let mut camera = test_camera();
        // Up parallel to the view direction: projection unresolvable.
        camera.look_at(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));

        let mut raster = ImmediateRaster::new(camera, PixelSurface::new(64, 64));
        raster.set_color_and_position(Color::WHITE, Vec3::zeros());
        raster.blit(8, 1, Vec2::zeros(), Vec2::zeros(), &[0xff]);

        assert!(raster.cursor().is_none());
        assert_eq!(raster.surface().coverage(), 0);
    }
}
