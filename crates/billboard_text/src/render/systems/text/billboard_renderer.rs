//! Billboard text renderer
//!
//! Draws 2D pixel text that always faces the viewer, anchored at a 3D
//! model-space point, and reports the model-space volume the rendered text
//! occupies. The glyph library is static, so any number of renderer values
//! share the same tables with no per-instance overhead.

use crate::foundation::math::{Vec2, Vec3};
use crate::render::api::{CameraProjector, RasterBackend};
use crate::render::primitives::{Aabb, Color};
use crate::render::{TextError, TextResult};

use super::bitmap_font::BitmapFont;
use super::text_layout::{layout, Halign, TextMetrics, Valign};
use super::text_style::TextStyle;

/// Renderer for camera-facing bitmap text
///
/// Stateless across calls: the raster cursor and color live in the backend,
/// and the bounding volume is created fresh per call. All work is
/// synchronous and bounded by the string length.
#[derive(Debug)]
pub struct BillboardTextRenderer {
    font: &'static BitmapFont,
}

impl BillboardTextRenderer {
    /// Create a renderer over the built-in 8x13 font
    pub const fn new() -> Self {
        Self {
            font: BitmapFont::default_8x13(),
        }
    }

    /// The font asset this renderer draws with
    pub const fn font(&self) -> &'static BitmapFont {
        self.font
    }

    /// Draw a string at a model-space position with fixed alignment
    ///
    /// Uses right/ground alignment. Never touches the camera and cannot
    /// fail; the backend simply receives one blit per 8-bit code unit.
    pub fn draw_simple(
        &self,
        raster: &mut dyn RasterBackend,
        text: &str,
        position: Vec3,
        color: Color,
    ) {
        raster.set_color_and_position(color, position);
        let metrics = layout(text, Halign::Right, Valign::Ground, self.font);
        self.blit_glyphs(raster, text, &metrics);
    }

    /// Draw a string and compute the 3D volume it occupies
    ///
    /// Rasterizes exactly like [`Self::draw_simple`] but honoring the given
    /// alignment, then projects the pixel footprint through the camera to
    /// derive a model-space bounding box. `screen_offset` (pixels) and
    /// `scene_offset` (model units) displace the reported bounds only; the
    /// raster cursor stays at `position`.
    ///
    /// # Errors
    ///
    /// [`TextError::ProjectionUnavailable`] when the camera cannot resolve a
    /// transform. Glyphs blitted before the failing projection are not
    /// rolled back: the text is drawn, its bounds are unknown.
    pub fn draw_text(
        &self,
        raster: &mut dyn RasterBackend,
        projector: &dyn CameraProjector,
        text: &str,
        position: Vec3,
        halign: Halign,
        valign: Valign,
        color: Color,
        screen_offset: Vec2,
        scene_offset: Vec3,
    ) -> TextResult<Aabb> {
        raster.set_color_and_position(color, position);
        let metrics = layout(text, halign, valign, self.font);
        self.blit_glyphs(raster, text, &metrics);

        log::trace!(
            "billboard text {:?} at {:?}: {}x{} px footprint",
            text,
            position,
            metrics.total_width_px,
            metrics.total_height_px,
        );

        compute_text_bounds(projector, position + scene_offset, screen_offset, &metrics)
    }

    /// Draw a string using a persisted [`TextStyle`]
    ///
    /// Convenience over [`Self::draw_text`] for callers holding their draw
    /// settings in configuration.
    ///
    /// # Errors
    ///
    /// Same as [`Self::draw_text`].
    pub fn draw_styled(
        &self,
        raster: &mut dyn RasterBackend,
        projector: &dyn CameraProjector,
        text: &str,
        position: Vec3,
        style: &TextStyle,
        screen_offset: Vec2,
        scene_offset: Vec3,
    ) -> TextResult<Aabb> {
        self.draw_text(
            raster,
            projector,
            text,
            position,
            style.halign,
            style.valign,
            style.color,
            screen_offset,
            scene_offset,
        )
    }

    fn blit_glyphs(&self, raster: &mut dyn RasterBackend, text: &str, metrics: &TextMetrics) {
        // Blit origins are the positive layout origins; the metrics carry
        // their negation for the bounds math.
        let origin = Vec2::new(-metrics.origin_offset_x_px, -metrics.origin_offset_y_px);
        let advance = Vec2::new(self.font.advance(), 0.0);

        for &code in text.as_bytes() {
            raster.blit(
                self.font.width(),
                self.font.height(),
                origin,
                advance,
                self.font.glyph(code),
            );
        }
    }
}

impl Default for BillboardTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive the model-space box occupied by a laid-out pixel footprint
///
/// Projects the anchor, places the footprint rectangle around it in screen
/// space at the anchor's depth, and un-projects the two opposite corners.
/// An empty footprint collapses to the anchor's own projection.
fn compute_text_bounds(
    projector: &dyn CameraProjector,
    anchor: Vec3,
    screen_offset: Vec2,
    metrics: &TextMetrics,
) -> TextResult<Aabb> {
    let screen = projector
        .model_to_screen(anchor)
        .ok_or(TextError::ProjectionUnavailable("projecting the text anchor"))?;

    let mut bounds = Aabb::empty();

    if metrics.total_width_px == 0.0 {
        let point = Vec3::new(screen.x + screen_offset.x, screen.y + screen_offset.y, screen.z);
        bounds.extend(unproject(projector, point)?);
        return Ok(bounds);
    }

    let bottom_left = Vec3::new(
        screen.x + screen_offset.x + metrics.origin_offset_x_px,
        screen.y + screen_offset.y + metrics.origin_offset_y_px,
        screen.z,
    );
    let top_right = Vec3::new(
        bottom_left.x + metrics.total_width_px,
        bottom_left.y + metrics.total_height_px,
        bottom_left.z,
    );

    bounds.extend(unproject(projector, bottom_left)?);
    bounds.extend(unproject(projector, top_right)?);
    Ok(bounds)
}

fn unproject(projector: &dyn CameraProjector, screen: Vec3) -> TextResult<Vec3> {
    projector
        .screen_to_model(screen)
        .ok_or(TextError::ProjectionUnavailable(
            "unprojecting a footprint corner",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::backends::{DeferredRaster, ImmediateRaster, PixelSurface};
    use crate::render::primitives::{Camera, Viewport};
    use approx::assert_relative_eq;

    // One world unit per pixel; the origin projects to (32, 32).
    fn test_camera() -> Camera {
        Camera::orthographic(
            Vec3::new(0.0, 0.0, 10.0),
            64.0,
            Viewport::new(64.0, 64.0),
            0.1,
            100.0,
        )
    }

    fn recording_backend() -> DeferredRaster {
        DeferredRaster::new(test_camera(), PixelSurface::new(64, 64))
    }

    #[test]
    fn draw_simple_blits_every_code_unit() {
        let renderer = BillboardTextRenderer::new();
        let mut raster = recording_backend();

        renderer.draw_simple(&mut raster, "abc", Vec3::zeros(), Color::BLACK);

        assert_eq!(raster.pending().len(), 3);
    }

    #[test]
    fn draw_simple_rasterizes_the_glyph_pixels() {
        let renderer = BillboardTextRenderer::new();
        let mut raster = ImmediateRaster::new(test_camera(), PixelSurface::new(64, 64));

        renderer.draw_simple(&mut raster, "A", Vec3::zeros(), Color::WHITE);

        let expected: u32 = renderer
            .font()
            .glyph(b'A')
            .iter()
            .map(|row| row.count_ones())
            .sum();
        assert_eq!(raster.surface().coverage(), expected as usize);

        // Ground alignment sinks the glyph 2 px below the anchor; the apex
        // of 'A' (top row, columns 3-4) lands at (35, 42) and (36, 42).
        assert_eq!(raster.surface().pixel(35, 42), Some([255, 255, 255, 255]));
        assert_eq!(raster.surface().pixel(36, 42), Some([255, 255, 255, 255]));
    }

    #[test]
    fn unknown_codes_are_blitted_as_the_fallback_block() {
        let renderer = BillboardTextRenderer::new();
        let mut raster = recording_backend();

        // 'é' encodes to two bytes, both outside the printable ASCII range.
        renderer.draw_simple(&mut raster, "é", Vec3::zeros(), Color::BLACK);

        assert_eq!(raster.pending().len(), 2);
        for quad in raster.pending() {
            assert_eq!(quad.bitmap, vec![0xff; 13]);
        }
    }

    #[test]
    fn centered_hi_blits_h_then_i_and_reports_the_expected_box() {
        let renderer = BillboardTextRenderer::new();
        let mut raster = recording_backend();
        let camera = test_camera();

        let bounds = renderer
            .draw_text(
                &mut raster,
                &camera,
                "Hi",
                Vec3::zeros(),
                Halign::Center,
                Valign::Center,
                Color::BLACK,
                Vec2::zeros(),
                Vec3::zeros(),
            )
            .expect("bounds");

        assert_eq!(raster.pending().len(), 2);
        assert_eq!(raster.pending()[0].bitmap, renderer.font().glyph(72));
        assert_eq!(raster.pending()[1].bitmap, renderer.font().glyph(105));

        // n=2, w+gap=10, h=13: footprint 20x13, centered with the odd
        // height biased one pixel low.
        assert_relative_eq!(bounds.min.x, -10.0, epsilon = 1e-3);
        assert_relative_eq!(bounds.max.x, 10.0, epsilon = 1e-3);
        assert_relative_eq!(bounds.min.y, -6.0, epsilon = 1e-3);
        assert_relative_eq!(bounds.max.y, 7.0, epsilon = 1e-3);
        assert_relative_eq!(bounds.min.z, 0.0, epsilon = 1e-3);
        assert_relative_eq!(bounds.max.z, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn bounds_reproject_to_the_internal_screen_rectangle() {
        let renderer = BillboardTextRenderer::new();
        let mut raster = recording_backend();
        let camera = test_camera();

        let bounds = renderer
            .draw_text(
                &mut raster,
                &camera,
                "A",
                Vec3::new(2.0, 1.0, 0.0),
                Halign::Left,
                Valign::Ground,
                Color::BLACK,
                Vec2::zeros(),
                Vec3::zeros(),
            )
            .expect("bounds");

        let min_screen = camera.model_to_screen(bounds.min).expect("projection");
        let max_screen = camera.model_to_screen(bounds.max).expect("projection");

        assert_relative_eq!(max_screen.x - min_screen.x, 10.0, epsilon = 1e-3);
        assert_relative_eq!(max_screen.y - min_screen.y, 13.0, epsilon = 1e-3);
    }

    #[test]
    fn empty_string_draws_nothing_and_collapses_to_the_anchor() {
        let renderer = BillboardTextRenderer::new();
        let mut raster = recording_backend();
        let camera = test_camera();
        let anchor = Vec3::new(3.0, -4.0, 0.0);

        let bounds = renderer
            .draw_text(
                &mut raster,
                &camera,
                "",
                anchor,
                Halign::Center,
                Valign::Ground,
                Color::BLACK,
                Vec2::zeros(),
                Vec3::zeros(),
            )
            .expect("bounds");

        assert!(raster.pending().is_empty());
        assert_eq!(bounds.extents(), Vec3::zeros());
        assert_relative_eq!(bounds.min.x, anchor.x, epsilon = 1e-3);
        assert_relative_eq!(bounds.min.y, anchor.y, epsilon = 1e-3);
    }

    #[test]
    fn offsets_displace_the_bounds_but_not_the_raster_cursor() {
        let renderer = BillboardTextRenderer::new();
        let camera = test_camera();

        let draw = |screen_offset: Vec2, scene_offset: Vec3| {
            let mut raster = recording_backend();
            let bounds = renderer
                .draw_text(
                    &mut raster,
                    &camera,
                    "x",
                    Vec3::zeros(),
                    Halign::Right,
                    Valign::Top,
                    Color::BLACK,
                    screen_offset,
                    scene_offset,
                )
                .expect("bounds");
            (bounds, raster)
        };

        let (plain, plain_raster) = draw(Vec2::zeros(), Vec3::zeros());
        let (shifted, shifted_raster) = draw(Vec2::new(5.0, 0.0), Vec3::new(0.0, 2.0, 0.0));

        // One world unit per pixel: +5 px and +2 units both move the box.
        assert_relative_eq!(shifted.min.x - plain.min.x, 5.0, epsilon = 1e-3);
        assert_relative_eq!(shifted.min.y - plain.min.y, 2.0, epsilon = 1e-3);

        // The raster anchor itself is unaffected by either offset.
        assert_eq!(plain_raster.pending()[0].anchor, Vec3::zeros());
        assert_eq!(shifted_raster.pending()[0].anchor, Vec3::zeros());
    }

    #[test]
    fn projection_failure_leaves_text_drawn_but_bounds_unknown() {
        let renderer = BillboardTextRenderer::new();
        let mut raster = recording_backend();

        let mut broken = test_camera();
        broken.look_at(Vec3::zeros(), Vec3::new(0.0, 0.0, -1.0));

        let result = renderer.draw_text(
            &mut raster,
            &broken,
            "oops",
            Vec3::zeros(),
            Halign::Right,
            Valign::Ground,
            Color::BLACK,
            Vec2::zeros(),
            Vec3::zeros(),
        );

        assert!(matches!(result, Err(TextError::ProjectionUnavailable(_))));
        // The glyphs were already handed to the backend.
        assert_eq!(raster.pending().len(), 4);
    }

    #[test]
    fn unparsed_alignment_never_reaches_the_backend() {
        let raster = recording_backend();

        let halign = "diagonal".parse::<Halign>();
        assert!(matches!(halign, Err(TextError::InvalidAlignment(_))));

        // The draw was never issued: zero blits, zero pixels.
        assert!(raster.pending().is_empty());
        assert_eq!(raster.surface().coverage(), 0);
    }

    #[test]
    fn styled_draw_matches_the_explicit_call() {
        let renderer = BillboardTextRenderer::new();
        let camera = test_camera();
        let style = TextStyle {
            halign: Halign::Center,
            valign: Valign::Bottom,
            color: Color::BLUE,
        };

        let mut styled = recording_backend();
        let styled_bounds = renderer
            .draw_styled(
                &mut styled,
                &camera,
                "legend",
                Vec3::zeros(),
                &style,
                Vec2::zeros(),
                Vec3::zeros(),
            )
            .expect("bounds");

        let mut explicit = recording_backend();
        let explicit_bounds = renderer
            .draw_text(
                &mut explicit,
                &camera,
                "legend",
                Vec3::zeros(),
                style.halign,
                style.valign,
                style.color,
                Vec2::zeros(),
                Vec3::zeros(),
            )
            .expect("bounds");

        assert_eq!(styled_bounds.min, explicit_bounds.min);
        assert_eq!(styled_bounds.max, explicit_bounds.max);
        assert_eq!(styled.pending().len(), explicit.pending().len());
    }
}
