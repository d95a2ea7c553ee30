//! # Billboard Text
//!
//! Camera-facing bitmap text for 3D scenes. Strings are drawn as 2D pixel
//! glyphs anchored at a 3D model-space point, and every bounds-reporting
//! draw returns the axis-aligned model-space volume the text occupies, so
//! callers can place legends or avoid collisions around rendered labels.
//!
//! ## Features
//!
//! - **Embedded 8x13 font**: printable ASCII plus a solid fallback block
//! - **Alignment-aware layout**: three horizontal and four vertical anchors
//! - **Two raster paths**: legacy immediate-mode and a forward-compatible
//!   emulation backend, selected per graphics context
//! - **Camera-consistent bounds**: the reported box re-projects onto the
//!   exact screen rectangle the glyphs were blitted into
//!
//! ## Quick Start
//!
//! ```rust
//! use billboard_text::prelude::*;
//!
//! let camera = Camera::orthographic(
//!     Vec3::new(0.0, 0.0, 10.0),
//!     64.0,
//!     Viewport::new(640.0, 480.0),
//!     0.1,
//!     100.0,
//! );
//! let mut raster = ImmediateRaster::new(camera.clone(), PixelSurface::new(640, 480));
//!
//! let renderer = BillboardTextRenderer::new();
//! let bounds = renderer.draw_text(
//!     &mut raster,
//!     &camera,
//!     "2d text in 3d scene",
//!     Vec3::zeros(),
//!     Halign::Left,
//!     Valign::Ground,
//!     Color::BLACK,
//!     Vec2::zeros(),
//!     Vec3::zeros(),
//! )?;
//! assert!(!bounds.is_empty());
//! # Ok::<(), billboard_text::TextError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod render;

pub use render::{TextError, TextResult};

/// Common imports for crate users
pub mod prelude {
    pub use crate::foundation::math::{Vec2, Vec3};
    pub use crate::render::{
        select_raster_backend, Aabb, BillboardTextRenderer, BitmapFont, Camera, CameraProjector,
        Color, ContextCapabilities, DeferredRaster, Halign, ImmediateRaster, PixelSurface,
        Projection, RasterBackend, TextError, TextMetrics, TextResult, TextStyle, Valign,
        Viewport,
    };
}
