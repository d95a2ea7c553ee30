//! Concrete raster backends
//!
//! Two software implementations of the [`RasterBackend`] capability: the
//! legacy immediate-mode path and the forward-compatible emulation path.
//! The variant is chosen once per graphics context from its capability
//! flags.

pub mod deferred;
pub mod immediate;
pub mod surface;

pub use deferred::{DeferredRaster, GlyphQuad};
pub use immediate::ImmediateRaster;
pub use surface::PixelSurface;

use crate::render::api::{ContextCapabilities, RasterBackend};
use crate::render::primitives::Camera;

/// Select the raster backend variant for a graphics context
///
/// Decided once at context setup from the capability flags; the returned
/// backend is used for every subsequent draw on that context.
pub fn select_raster_backend(
    capabilities: ContextCapabilities,
    camera: Camera,
    surface: PixelSurface,
) -> Box<dyn RasterBackend> {
    if capabilities.contains(ContextCapabilities::IMMEDIATE_RASTER) {
        log::debug!("raster backend: immediate-mode path");
        Box::new(ImmediateRaster::new(camera, surface))
    } else {
        log::debug!("raster backend: vertex emulation path");
        Box::new(DeferredRaster::new(camera, surface))
    }
}
