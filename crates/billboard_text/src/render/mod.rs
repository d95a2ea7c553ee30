//! Rendering module - billboard text core
//!
//! This module contains the billboard text pipeline: the capability traits
//! the core consumes (`api`), the shared value types (`primitives`), the
//! concrete raster backends (`backends`), and the text system itself
//! (`systems::text`).

pub mod api;
pub mod backends;
pub mod primitives;
pub mod systems;

pub use api::{CameraProjector, ContextCapabilities, RasterBackend};
pub use backends::{select_raster_backend, DeferredRaster, GlyphQuad, ImmediateRaster, PixelSurface};
pub use primitives::{Aabb, Camera, Projection, Viewport};
pub use systems::text::{
    BillboardTextRenderer, BitmapFont, Color, Halign, TextMetrics, TextStyle, Valign,
};

/// Errors that can occur while drawing billboard text
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// An alignment name could not be resolved to a known constant
    ///
    /// Raised when parsing alignment values from configuration or user
    /// input. Never substituted with a default: the draw call carrying the
    /// bad value must abort before any raster side effect.
    #[error("Alignment constant unknown: {0}")]
    InvalidAlignment(String),

    /// The camera could not resolve a model/screen transform
    ///
    /// Only reachable from the bounds-computing entry points. Glyphs blitted
    /// before the failing projection are not rolled back; callers must treat
    /// this as "text drawn, bounds unknown".
    #[error("Camera projection unavailable while {0}")]
    ProjectionUnavailable(&'static str),
}

/// Result type for billboard text operations
pub type TextResult<T> = Result<T, TextError>;
