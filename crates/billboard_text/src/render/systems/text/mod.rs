//! Billboard text system
//!
//! Embedded bitmap font, alignment-aware layout, and the billboard renderer
//! that ties them to the raster backend and camera capabilities.

pub mod billboard_renderer;
pub mod bitmap_font;
pub mod text_layout;
pub mod text_style;

pub use billboard_renderer::*;
pub use bitmap_font::*;
pub use text_layout::*;
pub use text_style::*;

pub use crate::render::primitives::Color;
