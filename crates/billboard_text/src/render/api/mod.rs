//! Capability traits consumed by the billboard text core
//!
//! This module defines the seams between the text core and the surrounding
//! rendering system: the raster backend that blits glyph bitmaps, and the
//! camera projector that maps between model space and screen space.

pub mod camera_projector;
pub mod raster_backend;

pub use camera_projector::*;
pub use raster_backend::*;
