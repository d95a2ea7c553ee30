//! Shared rendering value types
//!
//! Cameras, colors, and bounding volumes used across the text pipeline.

pub mod bounds;
pub mod camera;
pub mod color;

pub use bounds::*;
pub use camera::*;
pub use color::*;
