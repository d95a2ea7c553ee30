//! Camera projection capability
//!
//! The text core never owns a camera; it consumes this capability from the
//! enclosing view system to derive the model-space bounds of rendered text.

use crate::foundation::math::Vec3;

/// Maps points between model space and screen space under a fixed camera state
///
/// Screen coordinates are window pixels with the origin at the bottom-left
/// and a normalized depth in `z`. Implementations must guarantee that
/// `screen_to_model(model_to_screen(p))` reproduces `p` within floating-point
/// tolerance for any point while the camera state is unchanged.
pub trait CameraProjector {
    /// Project a model-space point to screen space
    ///
    /// Returns `None` when the projection cannot be resolved (degenerate or
    /// unset view/projection state).
    fn model_to_screen(&self, point: Vec3) -> Option<Vec3>;

    /// Un-project a screen-space point back to model space
    ///
    /// Returns `None` when the inverse transform cannot be resolved.
    fn screen_to_model(&self, point: Vec3) -> Option<Vec3>;
}
