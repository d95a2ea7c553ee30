//! # 3D Camera System
//!
//! Camera abstraction for billboard text placement. Provides perspective and
//! orthographic projections together with the window-coordinate mapping the
//! text core relies on to derive model-space bounds.
//!
//! ## Design Principles
//! - **Library-agnostic**: plain matrix math, no graphics API dependencies
//! - **On-demand matrices**: nothing is cached; mutate freely between frames
//! - **Total projection API**: degenerate camera states surface as `None`,
//!   never as NaN coordinates

use crate::foundation::math::{Mat4, Mat4Ext, Vec3, Vec4};
use crate::render::api::CameraProjector;

/// Pixel-space viewport rectangle
///
/// `x`/`y` locate the lower-left corner in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Lower-left corner x in pixels
    pub x: f32,
    /// Lower-left corner y in pixels
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

impl Viewport {
    /// Create a viewport anchored at the window origin
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Aspect ratio (width / height)
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

/// Projection kind and parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Perspective projection with a vertical field of view in radians
    Perspective {
        /// Vertical field of view angle in radians
        fov_y: f32,
    },
    /// Orthographic projection with a fixed world-space vertical extent
    Orthographic {
        /// Full height of the view volume in world units
        height: f32,
    },
}

/// 3D camera with a pixel viewport
///
/// Uses a standard right-handed Y-up coordinate system in view space and
/// OpenGL clip conventions (NDC z in [-1, 1]). Screen coordinates are window
/// pixels with the origin at the viewport's lower-left corner and a
/// normalized depth in `z`, matching the fixed-function window mapping.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Point the camera is looking at in world space
    pub target: Vec3,
    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,
    /// Projection kind and parameters
    pub projection: Projection,
    /// Distance to near clipping plane
    pub near: f32,
    /// Distance to far clipping plane
    pub far: f32,
    /// Window-space viewport the projection maps onto
    pub viewport: Viewport,
}

impl Camera {
    /// Create a perspective camera looking at the origin
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `viewport` - Target viewport in pixels (supplies the aspect ratio)
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, viewport: Viewport, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            projection: Projection::Perspective {
                fov_y: fov_degrees.to_radians(),
            },
            near,
            far,
            viewport,
        }
    }

    /// Create an orthographic camera looking at the origin
    ///
    /// `height` is the full world-space height of the view volume; one world
    /// unit maps to `viewport.height / height` pixels vertically.
    pub fn orthographic(position: Vec3, height: f32, viewport: Viewport, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            projection: Projection::Orthographic { height },
            near,
            far,
            viewport,
        }
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Configure camera to look at a specific point with a custom up vector
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
        log::trace!("Camera look_at updated - target: {:?}, up: {:?}", target, up);
    }

    /// Generate the view matrix (world to camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Generate the projection matrix for the current projection kind
    pub fn projection_matrix(&self) -> Mat4 {
        let aspect = self.viewport.aspect();
        match self.projection {
            Projection::Perspective { fov_y } => Mat4::perspective(fov_y, aspect, self.near, self.far),
            Projection::Orthographic { height } => {
                Mat4::orthographic(height, aspect, self.near, self.far)
            }
        }
    }

    /// Generate the combined view-projection matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    fn ndc_to_window(&self, ndc: Vec3) -> Vec3 {
        Vec3::new(
            self.viewport.x + self.viewport.width * (ndc.x + 1.0) * 0.5,
            self.viewport.y + self.viewport.height * (ndc.y + 1.0) * 0.5,
            (ndc.z + 1.0) * 0.5,
        )
    }

    fn window_to_ndc(&self, window: Vec3) -> Option<Vec3> {
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return None;
        }
        Some(Vec3::new(
            (window.x - self.viewport.x) / self.viewport.width * 2.0 - 1.0,
            (window.y - self.viewport.y) / self.viewport.height * 2.0 - 1.0,
            window.z * 2.0 - 1.0,
        ))
    }
}

impl CameraProjector for Camera {
    fn model_to_screen(&self, point: Vec3) -> Option<Vec3> {
        let clip = self.view_projection_matrix() * Vec4::new(point.x, point.y, point.z, 1.0);
        if !clip.iter().all(|c| c.is_finite()) || clip.w.abs() < f32::EPSILON {
            return None;
        }

        let ndc = Vec3::new(clip.x / clip.w, clip.y / clip.w, clip.z / clip.w);
        Some(self.ndc_to_window(ndc))
    }

    fn screen_to_model(&self, point: Vec3) -> Option<Vec3> {
        let inverse = self.view_projection_matrix().try_inverse()?;
        let ndc = self.window_to_ndc(point)?;

        let world = inverse * Vec4::new(ndc.x, ndc.y, ndc.z, 1.0);
        if !world.iter().all(|c| c.is_finite()) || world.w.abs() < f32::EPSILON {
            return None;
        }

        Some(Vec3::new(
            world.x / world.w,
            world.y / world.w,
            world.z / world.w,
        ))
    }
}
