//! Math utilities and types
//!
//! Provides the fundamental math types used for billboard layout and
//! camera projection.

pub use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Extension trait for Mat4 with the matrix constructors used by the camera
///
/// All matrices follow fixed-function OpenGL conventions: right-handed view
/// space, clip-space NDC with z in [-1, 1].
pub trait Mat4Ext {
    /// Create a look-at view matrix (right-handed)
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;

    /// Create a perspective projection matrix
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create an orthographic projection matrix from a vertical extent
    ///
    /// `height` is the full world-space height of the view volume; the
    /// horizontal extent is `height * aspect`.
    fn orthographic(height: f32, aspect: f32, near: f32, far: f32) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let forward = (target - eye).normalize();
        let side = forward.cross(&up).normalize();
        let camera_up = side.cross(&forward);

        Mat4::new(
            side.x, side.y, side.z, -side.dot(&eye),
            camera_up.x, camera_up.y, camera_up.z, -camera_up.dot(&eye),
            -forward.x, -forward.y, -forward.z, forward.dot(&eye),
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let f = 1.0 / (fov_y * 0.5).tan();

        let mut result = Mat4::zeros();
        result[(0, 0)] = f / aspect;
        result[(1, 1)] = f;
        result[(2, 2)] = (far + near) / (near - far);
        result[(2, 3)] = (2.0 * far * near) / (near - far);
        result[(3, 2)] = -1.0;
        result
    }

    fn orthographic(height: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let top = height * 0.5;
        let right = top * aspect;

        let mut result = Mat4::identity();
        result[(0, 0)] = 1.0 / right;
        result[(1, 1)] = 1.0 / top;
        result[(2, 2)] = -2.0 / (far - near);
        result[(2, 3)] = -(far + near) / (far - near);
        result
    }
}
