//! Perspective camera with NDC projection and viewport-ray picking.

use glam::{Mat4, Quat, Vec2, Vec3};
use terrella_math::Ray;

/// A perspective camera generating view and projection matrices, plus the
/// two conversions the label projector needs: world point to NDC and NDC
/// back to a world-space picking ray.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Position in world space.
    pub position: Vec3,
    /// Rotation as a unit quaternion.
    pub rotation: Quat,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance (always positive).
    pub near: f32,
    /// Far clip plane distance (always positive, > near).
    pub far: f32,
}

impl Camera {
    /// Compute the view matrix (inverse of camera transform).
    pub fn view_matrix(&self) -> Mat4 {
        let rotation_matrix = Mat4::from_quat(self.rotation);
        let translation_matrix = Mat4::from_translation(self.position);
        // View = inverse(Translation * Rotation) = inverse(Rotation) * inverse(Translation)
        (translation_matrix * rotation_matrix).inverse()
    }

    /// Compute the projection matrix with reverse-Z.
    pub fn projection_matrix(&self) -> Mat4 {
        // Reverse-Z: near plane maps to z=1, far plane maps to z=0.
        // This is handled by swapping near/far in the projection matrix.
        Mat4::perspective_rh(
            self.fov_y,
            self.aspect_ratio,
            self.far,  // swapped: far as "near" parameter
            self.near, // swapped: near as "far" parameter
        )
    }

    /// Compute the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// The forward direction vector (-Z in camera space).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Aim the camera at a world-space target, keeping +Y up. A target at
    /// the camera position leaves the rotation unchanged.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(forward) = (target - self.position).try_normalize() else {
            return;
        };
        // Straight up/down would degenerate the Y-up basis.
        let up = if forward.dot(Vec3::Y).abs() > 0.999 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let view = Mat4::look_to_rh(self.position, forward, up);
        let (_, rotation, _) = view.inverse().to_scale_rotation_translation();
        self.rotation = rotation;
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect_ratio = width / height;
        }
    }

    /// Project a world-space point into normalized device coordinates.
    ///
    /// Visible points land in [-1, 1] on x and y with +Y up; z carries the
    /// reverse-Z depth. Returns `None` for points at or behind the camera
    /// plane (clip w <= 0), which have no screen position.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_projection_matrix() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    /// A world-space ray from the camera through the given NDC x/y, for
    /// occlusion queries and picking.
    pub fn viewport_ray(&self, ndc: Vec2) -> Option<Ray> {
        let inverse_view_proj = self.view_projection_matrix().inverse();
        // Reverse-Z puts the near plane at NDC z = 1.
        let near_point = inverse_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Ray::new(self.position, near_point - self.position)
    }

    /// True when every component of the camera state is finite. The frame
    /// update checks this before running the projector so one corrupted
    /// transform degrades to a skipped frame instead of NaN screen offsets.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.rotation.is_finite()
            && self.fov_y.is_finite()
            && self.aspect_ratio.is_finite()
            && self.near.is_finite()
            && self.far.is_finite()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(2.5, 1.5, 3.0),
            rotation: Quat::IDENTITY,
            fov_y: 75.0_f32.to_radians(),
            aspect_ratio: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}
