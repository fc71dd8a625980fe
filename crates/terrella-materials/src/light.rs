//! The point light that anchors the lens flare near the sun.

use glam::Vec3;

/// CPU-side point light descriptor.
///
/// The light's world position lives on its scene node; this struct carries
/// only the photometric properties a renderer reads.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    /// Linear RGB color.
    pub color: Vec3,
    /// Scalar intensity multiplier.
    pub intensity: f32,
    /// Maximum radius of effect.
    pub range: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            // #ff6600, the same warm orange as the twilight tint.
            color: Vec3::new(1.0, 102.0 / 255.0, 0.0),
            intensity: 1.5,
            range: 2000.0,
        }
    }
}
