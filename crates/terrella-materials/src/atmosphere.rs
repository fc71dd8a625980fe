//! Atmosphere shell material: the glow pass drawn over a slightly enlarged
//! copy of the planet sphere.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Fixed-function state a renderer must apply for a material's pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderFlags {
    /// Cull front faces and shade the inside of the shell.
    pub back_face: bool,
    /// Enable alpha blending.
    pub transparent: bool,
}

/// CPU-side atmosphere material state.
///
/// Shares the sun direction and tint pair with [`crate::EarthMaterial`];
/// [`crate::ShadedMaterials`] keeps the two in lockstep.
#[derive(Clone, Debug, PartialEq)]
pub struct AtmosphereMaterial {
    /// Normalized direction toward the sun.
    pub sun_direction: Vec3,
    /// Tint on the lit limb.
    pub day_color: Vec3,
    /// Tint along the terminator.
    pub night_color: Vec3,
}

impl Default for AtmosphereMaterial {
    fn default() -> Self {
        Self {
            sun_direction: Vec3::new(0.0, 0.0, 1.0),
            // #00aaff
            day_color: Vec3::new(0.0, 170.0 / 255.0, 1.0),
            // #ff6600
            night_color: Vec3::new(1.0, 102.0 / 255.0, 0.0),
        }
    }
}

impl AtmosphereMaterial {
    /// The shell draws back faces with blending so the glow wraps the limb.
    pub fn render_flags(&self) -> RenderFlags {
        RenderFlags {
            back_face: true,
            transparent: true,
        }
    }

    /// Build the GPU-side uniform block from the current state.
    pub fn to_uniforms(&self) -> AtmosphereUniforms {
        AtmosphereUniforms {
            sun_direction_padding: [
                self.sun_direction.x,
                self.sun_direction.y,
                self.sun_direction.z,
                0.0,
            ],
            day_color_padding: [self.day_color.x, self.day_color.y, self.day_color.z, 0.0],
            night_color_padding: [
                self.night_color.x,
                self.night_color.y,
                self.night_color.z,
                0.0,
            ],
        }
    }
}

/// GPU-side atmosphere uniform block, 48 bytes, std140-compatible.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct AtmosphereUniforms {
    /// xyz = sun direction, w = padding.
    pub sun_direction_padding: [f32; 4],
    /// xyz = day color, w = padding.
    pub day_color_padding: [f32; 4],
    /// xyz = night color, w = padding.
    pub night_color_padding: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::earth::EarthMaterial;

    #[test]
    fn test_shell_renders_back_faces_transparent() {
        let flags = AtmosphereMaterial::default().render_flags();
        assert!(flags.back_face);
        assert!(flags.transparent);
    }

    #[test]
    fn test_defaults_agree_with_the_earth_material() {
        let atmosphere = AtmosphereMaterial::default();
        let earth = EarthMaterial::default();
        assert_eq!(atmosphere.sun_direction, earth.sun_direction);
        assert_eq!(atmosphere.day_color, earth.atmosphere_day_color);
        assert_eq!(atmosphere.night_color, earth.atmosphere_night_color);
    }

    #[test]
    fn test_uniform_buffer_layout_matches_shader() {
        assert_eq!(std::mem::size_of::<AtmosphereUniforms>(), 48);
        assert_eq!(
            std::mem::offset_of!(AtmosphereUniforms, sun_direction_padding),
            0
        );
        assert_eq!(std::mem::offset_of!(AtmosphereUniforms, day_color_padding), 16);
        assert_eq!(
            std::mem::offset_of!(AtmosphereUniforms, night_color_padding),
            32
        );
    }

    #[test]
    fn test_to_uniforms_packs_correctly() {
        let material = AtmosphereMaterial {
            sun_direction: Vec3::new(1.0, 0.0, 0.0),
            day_color: Vec3::new(0.2, 0.4, 0.6),
            night_color: Vec3::new(0.6, 0.4, 0.2),
        };
        let u = material.to_uniforms();
        assert_eq!(u.sun_direction_padding, [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(u.day_color_padding, [0.2, 0.4, 0.6, 0.0]);
        assert_eq!(u.night_color_padding, [0.6, 0.4, 0.2, 0.0]);
    }
}
