//! Earth surface material: day/night texture blend driven by the sun
//! direction, plus an animated cloud layer.
//!
//! [`EarthMaterial`] is the CPU-side state the update loop mutates;
//! [`EarthUniforms`] is the GPU-side block a renderer would upload each frame.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Largest cloud coverage the material accepts. Matches the panel range.
pub const MAX_CLOUDS: f32 = 0.5;

/// CPU-side Earth material state.
#[derive(Clone, Debug, PartialEq)]
pub struct EarthMaterial {
    /// Elapsed scene time in seconds, fed to the cloud scroll animation.
    pub time: f32,
    /// Normalized direction toward the sun. Drives the day/night terminator.
    pub sun_direction: Vec3,
    /// Atmosphere tint on the lit limb.
    pub atmosphere_day_color: Vec3,
    /// Atmosphere tint along the terminator.
    pub atmosphere_night_color: Vec3,
    /// Cloud coverage, kept in `[0, MAX_CLOUDS]` by [`Self::set_clouds`].
    clouds: f32,
    /// Day-side albedo texture.
    pub day_map: String,
    /// Night-side city-lights texture.
    pub night_map: String,
    /// Combined specular mask and cloud density texture.
    pub specular_clouds_map: String,
}

impl Default for EarthMaterial {
    fn default() -> Self {
        Self {
            time: 0.0,
            // Sun sits on +Z until the first parameter update lands.
            sun_direction: Vec3::new(0.0, 0.0, 1.0),
            // #00aaff
            atmosphere_day_color: Vec3::new(0.0, 170.0 / 255.0, 1.0),
            // #ff6600
            atmosphere_night_color: Vec3::new(1.0, 102.0 / 255.0, 0.0),
            clouds: 0.0,
            day_map: String::from("textures/earth/day.jpg"),
            night_map: String::from("textures/earth/night.jpg"),
            specular_clouds_map: String::from("textures/earth/specular_clouds.jpg"),
        }
    }
}

impl EarthMaterial {
    /// Set cloud coverage, clamping to `[0, MAX_CLOUDS]`.
    pub fn set_clouds(&mut self, clouds: f32) {
        self.clouds = clouds.clamp(0.0, MAX_CLOUDS);
    }

    /// Current cloud coverage.
    pub fn clouds(&self) -> f32 {
        self.clouds
    }

    /// Build the GPU-side uniform block from the current state.
    pub fn to_uniforms(&self) -> EarthUniforms {
        EarthUniforms {
            sun_direction_time: [
                self.sun_direction.x,
                self.sun_direction.y,
                self.sun_direction.z,
                self.time,
            ],
            day_color_clouds: [
                self.atmosphere_day_color.x,
                self.atmosphere_day_color.y,
                self.atmosphere_day_color.z,
                self.clouds,
            ],
            night_color_padding: [
                self.atmosphere_night_color.x,
                self.atmosphere_night_color.y,
                self.atmosphere_night_color.z,
                0.0,
            ],
        }
    }
}

/// GPU-side Earth uniform block, 48 bytes, std140-compatible.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct EarthUniforms {
    /// xyz = sun direction, w = elapsed time.
    pub sun_direction_time: [f32; 4],
    /// xyz = atmosphere day color, w = cloud coverage.
    pub day_color_clouds: [f32; 4],
    /// xyz = atmosphere night color, w = padding.
    pub night_color_padding: [f32; 4],
}
