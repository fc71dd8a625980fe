//! The set of materials that must stay in lockstep with shared scene inputs.

use glam::Vec3;

use crate::atmosphere::AtmosphereMaterial;
use crate::earth::EarthMaterial;

/// Every material that shades a sunlit surface.
///
/// A sun parameter change must land in all members within the same call, with
/// no stale-frame lag, so these setters are the only write path for the
/// shared inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShadedMaterials {
    pub earth: EarthMaterial,
    pub atmosphere: AtmosphereMaterial,
}

impl ShadedMaterials {
    /// Write a freshly computed sun direction into every member.
    pub fn set_sun_direction(&mut self, direction: Vec3) {
        self.earth.sun_direction = direction;
        self.atmosphere.sun_direction = direction;
    }

    /// Update the atmosphere tint pair on both the surface and the shell.
    pub fn set_atmosphere_colors(&mut self, day: Vec3, night: Vec3) {
        self.earth.atmosphere_day_color = day;
        self.earth.atmosphere_night_color = night;
        self.atmosphere.day_color = day;
        self.atmosphere.night_color = night;
    }

    /// Update cloud coverage. Only the Earth surface reads it.
    pub fn set_clouds(&mut self, clouds: f32) {
        self.earth.set_clouds(clouds);
    }

    /// Advance the shader time input. Only the Earth surface animates.
    pub fn set_time(&mut self, elapsed: f32) {
        self.earth.time = elapsed;
    }
}
