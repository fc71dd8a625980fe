//! Spherical parameterization of celestial directions.
//!
//! The sun and moon are each steered by an independent (radius, polar,
//! azimuth) triple. Only the angles matter: the conversion always yields a
//! unit vector and the radius is carried solely for parameter-panel
//! compatibility.

use glam::Vec3;

/// A (radius, polar, azimuth) triple describing a direction on the sky.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphericalParams {
    /// Conventionally 1.0. Never scales the derived direction.
    pub radius: f32,
    /// Angle from the +Y axis, in radians. The sun panel keeps this in
    /// [0, π]; the moon panel allows [0, 2π]. Any real value is accepted.
    pub polar: f32,
    /// Angle around the Y axis, in radians, sweeping from +X toward +Z.
    /// Panels keep this in [−π, π]; any real value is accepted.
    pub azimuth: f32,
}

impl SphericalParams {
    /// Construct a parameter triple.
    pub fn new(radius: f32, polar: f32, azimuth: f32) -> Self {
        Self {
            radius,
            polar,
            azimuth,
        }
    }

    /// True when every component is a finite number. Event handlers use this
    /// as their validation boundary; the conversion itself is unchecked.
    pub fn is_finite(&self) -> bool {
        self.radius.is_finite() && self.polar.is_finite() && self.azimuth.is_finite()
    }
}

/// Convert spherical parameters to a unit direction vector.
///
/// Polar 0 points along +Y; at polar π/2 the azimuth sweeps the equator from
/// +X (azimuth 0) toward +Z (azimuth π/2). The trigonometry is total: any
/// real angle pair produces a valid unit vector, including the moon's
/// beyond-π polar range.
pub fn direction(params: SphericalParams) -> Vec3 {
    let (sin_polar, cos_polar) = params.polar.sin_cos();
    let (sin_azimuth, cos_azimuth) = params.azimuth.sin_cos();
    Vec3::new(
        sin_polar * cos_azimuth,
        cos_polar,
        sin_polar * sin_azimuth,
    )
    .normalize()
}
