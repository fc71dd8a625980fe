//! Celestial body constants and placement.
//!
//! Radii, orbit distances, and spin rates for the fixed cast of bodies.
//! The sun and its light/flare anchor share one direction but sit at
//! different distances; the moon has its own parameterization.

use glam::Vec3;

use crate::graph::SceneNode;

/// Earth sphere radius in world units.
pub const EARTH_RADIUS: f32 = 1.5;
/// Scale applied to the Earth geometry for the atmosphere shell.
pub const ATMOSPHERE_SCALE: f32 = 1.015;
/// Atmosphere shell radius.
pub const ATMOSPHERE_RADIUS: f32 = EARTH_RADIUS * ATMOSPHERE_SCALE;
/// Moon sphere radius.
pub const MOON_RADIUS: f32 = 0.2;
/// Sun sphere radius.
pub const SUN_RADIUS: f32 = 10.0;

/// Distance of the sun body along the sun direction.
pub const SUN_DISTANCE: f32 = 50.0;
/// Distance of the point light and lens-flare anchor along the sun
/// direction.
pub const LIGHT_ANCHOR_DISTANCE: f32 = 40.0;
/// Distance of the moon along the moon direction.
pub const MOON_DISTANCE: f32 = 3.0;

/// Earth self-rotation rate in radians per second of scene time.
pub const EARTH_SPIN_RATE: f32 = 0.15;
/// Moon self-rotation rate in radians per second of scene time.
pub const MOON_SPIN_RATE: f32 = 0.1;

/// Write `direction × distance` into a body's position.
///
/// Idempotent: identical inputs always produce the identical position, so
/// the update path may re-place bodies on every parameter change.
pub fn place(node: &mut SceneNode, direction: Vec3, distance: f32) {
    node.position = direction * distance;
}
