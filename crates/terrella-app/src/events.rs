//! External inputs to the scene core.
//!
//! Parameter-panel edits, loader completion, and host resize notifications
//! all arrive as values of one enum and are consumed by a single dispatcher.
//! Handlers never touch the scene directly, which keeps the state container
//! the only mutation path and makes event sequences replayable.

use glam::Vec3;
use terrella_math::SphericalParams;

/// One external input to the scene.
///
/// Color payloads are already-parsed linear RGB; hex strings are decoded at
/// the panel boundary so every payload here can be finiteness-checked the
/// same way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    /// The sun's spherical parameters changed.
    SunParamsChanged(SphericalParams),
    /// The moon's spherical parameters changed.
    MoonParamsChanged(SphericalParams),
    /// New atmosphere tint pair, applied to the surface and the shell alike.
    AtmosphereColorsChanged { day: Vec3, night: Vec3 },
    /// New cloud coverage request.
    CloudsChanged(f32),
    /// The drawable surface changed size.
    ViewportResized {
        width: f32,
        height: f32,
        pixel_ratio: f32,
    },
    /// Every startup asset finished loading.
    LoadCompleted,
}
