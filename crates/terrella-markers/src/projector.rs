//! The occlusion-aware projector pass.
//!
//! Once per frame, each marker is projected through the camera and ray-tested
//! against the scene graph. A strictly nearer hit hides the marker; no hit or
//! a farther hit shows it. The screen offset updates on every successful
//! projection, visible or not, so the overlay never lags a resize.

use glam::Vec2;
use terrella_scene::{Camera, Scene, Viewport};

use crate::point::PointOfInterest;

/// Overlay translation for a projected NDC position, in pixels.
///
/// NDC +Y points up while overlay +Y points down, hence the sign flip.
pub fn screen_offset(ndc: Vec2, viewport: &Viewport) -> Vec2 {
    Vec2::new(ndc.x * viewport.width * 0.5, -ndc.y * viewport.height * 0.5)
}

/// Run one projector pass over every marker.
///
/// Skips the whole pass when the camera or viewport state is not finite, and
/// skips a single marker when its projection degenerates. Both cases preserve
/// the previous frame's outputs.
pub fn project_markers(
    markers: &mut [PointOfInterest],
    camera: &Camera,
    scene: &Scene,
    viewport: &Viewport,
) {
    if !camera.is_finite() || !viewport.is_valid() {
        log::warn!("marker pass skipped: camera or viewport state is not finite");
        return;
    }

    for marker in markers.iter_mut() {
        let Some(ndc) = camera.project(marker.world_position) else {
            // Behind the camera plane. Hide, keep the last good offset.
            set_visible(marker, false);
            continue;
        };
        if !ndc.is_finite() {
            log::warn!("marker {:?} projected to a non-finite position", marker.label);
            continue;
        }

        let ndc_xy = Vec2::new(ndc.x, ndc.y);
        let occluded = match camera.viewport_ray(ndc_xy) {
            Some(ray) => scene.raycast(&ray).is_some_and(|hit| {
                hit.distance < camera.position.distance(marker.world_position)
            }),
            None => false,
        };

        set_visible(marker, !occluded);
        marker.screen_offset = screen_offset(ndc_xy, viewport);
    }
}

fn set_visible(marker: &mut PointOfInterest, visible: bool) {
    if marker.visible != visible {
        log::debug!(
            "marker {:?} {}",
            marker.label,
            if visible { "revealed" } else { "occluded" }
        );
    }
    marker.visible = visible;
}
