//! Event dispatch and the per-frame update.
//!
//! These two functions are the only mutation paths into [`SceneState`]
//! after construction. Dispatch recomputes synchronously: when
//! [`apply_event`] returns, every body position and material input derived
//! from the event is already current, so no consumer can observe the sun
//! body and the lit materials disagreeing within a frame.

use terrella_markers::project_markers;
use terrella_math::direction;
use terrella_scene::{anchor_screen_position, bodies};

use crate::events::SceneEvent;
use crate::state::SceneState;

/// Apply one external event at the given elapsed scene time.
///
/// Payloads carrying non-finite numbers are rejected wholesale with a
/// warning and the previous state stays untouched.
pub fn apply_event(state: &mut SceneState, event: SceneEvent, elapsed: f32) {
    match event {
        SceneEvent::SunParamsChanged(params) => {
            if !params.is_finite() {
                log::warn!("rejecting non-finite sun parameters: {params:?}");
                return;
            }
            state.sun_params = params;
            sync_sun(state);
        }
        SceneEvent::MoonParamsChanged(params) => {
            if !params.is_finite() {
                log::warn!("rejecting non-finite moon parameters: {params:?}");
                return;
            }
            state.moon_params = params;
            sync_moon(state);
        }
        SceneEvent::AtmosphereColorsChanged { day, night } => {
            if !day.is_finite() || !night.is_finite() {
                log::warn!(
                    "rejecting non-finite atmosphere colors: day={day:?} night={night:?}"
                );
                return;
            }
            state.materials.set_atmosphere_colors(day, night);
        }
        SceneEvent::CloudsChanged(clouds) => {
            if !clouds.is_finite() {
                log::warn!("rejecting non-finite cloud coverage: {clouds}");
                return;
            }
            state.materials.set_clouds(clouds);
        }
        SceneEvent::ViewportResized {
            width,
            height,
            pixel_ratio,
        } => {
            if !(width.is_finite() && height.is_finite() && pixel_ratio.is_finite()) {
                log::warn!("rejecting non-finite viewport size: {width}x{height}@{pixel_ratio}");
                return;
            }
            state.viewport.resize(width, height, pixel_ratio);
            state.camera.set_aspect_ratio(width, height);
        }
        SceneEvent::LoadCompleted => {
            state.settle.complete(elapsed);
        }
    }
}

/// Recompute the sun direction and push it to every consumer in one sweep:
/// the sun body, the light/flare anchor, and both lit materials.
pub(crate) fn sync_sun(state: &mut SceneState) {
    state.sun_direction = direction(state.sun_params);
    bodies::place(
        state.scene.node_mut(state.sun),
        state.sun_direction,
        bodies::SUN_DISTANCE,
    );
    bodies::place(
        state.scene.node_mut(state.light_anchor),
        state.sun_direction,
        bodies::LIGHT_ANCHOR_DISTANCE,
    );
    state.materials.set_sun_direction(state.sun_direction);
}

/// Recompute the moon direction and reposition the moon body.
pub(crate) fn sync_moon(state: &mut SceneState) {
    state.moon_direction = direction(state.moon_params);
    bodies::place(
        state.scene.node_mut(state.moon),
        state.moon_direction,
        bodies::MOON_DISTANCE,
    );
}

/// Advance one frame at the given elapsed scene time.
///
/// Order mirrors the render tick: settle timers first (they may open the
/// gate this frame), then body spin and shader time, then the flare layout,
/// and finally the occlusion pass once the gate is open.
pub fn frame_update(state: &mut SceneState, elapsed: f32) {
    if !elapsed.is_finite() {
        log::warn!("skipping frame update: non-finite elapsed time {elapsed}");
        return;
    }

    if state.settle.advance(elapsed, &mut state.gate) {
        log::info!("loading indicator hidden at t={elapsed:.2}s");
    }

    state.scene.node_mut(state.earth).rotation_y = elapsed * bodies::EARTH_SPIN_RATE;
    state.scene.node_mut(state.moon).rotation_y = elapsed * bodies::MOON_SPIN_RATE;
    state.materials.set_time(elapsed);

    update_flare(state);

    if state.gate.is_open() {
        project_markers(
            &mut state.markers,
            &state.camera,
            &state.scene,
            &state.viewport,
        );
    }
}

/// Lay the flare line out against the current camera. The flare renders
/// even before the scene settles, so this is not gated.
fn update_flare(state: &mut SceneState) {
    if !state.camera.is_finite() {
        return;
    }
    let anchor_world = state.scene.node(state.light_anchor).position;
    match anchor_screen_position(&state.camera, anchor_world) {
        Some(anchor) => state.flare_placements = state.flare.layout(anchor),
        None => state.flare_placements.clear(),
    }
}
