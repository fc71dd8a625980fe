//! Headless terrella demo.
//!
//! Builds the scene from configuration, then replays a scripted event
//! sequence over virtual 60 Hz frames: load completion, a full sun sweep,
//! an atmosphere retint, a cloud change, and a host resize. Logs what the
//! parameter panel and a renderer would observe at each step.

use clap::Parser;
use terrella_app::{SceneEvent, SceneState, apply_event, frame_update};
use terrella_config::{CliArgs, Config};
use terrella_materials::parse_hex_color;
use terrella_math::SphericalParams;
use terrella_scene::{HitShape, SceneClock};
use tracing::{debug, info, warn};

/// Virtual frame length; the demo steps scene time as if rendering at 60 Hz.
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .expect("Failed to resolve config directory")
            .join("terrella")
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    // Initialize logging with config and debug settings
    let log_dir = config_dir.join("logs");
    terrella_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let clock = SceneClock::start();

    let mut state = match SceneState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            warn!("scene build failed ({e}), reverting to stock scene settings");
            let mut fallback = config.clone();
            fallback.scene = Default::default();
            SceneState::from_config(&fallback).expect("stock scene settings must build")
        }
    };
    log_scene_summary(&state, &config);

    let total_frames = config.demo.frames;
    for frame in 0..total_frames {
        let elapsed = frame as f32 * FRAME_DT;

        for event in scripted_events(frame, total_frames, &config) {
            debug!("frame {frame}: {event:?}");
            apply_event(&mut state, event, elapsed);
        }

        let visible_before: Vec<bool> = state.markers.iter().map(|m| m.visible).collect();
        let flare_before = !state.flare_placements.is_empty();

        frame_update(&mut state, elapsed);

        for (marker, was_visible) in state.markers.iter().zip(visible_before) {
            if marker.visible != was_visible {
                info!(
                    "t={elapsed:.2}s: marker {:?} {} at offset ({:.1}, {:.1})",
                    marker.label,
                    if marker.visible { "revealed" } else { "occluded" },
                    marker.screen_offset.x,
                    marker.screen_offset.y
                );
            }
        }
        let flare_now = !state.flare_placements.is_empty();
        if flare_now != flare_before {
            info!(
                "t={elapsed:.2}s: lens flare {}",
                if flare_now { "entered view" } else { "left view" }
            );
        }

        if frame % 60 == 0 {
            debug!(
                "frame {frame}: t={elapsed:.2}s, earth spin {:.3} rad, gate open: {}",
                state.scene.node(state.earth).rotation_y,
                state.gate.is_open()
            );
        }
    }

    info!(
        "demo complete: {} frames ({:.1}s scene time) in {:.2}s wall clock",
        total_frames,
        total_frames as f32 * FRAME_DT,
        clock.elapsed()
    );
    info!("final sun direction {:?}", state.sun_direction);
    for marker in &state.markers {
        info!(
            "marker {:?}: visible={}, offset=({:.1}, {:.1})",
            marker.label, marker.visible, marker.screen_offset.x, marker.screen_offset.y
        );
    }
    if state.flare_placements.is_empty() {
        info!("lens flare hidden at run end");
    } else {
        info!(
            "lens flare visible at run end: {} elements on screen",
            state.flare_placements.len()
        );
    }
}

/// One log block describing what was built, before any frame runs.
fn log_scene_summary(state: &SceneState, config: &Config) {
    let star_count = match &state.scene.node(state.starfield).shape {
        HitShape::Points { points, .. } => points.len(),
        _ => 0,
    };
    info!(
        "scene built: {} root nodes, {} stars (extent {}, point size {}), {} markers",
        state.scene.len(),
        star_count,
        config.starfield.extent,
        state.starfield_material.point_size,
        state.markers.len()
    );
    info!(
        "earth textures: {}, {}, {}",
        state.materials.earth.day_map,
        state.materials.earth.night_map,
        state.materials.earth.specular_clouds_map
    );
    info!(
        "sun texture: {}, moon texture: {}",
        state.sun_material.map, state.moon_material.map
    );
    let flags = state.materials.atmosphere.render_flags();
    debug!(
        "atmosphere shell renders back faces: {}, transparent: {}",
        flags.back_face, flags.transparent
    );
    info!(
        "flare light: color {:?}, intensity {}, range {}, {} flare elements",
        state.light.color,
        state.light.intensity,
        state.light.range,
        state.flare.elements.len()
    );
    info!(
        "sun at {:?}, moon at {:?}, camera at {:?}",
        state.scene.node(state.sun).position,
        state.scene.node(state.moon).position,
        state.camera.position
    );
}

/// The scripted inputs for a run of `total` frames.
///
/// Load completion fires immediately, so the readiness delays play out at
/// the start. The sun sweeps a full circle through the middle of the run,
/// crossing in front of and behind the camera; a retint, a cloud change,
/// and a resize land in the second half.
fn scripted_events(frame: u32, total: u32, config: &Config) -> Vec<SceneEvent> {
    let mut events = Vec::new();

    if frame == 0 {
        events.push(SceneEvent::LoadCompleted);
    }

    let sweep_start = total / 4;
    let sweep_end = total / 2;
    if (sweep_start..sweep_end).contains(&frame) {
        let progress = (frame - sweep_start) as f32 / (sweep_end - sweep_start).max(1) as f32;
        let azimuth = config.scene.sun.azimuth + progress * std::f32::consts::TAU;
        events.push(SceneEvent::SunParamsChanged(SphericalParams::new(
            config.scene.sun.radius,
            config.scene.sun.polar,
            azimuth,
        )));
    }

    if frame == total / 2
        && let (Ok(day), Ok(night)) = (parse_hex_color("#4488cc"), parse_hex_color("#cc3300"))
    {
        events.push(SceneEvent::AtmosphereColorsChanged { day, night });
    }

    if frame == total * 5 / 8 {
        events.push(SceneEvent::CloudsChanged(0.3));
    }

    if frame == total * 3 / 4 {
        events.push(SceneEvent::ViewportResized {
            width: 1920.0,
            height: 1080.0,
            pixel_ratio: 2.0,
        });
    }

    events
}
