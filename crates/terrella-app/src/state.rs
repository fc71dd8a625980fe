//! The explicit scene-state container.
//!
//! Input parameters, derived directions, the hit-testable graph, material
//! state, markers, camera, viewport, and the readiness machinery live in one
//! struct instead of scattered globals. Construction reads the config once;
//! afterwards only the event dispatcher and the frame update mutate it.

use glam::Vec3;
use terrella_config::Config;
use terrella_markers::PointOfInterest;
use terrella_materials::{
    ColorError, MoonMaterial, PointLight, ShadedMaterials, StarfieldMaterial, SunMaterial,
    parse_hex_color,
};
use terrella_math::SphericalParams;
use terrella_scene::{
    Camera, FlarePlacement, FlareRig, HitShape, LoadSettle, NodeId, ReadinessGate, Scene,
    SceneNode, StarfieldGenerator, Viewport, bodies,
};

use crate::update;

/// Scene construction failure.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// An atmosphere color string in the config did not parse.
    #[error("invalid atmosphere color in config: {0}")]
    Color(#[from] ColorError),
}

/// Everything the frame loop reads and writes.
#[derive(Debug)]
pub struct SceneState {
    /// Sun steering parameters, the authoritative input.
    pub sun_params: SphericalParams,
    /// Moon steering parameters.
    pub moon_params: SphericalParams,
    /// Unit direction derived from [`Self::sun_params`].
    pub sun_direction: Vec3,
    /// Unit direction derived from [`Self::moon_params`].
    pub moon_direction: Vec3,

    /// The graph every occlusion query runs against.
    pub scene: Scene,
    pub earth: NodeId,
    pub atmosphere: NodeId,
    pub moon: NodeId,
    pub sun: NodeId,
    /// Flare anchor node; carries the lensflare child and the point light.
    pub light_anchor: NodeId,
    pub starfield: NodeId,

    /// Lit material pair, kept bitwise-synchronized on the sun direction.
    pub materials: ShadedMaterials,
    pub sun_material: SunMaterial,
    pub moon_material: MoonMaterial,
    pub starfield_material: StarfieldMaterial,
    /// Warm light riding the flare anchor.
    pub light: PointLight,
    pub flare: FlareRig,
    /// Latest flare layout; empty while the anchor is behind the camera.
    pub flare_placements: Vec<FlarePlacement>,

    pub markers: Vec<PointOfInterest>,
    pub camera: Camera,
    pub viewport: Viewport,

    pub gate: ReadinessGate,
    pub settle: LoadSettle,
}

impl SceneState {
    /// Build the scene from configuration and run the initial direction
    /// propagation, so body positions and material inputs are already
    /// consistent before the first frame.
    pub fn from_config(config: &Config) -> Result<Self, BuildError> {
        let sun_params = SphericalParams::new(
            config.scene.sun.radius,
            config.scene.sun.polar,
            config.scene.sun.azimuth,
        );
        let moon_params = SphericalParams::new(
            config.scene.moon.radius,
            config.scene.moon.polar,
            config.scene.moon.azimuth,
        );

        let mut materials = ShadedMaterials::default();
        materials.set_atmosphere_colors(
            parse_hex_color(&config.scene.atmosphere_day_color)?,
            parse_hex_color(&config.scene.atmosphere_night_color)?,
        );
        materials.set_clouds(config.scene.clouds);

        let mut scene = Scene::new();
        let earth = scene.add(SceneNode::new(
            "earth",
            Vec3::ZERO,
            HitShape::Sphere {
                radius: bodies::EARTH_RADIUS,
            },
        ));
        let atmosphere = scene.add(SceneNode::new(
            "atmosphere",
            Vec3::ZERO,
            HitShape::Sphere {
                radius: bodies::ATMOSPHERE_RADIUS,
            },
        ));
        let moon = scene.add(SceneNode::new(
            "moon",
            Vec3::ZERO,
            HitShape::Sphere {
                radius: bodies::MOON_RADIUS,
            },
        ));
        let sun = scene.add(SceneNode::new(
            "sun",
            Vec3::ZERO,
            HitShape::Sphere {
                radius: bodies::SUN_RADIUS,
            },
        ));
        // The flare billboard is a visual attachment of the light anchor;
        // neither answers ray queries.
        let light_anchor = scene.add(
            SceneNode::new("sun_light", Vec3::ZERO, HitShape::None)
                .with_child(SceneNode::new("lensflare", Vec3::ZERO, HitShape::None)),
        );

        let stars = StarfieldGenerator::new(
            config.starfield.seed,
            config.starfield.count,
            config.starfield.extent,
        )
        .generate();
        let starfield = scene.add(SceneNode::new(
            "stars",
            Vec3::ZERO,
            HitShape::Points {
                points: stars,
                threshold: config.starfield.point_threshold,
            },
        ));

        let viewport = Viewport::new(
            config.viewport.width as f32,
            config.viewport.height as f32,
            config.viewport.pixel_ratio,
        );
        let mut camera = Camera {
            position: Vec3::from_array(config.camera.position),
            fov_y: config.camera.fov_degrees.to_radians(),
            near: config.camera.near,
            far: config.camera.far,
            ..Camera::default()
        };
        camera.set_aspect_ratio(viewport.width, viewport.height);
        camera.look_at(Vec3::ZERO);

        let markers = config
            .markers
            .points
            .iter()
            .map(|m| PointOfInterest::new(Vec3::from_array(m.position), m.label.clone()))
            .collect();

        let mut state = Self {
            sun_params,
            moon_params,
            sun_direction: Vec3::ZERO,
            moon_direction: Vec3::ZERO,
            scene,
            earth,
            atmosphere,
            moon,
            sun,
            light_anchor,
            starfield,
            materials,
            sun_material: SunMaterial::default(),
            moon_material: MoonMaterial::default(),
            starfield_material: StarfieldMaterial::default(),
            light: PointLight::default(),
            flare: FlareRig::default(),
            flare_placements: Vec::new(),
            markers,
            camera,
            viewport,
            gate: ReadinessGate::new(),
            settle: LoadSettle::new(config.loading.hide_delay, config.loading.ready_delay),
        };

        // Same propagation path as a live parameter edit.
        update::sync_sun(&mut state);
        update::sync_moon(&mut state);
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrella_math::direction;

    fn small_config() -> Config {
        let mut config = Config::default();
        config.starfield.count = 16;
        config
    }

    #[test]
    fn test_build_creates_all_bodies() {
        let state = SceneState::from_config(&small_config()).expect("default config builds");
        assert_eq!(state.scene.len(), 6, "six root nodes");
        assert_eq!(state.scene.node(state.earth).name, "earth");
        assert_eq!(state.scene.node(state.atmosphere).name, "atmosphere");
        assert_eq!(state.scene.node(state.moon).name, "moon");
        assert_eq!(state.scene.node(state.sun).name, "sun");
        assert_eq!(state.scene.node(state.starfield).name, "stars");
        let anchor = state.scene.node(state.light_anchor);
        assert_eq!(anchor.name, "sun_light");
        assert_eq!(anchor.children.len(), 1, "lensflare rides the light");
        assert_eq!(anchor.children[0].name, "lensflare");
    }

    #[test]
    fn test_build_propagates_initial_sun_direction() {
        let state = SceneState::from_config(&small_config()).expect("default config builds");
        let expected = direction(state.sun_params);
        assert_eq!(state.sun_direction, expected);
        assert_eq!(state.materials.earth.sun_direction, expected);
        assert_eq!(state.materials.atmosphere.sun_direction, expected);
        let sun_pos = state.scene.node(state.sun).position;
        assert!(
            (sun_pos - expected * bodies::SUN_DISTANCE).length() < 1e-4,
            "sun at {sun_pos:?}"
        );
        let anchor_pos = state.scene.node(state.light_anchor).position;
        assert!(
            (anchor_pos - expected * bodies::LIGHT_ANCHOR_DISTANCE).length() < 1e-4,
            "light anchor at {anchor_pos:?}"
        );
    }

    #[test]
    fn test_build_places_moon() {
        let state = SceneState::from_config(&small_config()).expect("default config builds");
        let expected = direction(state.moon_params) * bodies::MOON_DISTANCE;
        let moon_pos = state.scene.node(state.moon).position;
        assert!(
            (moon_pos - expected).length() < 1e-4,
            "moon at {moon_pos:?}, expected {expected:?}"
        );
    }

    #[test]
    fn test_build_respects_star_count() {
        let state = SceneState::from_config(&small_config()).expect("default config builds");
        match &state.scene.node(state.starfield).shape {
            HitShape::Points { points, .. } => {
                assert_eq!(points.len(), 16, "star count from config")
            }
            other => panic!("starfield shape should be a point cloud, got {other:?}"),
        }
    }

    #[test]
    fn test_build_parses_config_colors() {
        let state = SceneState::from_config(&small_config()).expect("default config builds");
        let day = parse_hex_color("#00aaff").expect("stock day color");
        let night = parse_hex_color("#ff6600").expect("stock night color");
        assert_eq!(state.materials.earth.atmosphere_day_color, day);
        assert_eq!(state.materials.atmosphere.night_color, night);
    }

    #[test]
    fn test_build_rejects_bad_color() {
        let mut config = small_config();
        config.scene.atmosphere_day_color = "00aaff".into();
        let err = SceneState::from_config(&config).expect_err("missing hash should fail");
        assert!(matches!(err, BuildError::Color(_)), "got {err:?}");
    }

    #[test]
    fn test_build_configures_camera_and_viewport() {
        let state = SceneState::from_config(&small_config()).expect("default config builds");
        assert_eq!(state.camera.position, Vec3::new(2.5, 1.5, 3.0));
        assert!((state.camera.fov_y - 75.0_f32.to_radians()).abs() < 1e-6);
        assert!((state.camera.aspect_ratio - 1280.0 / 720.0).abs() < 1e-6);
        assert_eq!(state.viewport.width, 1280.0);
        assert_eq!(state.viewport.height, 720.0);
    }

    #[test]
    fn test_build_creates_markers_hidden() {
        let state = SceneState::from_config(&small_config()).expect("default config builds");
        assert_eq!(state.markers.len(), 1);
        assert_eq!(state.markers[0].label, "point-0");
        assert!(
            !state.markers[0].visible,
            "markers start hidden until the gate opens"
        );
    }

    #[test]
    fn test_build_starts_with_closed_gate() {
        let state = SceneState::from_config(&small_config()).expect("default config builds");
        assert!(!state.gate.is_open());
        assert!(!state.settle.indicator_hidden());
        assert!(state.flare_placements.is_empty());
    }
}
