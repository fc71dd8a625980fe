//! Configuration structs with the scene's stock values as defaults, plus RON
//! persistence.

use std::f32::consts::PI;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level scene configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Celestial parameters and atmosphere tints.
    pub scene: SceneConfig,
    /// Camera placement and projection.
    pub camera: CameraConfig,
    /// Drawable surface size.
    pub viewport: ViewportConfig,
    /// Background star generation.
    pub starfield: StarfieldConfig,
    /// Points of interest shown as overlay labels.
    pub markers: MarkersConfig,
    /// Loading indicator and readiness delays.
    pub loading: LoadingConfig,
    /// Headless demo run settings.
    pub demo: DemoConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Spherical coordinates for a celestial body direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SphericalConfig {
    /// Radius, conventionally 1. Ignored by the direction computation.
    pub radius: f32,
    /// Polar angle in radians from +Y.
    pub polar: f32,
    /// Azimuthal angle in radians in the XZ plane.
    pub azimuth: f32,
}

impl SphericalConfig {
    /// Stock sun parameters.
    pub fn sun() -> Self {
        Self {
            radius: 1.0,
            polar: PI * 0.5,
            azimuth: 0.1,
        }
    }

    /// Stock moon parameters. The polar angle runs past pi by design; the
    /// direction math tolerates any real angle.
    pub fn moon() -> Self {
        Self {
            radius: 1.0,
            polar: PI * 0.3,
            azimuth: 2.0,
        }
    }
}

impl Default for SphericalConfig {
    fn default() -> Self {
        Self::sun()
    }
}

/// Celestial parameters and atmosphere appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Sun direction parameters.
    pub sun: SphericalConfig,
    /// Moon direction parameters.
    pub moon: SphericalConfig,
    /// Atmosphere tint on the lit limb, as `#rrggbb`.
    pub atmosphere_day_color: String,
    /// Atmosphere tint along the terminator, as `#rrggbb`.
    pub atmosphere_night_color: String,
    /// Cloud coverage in [0.0, 0.5].
    pub clouds: f32,
}

/// Camera placement and projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// World-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

/// Drawable surface size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in logical pixels.
    pub width: u32,
    /// Height in logical pixels.
    pub height: u32,
    /// Device pixel ratio. Clamped to 2.0 at use.
    pub pixel_ratio: f32,
}

/// Background star generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Number of stars.
    pub count: u32,
    /// Side length of the cube the stars fill, centered on the origin.
    pub extent: f32,
    /// Seed for the deterministic star layout.
    pub seed: u64,
    /// Perpendicular distance within which a ray counts a star as hit.
    pub point_threshold: f32,
}

/// Points of interest shown as overlay labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarkersConfig {
    /// Labeled world-space anchors.
    pub points: Vec<MarkerConfig>,
}

/// One labeled world-space anchor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarkerConfig {
    /// Anchor position in world space.
    pub position: [f32; 3],
    /// Label shown by the overlay.
    pub label: String,
}

/// Loading indicator and readiness delays, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoadingConfig {
    /// Delay after load completion before the indicator hides.
    pub hide_delay: f32,
    /// Delay after load completion before the scene is ready.
    pub ready_delay: f32,
}

/// Headless demo run settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of virtual 60 Hz frames to run.
    pub frames: u32,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sun: SphericalConfig::sun(),
            moon: SphericalConfig::moon(),
            atmosphere_day_color: "#00aaff".to_string(),
            atmosphere_night_color: "#ff6600".to_string(),
            clouds: 0.0,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [2.5, 1.5, 3.0],
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            pixel_ratio: 1.0,
        }
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 1_000_000,
            extent: 500.0,
            seed: 42,
            point_threshold: 1.0,
        }
    }
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            points: vec![MarkerConfig::default()],
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            position: [-0.8, 1.2, 0.6],
            label: "point-0".to_string(),
        }
    }
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            hide_delay: 0.5,
            ready_delay: 2.0,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { frames: 600 }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
