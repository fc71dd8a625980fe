//! Configuration for the terrella scene.
//!
//! Settings persist to disk as RON, carry the scene's stock values as
//! defaults, tolerate missing or unknown fields, and can be overridden from
//! the command line.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DebugConfig, DemoConfig, LoadingConfig, MarkerConfig, MarkersConfig,
    SceneConfig, SphericalConfig, StarfieldConfig, ViewportConfig,
};
pub use error::ConfigError;
