//! Command-line argument parsing for the terrella demo.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Terrella command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "terrella", about = "Star-planet-moon scene demo")]
pub struct CliArgs {
    /// Viewport width in logical pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height in logical pixels.
    #[arg(long)]
    pub height: Option<u32>,

    /// Number of virtual 60 Hz frames the demo runs.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Starfield seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of stars.
    #[arg(long)]
    pub stars: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.viewport.width = w;
        }
        if let Some(h) = args.height {
            self.viewport.height = h;
        }
        if let Some(frames) = args.frames {
            self.demo.frames = frames;
        }
        if let Some(seed) = args.seed {
            self.starfield.seed = seed;
        }
        if let Some(stars) = args.stars {
            self.starfield.count = stars;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            width: None,
            height: None,
            frames: None,
            seed: None,
            stars: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920),
            seed: Some(7),
            log_level: Some("debug".to_string()),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.viewport.width, 1920);
        assert_eq!(config.starfield.seed, 7);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults.
        assert_eq!(config.viewport.height, 720);
        assert_eq!(config.demo.frames, 600);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, original);
    }
}
