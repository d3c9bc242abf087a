//! Launch configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::audio::DEFAULT_VOLUME;
use crate::error::ConfigError;
use crate::render::starfield::DEFAULT_SEED;
use crate::sim::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};

#[derive(Debug, Clone, Parser)]
#[command(name = "cosmic-orbit", version, about = "Interactive solar system viewer")]
pub struct LaunchConfig {
    /// Asset root containing `textures/` and `audio/`
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Initial speed multiplier
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: f32,

    /// Initial audio volume in [0, 1]
    #[arg(long, default_value_t = DEFAULT_VOLUME)]
    pub volume: f32,

    /// Number of stars in the 3-D backdrop
    #[arg(long, default_value_t = 5000)]
    pub stars: usize,

    /// Seed for star placement
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Disable audio output
    #[arg(long)]
    pub mute: bool,

    /// Initial window width
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,

    /// Page to open first (`/`, `/simulation`, `/learn`)
    #[arg(long, default_value = "/")]
    pub page: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            speed: DEFAULT_SPEED,
            volume: DEFAULT_VOLUME,
            stars: 5000,
            seed: DEFAULT_SEED,
            mute: false,
            width: 1280.0,
            height: 800.0,
            page: "/".into(),
        }
    }
}

impl LaunchConfig {
    /// Every problem with the values, in field order.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            errors.push(ConfigError::Speed(self.speed));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            errors.push(ConfigError::Volume(self.volume));
        }
        if !self.assets.is_dir() {
            errors.push(ConfigError::AssetDir(self.assets.clone()));
        }
        errors
    }

    /// Log each invalid value and replace it with its default. A missing
    /// asset directory is only reported: every asset then falls back.
    pub fn sanitized(mut self) -> Self {
        for err in self.validate() {
            log::warn!("config: {err}");
            match err {
                ConfigError::Speed(_) => self.speed = DEFAULT_SPEED,
                ConfigError::Volume(_) => self.volume = DEFAULT_VOLUME,
                ConfigError::AssetDir(_) => {}
            }
        }
        self.width = self.width.max(640.0);
        self.height = self.height.max(480.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cfg = LaunchConfig::parse_from(["cosmic-orbit"]);
        assert_eq!(cfg.speed, DEFAULT_SPEED);
        assert_eq!(cfg.volume, DEFAULT_VOLUME);
        assert_eq!(cfg.stars, 5000);
        assert_eq!(cfg.page, "/");
        assert!(!cfg.mute);
    }

    #[test]
    fn parses_flags() {
        let cfg = LaunchConfig::parse_from([
            "cosmic-orbit", "--speed", "2.5", "--mute", "--page", "/learn", "--stars", "10",
        ]);
        assert_eq!(cfg.speed, 2.5);
        assert!(cfg.mute);
        assert_eq!(cfg.page, "/learn");
        assert_eq!(cfg.stars, 10);
    }

    #[test]
    fn out_of_range_values_are_reported_and_replaced() {
        let cfg = LaunchConfig {
            speed: 9.0,
            volume: -0.5,
            assets: std::env::temp_dir(),
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            vec![ConfigError::Speed(9.0), ConfigError::Volume(-0.5)]
        );
        let fixed = cfg.sanitized();
        assert_eq!(fixed.speed, DEFAULT_SPEED);
        assert_eq!(fixed.volume, DEFAULT_VOLUME);
        assert!(fixed.validate().is_empty());
    }

    #[test]
    fn missing_asset_dir_is_reported() {
        let cfg = LaunchConfig {
            assets: PathBuf::from("/definitely/not/here"),
            ..Default::default()
        };
        assert!(matches!(cfg.validate().as_slice(), [ConfigError::AssetDir(_)]));
    }
}
