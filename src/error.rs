//! Error types.
//!
//! Nothing here is fatal to the application: each error is logged at the
//! component boundary and replaced by a fallback (flat colour, silent audio,
//! default config value).

use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading a texture from the asset directory.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image {path} is empty")]
    Empty { path: PathBuf },
}

/// Failure reported by an audio backend.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device available: {0}")]
    NoOutput(String),
    #[error("cannot load audio source {path}: {reason}")]
    Load { path: PathBuf, reason: String },
    #[error("playback rejected: {0}")]
    Rejected(String),
}

/// Invalid launch configuration value.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("speed {0} is outside [{min}, {max}]", min = crate::sim::MIN_SPEED, max = crate::sim::MAX_SPEED)]
    Speed(f32),
    #[error("volume {0} is outside [0, 1]")]
    Volume(f32),
    #[error("asset directory {0} does not exist")]
    AssetDir(PathBuf),
}
