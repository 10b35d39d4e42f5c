use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("refusing to open non-web url externally: {0}")]
    UnsupportedUrl(String),
    #[error("failed to start system opener: {0}")]
    Spawn(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("failed to start file dialog: {0}")]
    Spawn(#[from] io::Error),
    #[error("a file dialog is already open")]
    Busy,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("resource reference is not a local file: {0}")]
    UnsupportedReference(String),
    #[error("file too large (max {max_bytes}, actual {actual})")]
    TooLarge { max_bytes: u64, actual: u64 },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("malformed bridge message: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("render surface error: {0}")]
    Backend(String),
    #[error("render surface already destroyed")]
    Destroyed,
}
