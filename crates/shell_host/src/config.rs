//! Shell configuration.
//!
//! Compiled-in defaults can be overridden by `avalanche_shell.ron` in the
//! working directory. Every field is optional in the file.

use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use shell_core::{SiteConfig, EXTERNAL_SERVICE_MARKERS, OWN_DOMAIN_MARKERS, SITE_URL};

use crate::ConfigError;

pub const CONFIG_FILENAME: &str = "avalanche_shell.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub site_url: String,
    pub own_markers: Vec<String>,
    pub external_markers: Vec<String>,
    pub window: WindowSettings,
    pub webview: WebviewSettings,
    pub logging: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebviewSettings {
    pub devtools: bool,
    /// Let media start without a user gesture.
    pub autoplay: bool,
    /// Ctrl +/- page zoom.
    pub zoom_hotkeys: bool,
    pub clipboard: bool,
    pub user_agent: Option<String>,
    pub max_upload_bytes: u64,
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogDestination {
    File,
    Terminal,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub destination: LogDestination,
    pub level: LogLevel,
    pub file: PathBuf,
}

impl ShellConfig {
    /// Reads `CONFIG_FILENAME` from `dir`. A missing file yields the defaults.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        Self::load_from(&dir.join(CONFIG_FILENAME))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn site(&self) -> SiteConfig {
        SiteConfig {
            site_url: self.site_url.clone(),
            own_markers: self.own_markers.clone(),
            external_markers: self.external_markers.clone(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            site_url: SITE_URL.to_string(),
            own_markers: OWN_DOMAIN_MARKERS.iter().map(|m| m.to_string()).collect(),
            external_markers: EXTERNAL_SERVICE_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            window: WindowSettings::default(),
            webview: WebviewSettings::default(),
            logging: LogSettings::default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Avalanche Media".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

impl Default for WebviewSettings {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            autoplay: true,
            zoom_hotkeys: true,
            clipboard: true,
            user_agent: None,
            max_upload_bytes: crate::MAX_UPLOAD_BYTES,
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            destination: LogDestination::Both,
            level: LogLevel::Info,
            file: PathBuf::from("./avalanche_shell.log"),
        }
    }
}
