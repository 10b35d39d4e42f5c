//! Shell host: effect execution and the seams to the platform.
mod bridge;
mod config;
mod launcher;
mod payload;
mod picker;
mod runner;
mod shell;
mod surface;
mod types;

pub use bridge::{delivery_script, parse_message, BridgeMessage, BRIDGE_SCRIPT, PAUSE_MEDIA_SCRIPT};
pub use config::{
    LogDestination, LogLevel, LogSettings, ShellConfig, WebviewSettings, WindowSettings,
    CONFIG_FILENAME,
};
pub use launcher::{ExternalLauncher, SystemLauncher};
pub use payload::{load_payload, UploadPayload, MAX_UPLOAD_BYTES};
pub use picker::{
    dialog_filters, outcome_for_path, DialogFilter, DialogGate, DialogPicker, DialogTicket,
    FilePicker, PickerNotifier, PickerRequest,
};
pub use runner::EffectRunner;
pub use shell::Shell;
pub use surface::RenderSurface;
pub use types::{BridgeError, ConfigError, LaunchError, PayloadError, PickerError, SurfaceError};
