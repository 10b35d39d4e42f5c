use std::process::{Command, Stdio};
use std::thread;

use shell_logging::shell_debug;
use url::Url;

use crate::LaunchError;

/// Hands a URL to whichever installed application is registered for it.
pub trait ExternalLauncher {
    fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Uses the desktop's URL opener (`xdg-open`, `open`, or the Windows URL handler).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl ExternalLauncher for SystemLauncher {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        // Only web URLs reach the opener; it must never be handed a path or flag.
        let parsed = Url::parse(url).map_err(|_| LaunchError::UnsupportedUrl(url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LaunchError::UnsupportedUrl(url.to_string()));
        }

        let mut child = opener_command(parsed.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        shell_debug!("Spawned opener pid={} for {}", child.id(), parsed);

        // Reap the opener; its exit status says nothing about the target app.
        thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("rundll32");
    cmd.arg("url.dll,FileProtocolHandler").arg(url);
    cmd
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    cmd
}
