//! Page-side bridge between web content and the host.
//!
//! The initialization script intercepts file inputs, reports load progress
//! and back gestures over `window.ipc`, and exposes `deliver` so the host can
//! answer a pending chooser.

use serde::Deserialize;
use shell_core::{Msg, UploadCallback};

use crate::{BridgeError, UploadPayload};

pub const BRIDGE_SCRIPT: &str = r#"
(function () {
  if (window.__avalancheShell) { return; }
  var pending = {};
  var nextToken = 1;

  function post(message) {
    try { window.ipc.postMessage(JSON.stringify(message)); } catch (e) {}
  }

  document.addEventListener("click", function (event) {
    var target = event.target;
    var input = target && target.closest ? target.closest("input[type=file]") : null;
    if (!input || input.disabled) { return; }
    event.preventDefault();
    event.stopImmediatePropagation();
    var token = nextToken++;
    pending[token] = input;
    var accept = (input.getAttribute("accept") || "")
      .split(",")
      .map(function (s) { return s.trim(); })
      .filter(function (s) { return s.length > 0; });
    post({ kind: "chooser", token: token, accept: accept });
  }, true);

  function reportReadyState() {
    if (document.readyState === "interactive") {
      post({ kind: "progress", percent: 70 });
    } else if (document.readyState === "complete") {
      post({ kind: "progress", percent: 100 });
    }
  }
  document.addEventListener("readystatechange", reportReadyState);
  reportReadyState();

  window.addEventListener("keydown", function (event) {
    if ((event.altKey && event.key === "ArrowLeft") || event.key === "BrowserBack") {
      event.preventDefault();
      post({ kind: "back" });
    }
  }, true);
  window.addEventListener("mouseup", function (event) {
    if (event.button === 3) {
      event.preventDefault();
      post({ kind: "back" });
    }
  }, true);

  function deliver(token, files) {
    var input = pending[token];
    delete pending[token];
    if (!input) { return; }
    if (!files || files.length === 0) {
      input.dispatchEvent(new Event("cancel", { bubbles: true }));
      return;
    }
    var transfer = new DataTransfer();
    files.forEach(function (file) {
      var binary = atob(file.data);
      var bytes = new Uint8Array(binary.length);
      for (var i = 0; i < binary.length; i++) { bytes[i] = binary.charCodeAt(i); }
      transfer.items.add(new File([bytes], file.name, { type: file.mime }));
    });
    input.files = transfer.files;
    input.dispatchEvent(new Event("input", { bubbles: true }));
    input.dispatchEvent(new Event("change", { bubbles: true }));
  }

  window.__avalancheShell = { deliver: deliver };
})();
"#;

/// Stops page media when the host goes to the background.
pub const PAUSE_MEDIA_SCRIPT: &str =
    r#"document.querySelectorAll("video, audio").forEach(function (m) { m.pause(); });"#;

/// Messages posted by [`BRIDGE_SCRIPT`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeMessage {
    Chooser {
        token: u64,
        #[serde(default)]
        accept: Vec<String>,
    },
    Progress {
        percent: u32,
    },
    Back,
}

impl BridgeMessage {
    pub fn into_msg(self) -> Msg {
        match self {
            BridgeMessage::Chooser { token, accept } => Msg::ChooserRequested {
                callback: UploadCallback::new(token),
                accept,
            },
            BridgeMessage::Progress { percent } => Msg::ProgressChanged(percent),
            BridgeMessage::Back => Msg::BackRequested,
        }
    }
}

pub fn parse_message(body: &str) -> Result<BridgeMessage, BridgeError> {
    Ok(serde_json::from_str(body)?)
}

/// Script answering the chooser identified by `token`. `None` reports that
/// nothing was selected.
pub fn delivery_script(token: u64, files: Option<&[UploadPayload]>) -> Result<String, BridgeError> {
    let files = serde_json::to_string(&files)?;
    Ok(format!(
        "window.__avalancheShell && window.__avalancheShell.deliver({token}, {files});"
    ))
}
