use std::collections::BTreeSet;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use shell_core::{PickerOutcome, RequestId, ResourceRef};
use shell_logging::{shell_debug, shell_info};
use url::Url;

use crate::PickerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRequest {
    pub request_id: RequestId,
    pub filters: Vec<DialogFilter>,
}

/// Starts the external file-picking flow. The result comes back later,
/// outside this call, tagged with the request id.
pub trait FilePicker {
    fn launch(&mut self, request: PickerRequest) -> Result<(), PickerError>;
}

/// Receives the result of a picker flow, on the picker's own thread.
pub trait PickerNotifier: Send + 'static {
    fn picker_finished(&self, request_id: RequestId, outcome: PickerOutcome);
}

/// Allows one picker dialog on screen at a time. Every launch shares
/// `FILE_CHOOSER_REQUEST`, so a second live dialog could answer the wrong
/// input.
#[derive(Debug, Clone, Default)]
pub struct DialogGate {
    open: Arc<AtomicBool>,
}

impl DialogGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the gate, or returns `None` while another dialog holds it.
    pub fn try_open(&self) -> Option<DialogTicket> {
        self.open
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| DialogTicket {
                open: Arc::clone(&self.open),
            })
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }
}

/// Held for as long as a dialog is showing; dropping it reopens the gate.
#[derive(Debug)]
pub struct DialogTicket {
    open: Arc<AtomicBool>,
}

impl Drop for DialogTicket {
    fn drop(&mut self) {
        self.open.store(false, Ordering::Release);
    }
}

/// Native open-file dialog running on a helper thread.
pub struct DialogPicker<N> {
    notifier: N,
    title: String,
    gate: DialogGate,
}

impl<N: PickerNotifier + Clone> DialogPicker<N> {
    pub fn new(notifier: N, title: impl Into<String>) -> Self {
        Self {
            notifier,
            title: title.into(),
            gate: DialogGate::new(),
        }
    }
}

impl<N: PickerNotifier + Clone> FilePicker for DialogPicker<N> {
    fn launch(&mut self, request: PickerRequest) -> Result<(), PickerError> {
        let ticket = self.gate.try_open().ok_or(PickerError::Busy)?;
        let notifier = self.notifier.clone();
        let title = self.title.clone();
        thread::Builder::new()
            .name("file-picker".to_string())
            .spawn(move || {
                let mut dialog = rfd::AsyncFileDialog::new().set_title(title);
                for filter in &request.filters {
                    dialog =
                        dialog.add_filter(filter.name.as_str(), filter.extensions.as_slice());
                }
                let picked = futures::executor::block_on(dialog.pick_file());
                let outcome = match picked {
                    Some(handle) => outcome_for_path(handle.path()),
                    None => PickerOutcome::Cancelled,
                };
                shell_info!("File dialog for {:?} finished: {:?}", request.request_id, outcome);
                // Release before notifying so the next chooser is not refused.
                drop(ticket);
                notifier.picker_finished(request.request_id, outcome);
            })?;
        Ok(())
    }
}

/// Turns a picked path into a `file://` resource reference.
pub fn outcome_for_path(path: &Path) -> PickerOutcome {
    match Url::from_file_path(path) {
        Ok(url) => PickerOutcome::Selected(ResourceRef::new(String::from(url))),
        Err(()) => PickerOutcome::Empty,
    }
}

/// Maps an `<input accept>` list (extensions and MIME types, `image/*`
/// globs included) onto a single dialog filter. Returns no filter when
/// nothing is recognised, so the dialog shows every file.
pub fn dialog_filters(accept: &[String]) -> Vec<DialogFilter> {
    let mut extensions = BTreeSet::new();
    for token in accept.iter().flat_map(|entry| entry.split(',')) {
        let token = token.trim().to_ascii_lowercase();
        if let Some(ext) = token.strip_prefix('.') {
            if !ext.is_empty() {
                extensions.insert(ext.to_string());
            }
        } else if token.contains('/') {
            match mime_guess::get_mime_extensions_str(&token) {
                Some(known) => extensions.extend(known.iter().map(|ext| ext.to_string())),
                None => shell_debug!("No extensions known for accept type {}", token),
            }
        }
    }

    if extensions.is_empty() {
        return Vec::new();
    }
    vec![DialogFilter {
        name: "Accepted files".to_string(),
        extensions: extensions.into_iter().collect(),
    }]
}
