use crate::{PickerOutcome, RequestId, UploadCallback};

#[derive(Debug, PartialEq, Eq)]
pub enum Msg {
    /// Host window and surface are up; load the site.
    Started,
    /// Surface is about to navigate the current page.
    NavigationRequested { url: String },
    /// Page asked for a new window (`target="_blank"`, `window.open`).
    NewWindowRequested { url: String },
    /// Surface began loading a page.
    LoadStarted { url: String },
    /// Surface load progress, in percent.
    ProgressChanged(u32),
    /// Surface finished loading a page.
    LoadFinished { url: String },
    /// User pressed back.
    BackRequested,
    /// Web content opened a file chooser.
    ChooserRequested {
        callback: UploadCallback,
        accept: Vec<String>,
    },
    /// The picker flow for `request_id` could not be started.
    PickerLaunchFailed { request_id: RequestId },
    /// The picker flow for `request_id` returned.
    PickerFinished {
        request_id: RequestId,
        outcome: PickerOutcome,
    },
    /// Host went to the background.
    Suspended,
    /// Host came back to the foreground.
    Resumed,
    /// User closed the window.
    CloseRequested,
}
