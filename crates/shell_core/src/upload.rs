//! Single-slot mediation between file-chooser requests from web content and
//! the external picker flow.
//!
//! The slot is a two-state machine. A callback enters it when a chooser is
//! requested and leaves it exactly once, carried by a [`Delivery`]. Because
//! [`UploadCallback`] is neither `Clone` nor `Copy`, a callback that has been
//! handed out for delivery can no longer be reached through the mediator.

use std::fmt;

/// Correlates a picker launch with the result that comes back later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u32);

/// Request identifier used for every file-chooser launch.
pub const FILE_CHOOSER_REQUEST: RequestId = RequestId(1);

/// Opaque reference to a file picked by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef(String);

impl ResourceRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the picker flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Selected(ResourceRef),
    /// The flow reported success but carried no data.
    Empty,
    Cancelled,
}

/// Value handed to the waiting web content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    Files(Vec<ResourceRef>),
    Empty,
}

impl UploadResult {
    pub fn files(&self) -> &[ResourceRef] {
        match self {
            UploadResult::Files(files) => files,
            UploadResult::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files().is_empty()
    }
}

impl From<PickerOutcome> for UploadResult {
    fn from(outcome: PickerOutcome) -> Self {
        match outcome {
            PickerOutcome::Selected(reference) => UploadResult::Files(vec![reference]),
            PickerOutcome::Empty | PickerOutcome::Cancelled => UploadResult::Empty,
        }
    }
}

/// Handle on web content waiting for a file selection.
///
/// The token names the waiting `<input>` on the page side.
#[derive(Debug, PartialEq, Eq)]
pub struct UploadCallback {
    token: u64,
}

impl UploadCallback {
    pub fn new(token: u64) -> Self {
        Self { token }
    }

    pub fn token(&self) -> u64 {
        self.token
    }
}

/// A callback paired with the one result it will ever receive.
#[derive(Debug, PartialEq, Eq)]
pub struct Delivery {
    pub callback: UploadCallback,
    pub result: UploadResult,
}

impl Delivery {
    fn empty(callback: UploadCallback) -> Self {
        Self {
            callback,
            result: UploadResult::Empty,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Default)]
enum UploadSlot {
    #[default]
    Idle,
    AwaitingSelection(UploadCallback),
}

#[derive(Debug, PartialEq, Eq, Default)]
pub struct UploadMediator {
    slot: UploadSlot,
}

impl UploadMediator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_awaiting_selection(&self) -> bool {
        matches!(self.slot, UploadSlot::AwaitingSelection(_))
    }

    pub fn pending_token(&self) -> Option<u64> {
        match &self.slot {
            UploadSlot::AwaitingSelection(callback) => Some(callback.token()),
            UploadSlot::Idle => None,
        }
    }

    /// Stores `callback` as the pending one. A callback that was still
    /// waiting is returned with an empty result so it is never left hanging.
    pub fn begin(&mut self, callback: UploadCallback) -> Option<Delivery> {
        let previous = std::mem::replace(&mut self.slot, UploadSlot::AwaitingSelection(callback));
        match previous {
            UploadSlot::AwaitingSelection(stale) => Some(Delivery::empty(stale)),
            UploadSlot::Idle => None,
        }
    }

    /// The picker could not be started: flush the pending callback empty.
    pub fn abort_launch(&mut self, request_id: RequestId) -> Option<Delivery> {
        if request_id != FILE_CHOOSER_REQUEST {
            return None;
        }
        self.take().map(Delivery::empty)
    }

    /// The picker flow returned. Results for other request ids, or arriving
    /// while nothing is pending, are ignored.
    pub fn complete(&mut self, request_id: RequestId, outcome: PickerOutcome) -> Option<Delivery> {
        if request_id != FILE_CHOOSER_REQUEST {
            return None;
        }
        self.take().map(|callback| Delivery {
            callback,
            result: outcome.into(),
        })
    }

    /// Drops the pending callback without delivering anything.
    pub fn discard(&mut self) -> Option<UploadCallback> {
        self.take()
    }

    fn take(&mut self) -> Option<UploadCallback> {
        match std::mem::take(&mut self.slot) {
            UploadSlot::AwaitingSelection(callback) => Some(callback),
            UploadSlot::Idle => None,
        }
    }
}
