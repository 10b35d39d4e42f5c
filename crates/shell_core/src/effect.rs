use crate::{Delivery, RequestId};

#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    LoadUrl { url: String },
    OpenExternally { url: String },
    GoBack,
    LaunchPicker {
        request_id: RequestId,
        accept: Vec<String>,
    },
    DeliverUpload(Delivery),
    PauseSurface,
    ResumeSurface,
    /// Tear down the surface and leave the event loop.
    Exit,
}
