//! Shell core: pure navigation/upload state machine and view-model helpers.
mod config;
mod effect;
mod history;
mod msg;
mod policy;
mod progress;
mod state;
mod update;
mod upload;
mod view_model;

pub use config::{SiteConfig, EXTERNAL_SERVICE_MARKERS, OWN_DOMAIN_MARKERS, SITE_URL};
pub use effect::Effect;
pub use history::NavigationHistory;
pub use msg::Msg;
pub use policy::{NavigationDecision, NavigationPolicy, NavigationRule, UrlPredicate};
pub use progress::ProgressIndicator;
pub use state::AppState;
pub use update::update;
pub use upload::{
    Delivery, PickerOutcome, RequestId, ResourceRef, UploadCallback, UploadMediator, UploadResult,
    FILE_CHOOSER_REQUEST,
};
pub use view_model::{AppViewModel, ProgressView, UploadStatus};
