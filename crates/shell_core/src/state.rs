use crate::view_model::AppViewModel;
use crate::{
    NavigationHistory, NavigationPolicy, ProgressIndicator, SiteConfig, UploadMediator,
    UploadStatus,
};

#[derive(Debug, PartialEq, Eq, Default)]
pub struct AppState {
    site: SiteConfig,
    policy: NavigationPolicy,
    progress: ProgressIndicator,
    history: NavigationHistory,
    upload: UploadMediator,
    exiting: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site(site: SiteConfig) -> Self {
        let policy = site.policy();
        Self {
            site,
            policy,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            current_url: self.history.current().map(ToOwned::to_owned),
            progress: self.progress.view(),
            can_go_back: self.history.can_go_back(),
            upload: if self.upload.is_awaiting_selection() {
                UploadStatus::AwaitingSelection
            } else {
                UploadStatus::Idle
            },
            exiting: self.exiting,
            dirty: self.dirty,
        }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn policy(&self) -> &NavigationPolicy {
        &self.policy
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn progress_mut(&mut self) -> &mut ProgressIndicator {
        &mut self.progress
    }

    pub(crate) fn history_mut(&mut self) -> &mut NavigationHistory {
        &mut self.history
    }

    pub(crate) fn upload_mut(&mut self) -> &mut UploadMediator {
        &mut self.upload
    }

    pub(crate) fn begin_exit(&mut self) {
        self.exiting = true;
        // Pending web content is dropped with the surface, not answered.
        self.upload.discard();
        self.mark_dirty();
    }
}
