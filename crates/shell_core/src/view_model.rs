#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressView {
    pub visible: bool,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    AwaitingSelection,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub current_url: Option<String>,
    pub progress: ProgressView,
    pub can_go_back: bool,
    pub upload: UploadStatus,
    pub exiting: bool,
    pub dirty: bool,
}
