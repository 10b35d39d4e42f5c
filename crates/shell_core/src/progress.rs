use crate::ProgressView;

/// Mirrors the surface's load progress into a show/hide + value pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressIndicator {
    visible: bool,
    value: u32,
}

impl ProgressIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reflects the latest reported value; order of reports is not assumed.
    pub fn on_progress(&mut self, percent: u32) {
        if percent < 100 {
            self.visible = true;
            self.value = percent;
        } else {
            self.visible = false;
        }
    }

    pub fn on_load_finished(&mut self) {
        self.visible = false;
    }

    pub fn view(&self) -> ProgressView {
        ProgressView {
            visible: self.visible,
            value: self.value,
        }
    }
}
