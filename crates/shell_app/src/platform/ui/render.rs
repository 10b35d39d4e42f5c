use shell_core::AppViewModel;
use tao::window::{ProgressBarState, ProgressState, Window};

/// What the window decorations should show for a given view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowChrome {
    pub title: String,
    /// Taskbar progress, `None` when the indicator is hidden.
    pub progress: Option<u32>,
}

pub fn render(base_title: &str, page_title: Option<&str>, view: &AppViewModel) -> WindowChrome {
    let mut title = match page_title.map(str::trim) {
        Some(page) if !page.is_empty() && page != base_title => {
            format!("{page} - {base_title}")
        }
        _ => base_title.to_string(),
    };

    let progress = if view.progress.visible {
        let value = view.progress.value.min(100);
        title.push_str(&format!(" ({value}%)"));
        Some(value)
    } else {
        None
    };

    WindowChrome { title, progress }
}

pub fn apply(window: &Window, chrome: &WindowChrome) {
    window.set_title(&chrome.title);
    window.set_progress_bar(ProgressBarState {
        state: Some(match chrome.progress {
            Some(_) => ProgressState::Normal,
            None => ProgressState::None,
        }),
        progress: chrome.progress.map(u64::from),
        desktop_filename: None,
    });
}
