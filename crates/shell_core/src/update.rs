use crate::{AppState, Effect, Msg, NavigationDecision, FILE_CHOOSER_REQUEST};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.is_exiting() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Started => vec![Effect::LoadUrl {
            url: state.site().site_url.clone(),
        }],
        Msg::NavigationRequested { url } => match state.policy().decide(&url) {
            NavigationDecision::DelegateExternally => vec![Effect::OpenExternally { url }],
            NavigationDecision::LoadInternally => Vec::new(),
        },
        Msg::NewWindowRequested { url } => match state.policy().decide(&url) {
            NavigationDecision::DelegateExternally => vec![Effect::OpenExternally { url }],
            // Single surface: the new window replaces the current page.
            NavigationDecision::LoadInternally => vec![Effect::LoadUrl { url }],
        },
        Msg::LoadStarted { .. } => {
            // The waiting input belongs to the document being replaced.
            state.upload_mut().discard();
            state.progress_mut().on_progress(0);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ProgressChanged(percent) => {
            state.progress_mut().on_progress(percent);
            state.mark_dirty();
            Vec::new()
        }
        Msg::LoadFinished { url } => {
            state.progress_mut().on_load_finished();
            state.history_mut().commit(&url);
            state.mark_dirty();
            Vec::new()
        }
        Msg::BackRequested => {
            if state.history_mut().go_back() {
                state.mark_dirty();
                vec![Effect::GoBack]
            } else {
                state.begin_exit();
                vec![Effect::Exit]
            }
        }
        Msg::ChooserRequested { callback, accept } => {
            let mut effects = Vec::with_capacity(2);
            if let Some(stale) = state.upload_mut().begin(callback) {
                effects.push(Effect::DeliverUpload(stale));
            }
            effects.push(Effect::LaunchPicker {
                request_id: FILE_CHOOSER_REQUEST,
                accept,
            });
            state.mark_dirty();
            effects
        }
        Msg::PickerLaunchFailed { request_id } => {
            match state.upload_mut().abort_launch(request_id) {
                Some(delivery) => {
                    state.mark_dirty();
                    vec![Effect::DeliverUpload(delivery)]
                }
                None => Vec::new(),
            }
        }
        Msg::PickerFinished {
            request_id,
            outcome,
        } => match state.upload_mut().complete(request_id, outcome) {
            Some(delivery) => {
                state.mark_dirty();
                vec![Effect::DeliverUpload(delivery)]
            }
            None => Vec::new(),
        },
        Msg::Suspended => vec![Effect::PauseSurface],
        Msg::Resumed => vec![Effect::ResumeSurface],
        Msg::CloseRequested => {
            state.begin_exit();
            vec![Effect::Exit]
        }
    };

    (state, effects)
}
