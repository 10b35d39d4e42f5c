use std::sync::Once;

use pretty_assertions::assert_eq;
use shell_core::{
    update, AppState, Delivery, Effect, Msg, PickerOutcome, ProgressView, RequestId,
    ResourceRef, SiteConfig, UploadCallback, UploadResult, UploadStatus, FILE_CHOOSER_REQUEST,
    SITE_URL,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(shell_logging::initialize_for_tests);
}

fn request_chooser(state: AppState, token: u64) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::ChooserRequested {
            callback: UploadCallback::new(token),
            accept: vec!["image/*".to_string()],
        },
    )
}

fn finish_load(state: AppState, url: &str) -> AppState {
    update(
        state,
        Msg::LoadFinished {
            url: url.to_string(),
        },
    )
    .0
}

#[test]
fn started_loads_configured_site() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::Started);
    assert_eq!(
        effects,
        vec![Effect::LoadUrl {
            url: SITE_URL.to_string()
        }]
    );

    let site = SiteConfig {
        site_url: "https://blog.example.org/".to_string(),
        ..SiteConfig::default()
    };
    let (_state, effects) = update(AppState::with_site(site), Msg::Started);
    assert_eq!(
        effects,
        vec![Effect::LoadUrl {
            url: "https://blog.example.org/".to_string()
        }]
    );
}

#[test]
fn delegated_navigation_opens_externally() {
    init_logging();
    let (_state, effects) = update(
        AppState::new(),
        Msg::NavigationRequested {
            url: "https://youtu.be/abc".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::OpenExternally {
            url: "https://youtu.be/abc".to_string()
        }]
    );

    let (_state, effects) = update(
        AppState::new(),
        Msg::NavigationRequested {
            url: "https://designsteve.github.io/Avalanche-Media-Blog/about".to_string(),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn new_window_requests_stay_in_single_surface() {
    init_logging();
    let (_state, effects) = update(
        AppState::new(),
        Msg::NewWindowRequested {
            url: "https://example.com/popup".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::LoadUrl {
            url: "https://example.com/popup".to_string()
        }]
    );

    let (_state, effects) = update(
        AppState::new(),
        Msg::NewWindowRequested {
            url: "https://wa.me/1555".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::OpenExternally {
            url: "https://wa.me/1555".to_string()
        }]
    );
}

#[test]
fn progress_below_hundred_shows_value() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::ProgressChanged(50));

    assert!(effects.is_empty());
    assert_eq!(
        state.view().progress,
        ProgressView {
            visible: true,
            value: 50
        }
    );
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn progress_at_hundred_hides_indicator() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ProgressChanged(50));
    let (state, _) = update(state, Msg::ProgressChanged(100));
    assert!(!state.view().progress.visible);
}

#[test]
fn progress_tolerates_out_of_order_reports() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ProgressChanged(80));
    let (state, _) = update(state, Msg::ProgressChanged(30));
    assert_eq!(state.view().progress.value, 30);
    let (state, _) = update(state, Msg::ProgressChanged(100));
    let (state, _) = update(state, Msg::ProgressChanged(60));
    assert!(state.view().progress.visible);
    assert_eq!(state.view().progress.value, 60);
}

#[test]
fn load_finished_hides_indicator_idempotently() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::LoadStarted {
            url: SITE_URL.to_string(),
        },
    );
    assert_eq!(
        state.view().progress,
        ProgressView {
            visible: true,
            value: 0
        }
    );

    let state = finish_load(state, SITE_URL);
    assert!(!state.view().progress.visible);
    let state = finish_load(state, SITE_URL);
    assert!(!state.view().progress.visible);
    assert_eq!(state.view().current_url.as_deref(), Some(SITE_URL));
}

#[test]
fn back_walks_history_then_exits() {
    init_logging();
    let state = finish_load(AppState::new(), "https://designsteve.github.io/a");
    let state = finish_load(state, "https://designsteve.github.io/b");
    assert!(state.view().can_go_back);

    let (state, effects) = update(state, Msg::BackRequested);
    assert_eq!(effects, vec![Effect::GoBack]);
    let state = finish_load(state, "https://designsteve.github.io/a");
    assert!(!state.view().can_go_back);
    assert_eq!(
        state.view().current_url.as_deref(),
        Some("https://designsteve.github.io/a")
    );

    let (state, effects) = update(state, Msg::BackRequested);
    assert_eq!(effects, vec![Effect::Exit]);
    assert!(state.view().exiting);
}

#[test]
fn reloading_same_page_does_not_grow_history() {
    init_logging();
    let state = finish_load(AppState::new(), SITE_URL);
    let state = finish_load(state, SITE_URL);
    assert!(!state.view().can_go_back);
}

#[test]
fn chooser_request_launches_picker() {
    init_logging();
    let (state, effects) = request_chooser(AppState::new(), 1);

    assert_eq!(
        effects,
        vec![Effect::LaunchPicker {
            request_id: FILE_CHOOSER_REQUEST,
            accept: vec!["image/*".to_string()],
        }]
    );
    assert_eq!(state.view().upload, UploadStatus::AwaitingSelection);
}

#[test]
fn second_chooser_request_flushes_first_callback() {
    init_logging();
    let (state, _) = request_chooser(AppState::new(), 1);
    let (state, effects) = request_chooser(state, 2);

    assert_eq!(
        effects,
        vec![
            Effect::DeliverUpload(Delivery {
                callback: UploadCallback::new(1),
                result: UploadResult::Empty,
            }),
            Effect::LaunchPicker {
                request_id: FILE_CHOOSER_REQUEST,
                accept: vec!["image/*".to_string()],
            },
        ]
    );
    assert_eq!(state.view().upload, UploadStatus::AwaitingSelection);
}

#[test]
fn launch_failure_declines_chooser() {
    init_logging();
    let (state, _) = request_chooser(AppState::new(), 7);
    let (state, effects) = update(
        state,
        Msg::PickerLaunchFailed {
            request_id: FILE_CHOOSER_REQUEST,
        },
    );

    assert_eq!(
        effects,
        vec![Effect::DeliverUpload(Delivery {
            callback: UploadCallback::new(7),
            result: UploadResult::Empty,
        })]
    );
    assert_eq!(state.view().upload, UploadStatus::Idle);

    // A late result for the aborted launch finds nothing to answer.
    let (_state, effects) = update(
        state,
        Msg::PickerFinished {
            request_id: FILE_CHOOSER_REQUEST,
            outcome: PickerOutcome::Cancelled,
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn picked_file_is_delivered_as_single_element() {
    init_logging();
    let (state, _) = request_chooser(AppState::new(), 3);
    let (state, effects) = update(
        state,
        Msg::PickerFinished {
            request_id: FILE_CHOOSER_REQUEST,
            outcome: PickerOutcome::Selected(ResourceRef::new("content://x")),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::DeliverUpload(Delivery {
            callback: UploadCallback::new(3),
            result: UploadResult::Files(vec![ResourceRef::new("content://x")]),
        })]
    );
    assert_eq!(state.view().upload, UploadStatus::Idle);
}

#[test]
fn every_chooser_request_gets_exactly_one_delivery() {
    init_logging();
    let mut delivered = Vec::new();
    let mut state = AppState::new();

    let script = vec![
        Msg::ChooserRequested {
            callback: UploadCallback::new(1),
            accept: Vec::new(),
        },
        Msg::ChooserRequested {
            callback: UploadCallback::new(2),
            accept: Vec::new(),
        },
        Msg::PickerFinished {
            request_id: FILE_CHOOSER_REQUEST,
            outcome: PickerOutcome::Empty,
        },
        Msg::PickerFinished {
            request_id: FILE_CHOOSER_REQUEST,
            outcome: PickerOutcome::Empty,
        },
        Msg::ChooserRequested {
            callback: UploadCallback::new(3),
            accept: Vec::new(),
        },
        Msg::PickerFinished {
            request_id: RequestId(99),
            outcome: PickerOutcome::Cancelled,
        },
        Msg::PickerLaunchFailed {
            request_id: FILE_CHOOSER_REQUEST,
        },
        Msg::ChooserRequested {
            callback: UploadCallback::new(4),
            accept: Vec::new(),
        },
        Msg::PickerFinished {
            request_id: FILE_CHOOSER_REQUEST,
            outcome: PickerOutcome::Selected(ResourceRef::new("file:///tmp/a.png")),
        },
    ];

    for msg in script {
        let (next, effects) = update(state, msg);
        state = next;
        delivered.extend(effects.into_iter().filter_map(|effect| match effect {
            Effect::DeliverUpload(delivery) => Some(delivery.callback.token()),
            _ => None,
        }));
    }

    assert_eq!(delivered, vec![1, 2, 3, 4]);
    assert_eq!(state.view().upload, UploadStatus::Idle);
}

#[test]
fn lifecycle_messages_map_to_surface_effects() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Suspended);
    assert_eq!(effects, vec![Effect::PauseSurface]);
    let (_state, effects) = update(state, Msg::Resumed);
    assert_eq!(effects, vec![Effect::ResumeSurface]);
}

#[test]
fn close_drops_pending_upload_and_ignores_later_events() {
    init_logging();
    let (state, _) = request_chooser(AppState::new(), 5);
    let (state, effects) = update(state, Msg::CloseRequested);

    assert_eq!(effects, vec![Effect::Exit]);
    let view = state.view();
    assert!(view.exiting);
    assert_eq!(view.upload, UploadStatus::Idle);

    let (_state, effects) = update(
        state,
        Msg::PickerFinished {
            request_id: FILE_CHOOSER_REQUEST,
            outcome: PickerOutcome::Selected(ResourceRef::new("file:///tmp/late.txt")),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn new_document_drops_pending_upload_unanswered() {
    init_logging();
    let (state, _) = request_chooser(AppState::new(), 1);
    let (state, effects) = update(
        state,
        Msg::LoadStarted {
            url: "https://designsteve.github.io/Avalanche-Media-Blog/b".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().upload, UploadStatus::Idle);

    // The next page starts its own chooser tokens; nothing stale may reach it.
    let (state, effects) = request_chooser(state, 1);
    assert_eq!(
        effects,
        vec![Effect::LaunchPicker {
            request_id: FILE_CHOOSER_REQUEST,
            accept: vec!["image/*".to_string()],
        }]
    );
    let (_state, effects) = update(
        state,
        Msg::PickerFinished {
            request_id: FILE_CHOOSER_REQUEST,
            outcome: PickerOutcome::Selected(ResourceRef::new("file:///tmp/b.png")),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::DeliverUpload(Delivery {
            callback: UploadCallback::new(1),
            result: UploadResult::Files(vec![ResourceRef::new("file:///tmp/b.png")]),
        })]
    );
}
