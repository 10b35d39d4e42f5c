use std::path::PathBuf;

use anyhow::Context;
use shell_core::{AppState, AppViewModel, Msg};
use shell_host::{DialogPicker, EffectRunner, Shell, ShellConfig, SystemLauncher};
use shell_logging::{shell_info, shell_warn};
use tao::dpi::LogicalSize;
use tao::event::{ElementState, Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tao::keyboard::Key;
use tao::window::{Window, WindowBuilder};

use super::events::{ProxyNotifier, UserEvent};
use super::surface::{build_webview, WrySurface};
use super::{logging, ui};

const PICKER_TITLE: &str = "Choose a file to upload";

pub fn run_app() -> anyhow::Result<()> {
    let config_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let loaded = ShellConfig::load(&config_dir);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    logging::initialize(&config.logging);
    if let Err(err) = &loaded {
        shell_warn!("{}; falling back to built-in defaults", err);
    }
    shell_info!("Starting shell for {}", config.site_url);

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(config.window.title.as_str())
        .with_inner_size(LogicalSize::new(config.window.width, config.window.height))
        .build(&event_loop)
        .context("failed to create window")?;

    let state = AppState::with_site(config.site());
    let webview = build_webview(&window, &config, state.policy().clone(), proxy.clone())
        .context("failed to build webview")?;

    let runner = EffectRunner::new(
        WrySurface::new(webview),
        SystemLauncher,
        DialogPicker::new(ProxyNotifier::new(proxy), PICKER_TITLE),
        config.webview.max_upload_bytes,
    );
    let mut shell = Shell::new(state, runner);
    let mut chrome = Chrome::new(config.window.title.clone());

    if let Some(view) = shell.dispatch(Msg::Started) {
        chrome.render(&window, &view);
    }

    event_loop.run(move |event, _target, control_flow| {
        *control_flow = ControlFlow::Wait;

        let msg = match event {
            Event::UserEvent(UserEvent::Dispatch(msg)) => Some(msg),
            Event::UserEvent(UserEvent::TitleChanged(title)) => {
                chrome.page_title = Some(title);
                chrome.render(&window, &shell.view());
                None
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => Some(Msg::CloseRequested),
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } if event.state == ElementState::Pressed && event.logical_key == Key::BrowserBack => {
                Some(Msg::BackRequested)
            }
            Event::Suspended => Some(Msg::Suspended),
            Event::Resumed => Some(Msg::Resumed),
            _ => None,
        };

        if let Some(msg) = msg {
            if let Some(view) = shell.dispatch(msg) {
                chrome.render(&window, &view);
            }
        }

        if shell.is_exiting() {
            shell_info!("Shell exiting");
            *control_flow = ControlFlow::Exit;
        }
    })
}

struct Chrome {
    base_title: String,
    page_title: Option<String>,
}

impl Chrome {
    fn new(base_title: String) -> Self {
        Self {
            base_title,
            page_title: None,
        }
    }

    fn render(&self, window: &Window, view: &AppViewModel) {
        let chrome = ui::render::render(&self.base_title, self.page_title.as_deref(), view);
        ui::render::apply(window, &chrome);
    }
}
