use shell_core::{Msg, NavigationDecision, NavigationPolicy};
use shell_host::{
    parse_message, RenderSurface, ShellConfig, SurfaceError, BRIDGE_SCRIPT, PAUSE_MEDIA_SCRIPT,
};
use shell_logging::{shell_debug, shell_warn};
use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use wry::http::Request;
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use super::events::UserEvent;

/// `RenderSurface` backed by a wry webview. Dropping the webview is the
/// destroy step.
pub struct WrySurface {
    webview: Option<WebView>,
}

impl WrySurface {
    pub fn new(webview: WebView) -> Self {
        Self {
            webview: Some(webview),
        }
    }

    fn webview(&self) -> Result<&WebView, SurfaceError> {
        self.webview.as_ref().ok_or(SurfaceError::Destroyed)
    }
}

fn backend(err: wry::Error) -> SurfaceError {
    SurfaceError::Backend(err.to_string())
}

impl RenderSurface for WrySurface {
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError> {
        self.webview()?.load_url(url).map_err(backend)
    }

    fn go_back(&mut self) -> Result<(), SurfaceError> {
        self.webview()?
            .evaluate_script("history.back();")
            .map_err(backend)
    }

    fn evaluate_script(&mut self, script: &str) -> Result<(), SurfaceError> {
        self.webview()?.evaluate_script(script).map_err(backend)
    }

    fn pause(&mut self) -> Result<(), SurfaceError> {
        let webview = self.webview()?;
        webview.evaluate_script(PAUSE_MEDIA_SCRIPT).map_err(backend)?;
        webview.set_visible(false).map_err(backend)
    }

    fn resume(&mut self) -> Result<(), SurfaceError> {
        self.webview()?.set_visible(true).map_err(backend)
    }

    fn destroy(&mut self) {
        if self.webview.take().is_some() {
            shell_debug!("Webview released");
        }
    }
}

/// Builds the webview with every surface callback forwarded to the event
/// loop. The navigation handler answers from its own copy of the policy,
/// since the handler has to return before the loop sees the event.
pub fn build_webview(
    window: &Window,
    config: &ShellConfig,
    policy: NavigationPolicy,
    proxy: EventLoopProxy<UserEvent>,
) -> Result<WebView, SurfaceError> {
    let ipc_proxy = proxy.clone();
    let nav_proxy = proxy.clone();
    let new_window_proxy = proxy.clone();
    let load_proxy = proxy.clone();
    let title_proxy = proxy;

    // The site itself is loaded by the `Started` dispatch.
    let builder = webview_builder(window)?
        .with_initialization_script(BRIDGE_SCRIPT)
        .with_devtools(config.webview.devtools)
        .with_autoplay(config.webview.autoplay)
        .with_hotkeys_zoom(config.webview.zoom_hotkeys)
        .with_clipboard(config.webview.clipboard)
        .with_ipc_handler(move |req: Request<String>| match parse_message(req.body()) {
            Ok(message) => {
                let _ = ipc_proxy.send_event(UserEvent::Dispatch(message.into_msg()));
            }
            Err(err) => shell_warn!("Ignoring bridge message: {}", err),
        })
        .with_navigation_handler(move |url: String| {
            let decision = policy.decide(&url);
            let _ = nav_proxy.send_event(UserEvent::Dispatch(Msg::NavigationRequested { url }));
            decision == NavigationDecision::LoadInternally
        })
        .with_new_window_req_handler(move |url: String| {
            let _ = new_window_proxy.send_event(UserEvent::Dispatch(Msg::NewWindowRequested { url }));
            false
        })
        .with_on_page_load_handler(move |event, url| {
            let msg = match event {
                PageLoadEvent::Started => Msg::LoadStarted { url },
                PageLoadEvent::Finished => Msg::LoadFinished { url },
            };
            let _ = load_proxy.send_event(UserEvent::Dispatch(msg));
        })
        .with_document_title_changed_handler(move |title| {
            let _ = title_proxy.send_event(UserEvent::TitleChanged(title));
        });

    let builder = match config.webview.user_agent.as_deref() {
        Some(agent) => builder.with_user_agent(agent),
        None => builder,
    };

    builder.build().map_err(backend)
}

#[cfg(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "ios",
    target_os = "android"
))]
fn webview_builder(window: &Window) -> Result<WebViewBuilder<'_>, SurfaceError> {
    Ok(WebViewBuilder::new(window))
}

#[cfg(not(any(
    target_os = "windows",
    target_os = "macos",
    target_os = "ios",
    target_os = "android"
)))]
fn webview_builder(window: &Window) -> Result<WebViewBuilder<'_>, SurfaceError> {
    use tao::platform::unix::WindowExtUnix;
    use wry::WebViewBuilderExtUnix;
    let vbox = window
        .default_vbox()
        .ok_or_else(|| SurfaceError::Backend("linux gtk container not available".to_string()))?;
    Ok(WebViewBuilder::new_gtk(vbox))
}
