use shell_core::{Msg, PickerOutcome, RequestId};
use shell_host::PickerNotifier;
use tao::event_loop::EventLoopProxy;

/// Events injected into the tao loop from webview callbacks and helper threads.
#[derive(Debug)]
pub enum UserEvent {
    Dispatch(Msg),
    TitleChanged(String),
}

/// Sends picker results back onto the event loop.
#[derive(Clone)]
pub struct ProxyNotifier {
    proxy: EventLoopProxy<UserEvent>,
}

impl ProxyNotifier {
    pub fn new(proxy: EventLoopProxy<UserEvent>) -> Self {
        Self { proxy }
    }
}

impl PickerNotifier for ProxyNotifier {
    fn picker_finished(&self, request_id: RequestId, outcome: PickerOutcome) {
        // Fails only once the loop is gone, and the pending page with it.
        let _ = self.proxy.send_event(UserEvent::Dispatch(Msg::PickerFinished {
            request_id,
            outcome,
        }));
    }
}
