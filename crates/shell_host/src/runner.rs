use shell_core::{Delivery, Effect, Msg, UploadResult};
use shell_logging::{shell_debug, shell_error, shell_info, shell_warn};

use crate::{
    delivery_script, dialog_filters, load_payload, ExternalLauncher, FilePicker, PickerRequest,
    RenderSurface, UploadPayload,
};

/// Executes core effects against the platform seams.
pub struct EffectRunner<S, L, P> {
    surface: S,
    launcher: L,
    picker: P,
    max_upload_bytes: u64,
}

impl<S: RenderSurface, L: ExternalLauncher, P: FilePicker> EffectRunner<S, L, P> {
    pub fn new(surface: S, launcher: L, picker: P, max_upload_bytes: u64) -> Self {
        Self {
            surface,
            launcher,
            picker,
            max_upload_bytes,
        }
    }

    /// Runs `effects` in order and returns follow-up messages that must be
    /// dispatched before any other host event.
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::LoadUrl { url } => {
                    shell_info!("LoadUrl url={}", url);
                    if let Err(err) = self.surface.load_url(&url) {
                        shell_error!("Failed to load {}: {}", url, err);
                    }
                }
                Effect::OpenExternally { url } => {
                    shell_info!("OpenExternally url={}", url);
                    // No installed handler is not surfaced to the user.
                    if let Err(err) = self.launcher.open(&url) {
                        shell_warn!("External open failed for {}: {}", url, err);
                    }
                }
                Effect::GoBack => {
                    if let Err(err) = self.surface.go_back() {
                        shell_error!("Back navigation failed: {}", err);
                    }
                }
                Effect::LaunchPicker { request_id, accept } => {
                    let request = PickerRequest {
                        request_id,
                        filters: dialog_filters(&accept),
                    };
                    match self.picker.launch(request) {
                        Ok(()) => shell_info!("Picker launched for {:?}", request_id),
                        Err(err) => {
                            shell_warn!("Chooser not handled, picker launch failed: {}", err);
                            follow_ups.push(Msg::PickerLaunchFailed { request_id });
                        }
                    }
                }
                Effect::DeliverUpload(delivery) => self.deliver(delivery),
                Effect::PauseSurface => {
                    if let Err(err) = self.surface.pause() {
                        shell_warn!("Pause failed: {}", err);
                    }
                }
                Effect::ResumeSurface => {
                    if let Err(err) = self.surface.resume() {
                        shell_warn!("Resume failed: {}", err);
                    }
                }
                Effect::Exit => {
                    shell_info!("Destroying render surface");
                    self.surface.destroy();
                }
            }
        }
        follow_ups
    }

    fn deliver(&mut self, delivery: Delivery) {
        let Delivery { callback, result } = delivery;
        let token = callback.token();
        let payloads = match result {
            UploadResult::Empty => None,
            UploadResult::Files(files) => self.load_payloads(&files),
        };
        shell_info!(
            "DeliverUpload token={} files={}",
            token,
            payloads.as_ref().map_or(0, Vec::len)
        );

        let script = match delivery_script(token, payloads.as_deref()) {
            Ok(script) => script,
            Err(err) => {
                shell_error!("Failed to encode upload for token {}: {}", token, err);
                return;
            }
        };
        if let Err(err) = self.surface.evaluate_script(&script) {
            shell_error!("Failed to deliver upload for token {}: {}", token, err);
        }
    }

    // A file that cannot be read turns the whole result empty, so the page
    // still gets its single answer.
    fn load_payloads(&self, files: &[shell_core::ResourceRef]) -> Option<Vec<UploadPayload>> {
        let mut payloads = Vec::with_capacity(files.len());
        for reference in files {
            match load_payload(reference, self.max_upload_bytes) {
                Ok(payload) => {
                    shell_debug!(
                        "Loaded upload {} ({}, {} base64 bytes)",
                        payload.name,
                        payload.mime,
                        payload.data.len()
                    );
                    payloads.push(payload);
                }
                Err(err) => {
                    shell_warn!("Cannot upload {}: {}", reference, err);
                    return None;
                }
            }
        }
        Some(payloads)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }
}
