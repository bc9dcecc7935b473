//! Page controller.
//!
//! Owns the [`UiState`] signal together with the browser resources the
//! state cannot hold: the selected `File`, its object URL and the poll
//! timer. Components call the `on_*` handlers; the controller runs the
//! [`Effect`]s the state hands back.

use leptos::*;
use web_sys::{File, Url};

use crate::config::POLL_INTERVAL_MS;
use crate::services::{
    fetch_progress, result_available, trigger_download, upload_media, PollTicket, ProgressPoller,
};
use crate::state::{Effect, UiState};
use crate::types::{AppError, SelectedFile};

#[derive(Clone, Copy)]
pub struct UpscaleController {
    pub state: RwSignal<UiState>,
    poller: StoredValue<ProgressPoller>,
    file: StoredValue<Option<File>>,
}

impl UpscaleController {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(UiState::default()),
            poller: store_value(ProgressPoller::default()),
            file: store_value(None),
        }
    }

    pub fn on_scale_input(&self, value: String) {
        self.state.update(|s| s.set_scale(value));
    }

    pub fn on_interpolation_input(&self, value: String) {
        self.state.update(|s| s.set_interpolation(value));
    }

    pub fn on_model_change(&self, model: String) {
        self.state.update(|s| s.set_model(model));
    }

    /// Form submitted with the first file of the picker, if any.
    pub fn on_submit(&self, file: Option<File>) {
        let selected = file.as_ref().map(SelectedFile::from_file);

        let Some(outcome) = self.state.try_update(|s| s.begin_submit(selected)) else {
            return;
        };

        let request = match outcome {
            Ok(request) => request,
            Err(AppError::Validation(message)) => {
                alert(&message);
                return;
            }
            Err(AppError::Busy) => {
                log::warn!("⏳ Upload already in flight, ignoring submit");
                return;
            }
            Err(e) => {
                self.state.update(|s| s.fail(&e));
                return;
            }
        };

        let Some(file) = file else {
            return;
        };

        self.stop_polling();
        self.file.set_value(Some(file.clone()));

        log::info!("📤 Uploading {} with {}", request.file.name, request.model);

        let controller = *self;
        spawn_local(async move {
            let response = upload_media(&file, &request).await;
            let effect = controller.state.try_update(|s| s.apply_upload_response(response));
            controller.run(effect.unwrap_or(Effect::None));
        });
    }

    /// Download button clicked.
    pub fn on_download(&self) {
        let Some(result) = self.state.with_untracked(|s| s.result.clone()) else {
            log::warn!("Download requested before any result");
            return;
        };

        if let Err(e) = trigger_download(result.result_url(), &result.download_name) {
            log::error!("❌ Download failed: {}", e);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::StartPolling(ticket) => self.start_polling(ticket),
            Effect::StopPolling => self.stop_polling(),
            Effect::CheckResult { ticket, result_url } => self.check_result(ticket, result_url),
            Effect::RenderResult { result_url } => self.render_result(result_url),
        }
    }

    fn start_polling(&self, ticket: PollTicket) {
        log::info!("⏳ Polling progress every {} ms (session {})", POLL_INTERVAL_MS, ticket);

        let controller = *self;
        self.poller
            .update_value(|p| p.start(POLL_INTERVAL_MS, move || controller.poll_once()));
    }

    fn stop_polling(&self) {
        self.poller.update_value(|p| {
            if p.stop() {
                log::info!("⏹️ Progress polling stopped");
            }
        });
    }

    /// One timer tick: request progress unless the session has ended.
    fn poll_once(&self) {
        let controller = *self;

        let Some(ticket) = self.state.try_update(|s| s.poll.tick()).flatten() else {
            // The interval must not be dropped from inside its own callback.
            spawn_local(async move { controller.stop_polling() });
            return;
        };

        spawn_local(async move {
            let response = fetch_progress().await;
            let effect = controller.state.try_update(|s| s.apply_progress(ticket, response));
            controller.run(effect.unwrap_or(Effect::None));
        });
    }

    fn check_result(&self, ticket: PollTicket, result_url: String) {
        let controller = *self;
        spawn_local(async move {
            let available = result_available(&result_url).await;
            let effect = controller
                .state
                .try_update(|s| s.apply_result_check(ticket, result_url, available));
            controller.run(effect.unwrap_or(Effect::None));
        });
    }

    fn render_result(&self, result_url: String) {
        self.stop_polling();

        let original_url = self
            .file
            .with_value(|f| f.as_ref().map(|file| Url::create_object_url_with_blob(file)));

        let original_url = match original_url {
            Some(Ok(url)) => url,
            Some(Err(e)) => {
                let error = AppError::from_js(&e);
                self.state.update(|s| s.fail(&error));
                return;
            }
            None => String::new(),
        };

        log::info!("✅ Result ready: {}", result_url);

        let replaced = self
            .state
            .try_update(|s| s.show_result(result_url, original_url))
            .flatten();

        if let Some(old) = replaced.filter(|url| !url.is_empty()) {
            if let Err(e) = Url::revoke_object_url(&old) {
                log::warn!("Could not revoke {}: {}", old, AppError::from_js(&e));
            }
        }
    }
}

impl Default for UpscaleController {
    fn default() -> Self {
        Self::new()
    }
}

fn alert(message: &str) {
    if let Err(e) = gloo_utils::window().alert_with_message(message) {
        log::error!("Alert failed: {}", AppError::from_js(&e));
    }
}
