//! Page state and its event handlers.
//!
//! [`UiState`] is the single record the page renders from. Each handler
//! takes an event payload, mutates the record, and returns an [`Effect`]
//! when something outside the record has to happen (start the timer,
//! create an object URL). Nothing here touches the DOM, so every
//! transition can be exercised natively.

use crate::config::{default_model, DEFAULT_INTERPOLATION, DEFAULT_SCALE};
use crate::services::poller::{PollSchedule, PollTicket};
use crate::types::{
    percent_width, processing_status, video_result_url, AppError, AppResult, ProgressResponse,
    ProgressUpdate, ResultView, SelectedFile, UploadRequest, UpscaleOutcome, UpscaleResponse,
};

/// Status text shown while the upload is in flight.
pub const PROCESSING_TEXT: &str = "Processing file...";

/// Validation message for a submit without a file.
pub const NO_FILE_MESSAGE: &str = "Please select a file";

/// Failure reported by the server through a negative progress.
pub const VIDEO_FAILED_MESSAGE: &str = "Video processing failed";

/// Which panel is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Only the form
    #[default]
    Idle,
    /// Progress area shown, result area hidden
    Processing,
    /// Result area shown, progress area hidden
    Result,
}

/// Side effect requested by a handler.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    None,
    /// Start the poll timer for this session.
    StartPolling(PollTicket),
    /// Cancel the poll timer.
    StopPolling,
    /// Check whether the server has published the result yet.
    CheckResult { ticket: PollTicket, result_url: String },
    /// Show the result at this URL.
    RenderResult { result_url: String },
}

/// Everything the page shows.
#[derive(Clone, Debug)]
pub struct UiState {
    pub screen: Screen,
    /// Progress bar width, in percent
    pub progress: f64,
    pub progress_animated: bool,
    pub status: String,
    /// Raw scale slider value (0-100)
    pub scale: String,
    /// Raw interpolation slider value (0-100)
    pub interpolation: String,
    pub model: String,
    /// An upload request is in flight
    pub uploading: bool,
    pub poll: PollSchedule,
    /// A result availability check is in flight
    pub checking_result: bool,
    /// The file of the current submission, until its result is shown
    pub pending: Option<SelectedFile>,
    /// Last shown result
    pub result: Option<ResultView>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            screen: Screen::Idle,
            progress: 0.0,
            progress_animated: true,
            status: String::new(),
            scale: DEFAULT_SCALE.to_string(),
            interpolation: DEFAULT_INTERPOLATION.to_string(),
            model: default_model().to_string(),
            uploading: false,
            poll: PollSchedule::default(),
            checking_result: false,
            pending: None,
            result: None,
        }
    }
}

impl UiState {
    /// Scale slider moved.
    pub fn set_scale(&mut self, value: String) {
        self.scale = value;
    }

    /// Interpolation slider moved.
    pub fn set_interpolation(&mut self, value: String) {
        self.interpolation = value;
    }

    pub fn set_model(&mut self, model: String) {
        self.model = model;
    }

    /// CSS width of the progress bar.
    pub fn progress_width(&self) -> String {
        percent_width(self.progress)
    }

    /// Form submitted.
    ///
    /// Rejected submissions leave the state untouched. An accepted one
    /// switches to the processing view and ends any running poll session.
    pub fn begin_submit(&mut self, file: Option<SelectedFile>) -> AppResult<UploadRequest> {
        if self.uploading {
            return Err(AppError::Busy);
        }

        let file = file.ok_or_else(|| AppError::Validation(NO_FILE_MESSAGE.to_string()))?;
        let request = UploadRequest::from_form(file, &self.scale, &self.interpolation, &self.model)?;

        self.poll.stop();
        self.checking_result = false;
        self.uploading = true;
        self.screen = Screen::Processing;
        self.progress = 0.0;
        self.progress_animated = true;
        self.status = PROCESSING_TEXT.to_string();
        self.pending = Some(request.file.clone());

        Ok(request)
    }

    /// Upload request finished, successfully or not.
    pub fn apply_upload_response(&mut self, response: AppResult<UpscaleResponse>) -> Effect {
        self.uploading = false;

        match response.and_then(UpscaleResponse::outcome) {
            Ok(UpscaleOutcome::VideoStarted { message }) => {
                if let Some(message) = message {
                    log::info!("🎞️ {}", message);
                }
                Effect::StartPolling(self.poll.start())
            }
            Ok(UpscaleOutcome::Ready { result_url }) => Effect::RenderResult { result_url },
            Err(e) => {
                self.fail(&e);
                Effect::None
            }
        }
    }

    /// Render a failure in the status line and empty the progress bar.
    pub fn fail(&mut self, error: &AppError) {
        log::error!("❌ {}", error);
        self.status = format!("Error: {}", error);
        self.progress = 0.0;
        self.progress_animated = false;
    }

    /// A `/progress` request made with `ticket` completed.
    ///
    /// Fetch errors are logged and leave the loop running.
    pub fn apply_progress(
        &mut self,
        ticket: PollTicket,
        response: AppResult<ProgressResponse>,
    ) -> Effect {
        if !self.poll.accepts(ticket) {
            log::debug!("Dropping progress for stale poll {}", ticket);
            return Effect::None;
        }

        match response.and_then(|r| r.update()) {
            Err(e) => {
                log::error!("Error polling progress: {}", e);
                Effect::None
            }
            Ok(ProgressUpdate::Unknown) => Effect::None,
            Ok(ProgressUpdate::Running(progress)) => {
                self.progress = progress;
                self.status = processing_status(progress);
                Effect::None
            }
            Ok(ProgressUpdate::Completed) => {
                self.progress = 100.0;
                self.status = processing_status(100.0);
                // The server reaches 100 well before the file is written,
                // so completion is only a cue to look for the result.
                match &self.pending {
                    Some(file) if !self.checking_result => {
                        self.checking_result = true;
                        Effect::CheckResult {
                            ticket,
                            result_url: video_result_url(&file.name),
                        }
                    }
                    _ => Effect::None,
                }
            }
            Ok(ProgressUpdate::Failed) => {
                self.poll.stop();
                self.fail(&AppError::Server(VIDEO_FAILED_MESSAGE.to_string()));
                Effect::StopPolling
            }
        }
    }

    /// A result availability check made during session `ticket` finished.
    ///
    /// A missing result keeps the poll running; the next completed report
    /// checks again.
    pub fn apply_result_check(
        &mut self,
        ticket: PollTicket,
        result_url: String,
        available: AppResult<bool>,
    ) -> Effect {
        if !self.poll.accepts(ticket) {
            return Effect::None;
        }
        self.checking_result = false;

        match available {
            Ok(true) => Effect::RenderResult { result_url },
            Ok(false) => {
                log::debug!("Result {} not published yet", result_url);
                Effect::None
            }
            Err(e) => {
                log::error!("Error checking result: {}", e);
                Effect::None
            }
        }
    }

    /// Switch to the result view.
    ///
    /// Returns the object URL of the previously shown original, which the
    /// caller should revoke.
    pub fn show_result(&mut self, result_url: String, original_url: String) -> Option<String> {
        self.poll.stop();
        self.checking_result = false;

        let Some(file) = self.pending.take() else {
            log::warn!("Result {} arrived without a pending upload", result_url);
            return None;
        };

        self.screen = Screen::Result;
        self.progress_animated = false;

        let view = ResultView::new(&file, original_url, result_url);
        self.result.replace(view).map(|old| old.original.url)
    }
}
