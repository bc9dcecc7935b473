//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Request Types** - what a submission sends to `/upscale`
//! - **API Types** - server response structures
//! - **Media Types** - how originals and results are presented
//! - **Error Types** - frontend error handling

use serde::Deserialize;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use wasm_bindgen::JsValue;

use crate::config::{RESULTS_PATH, RESULT_PREFIX};

// =============================================================================
// Request Types
// =============================================================================

/// Description of the file picked in the form.
///
/// Holds no browser handle so state logic can be tested natively.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    /// File name as reported by the browser
    pub name: String,
    /// MIME type, may be empty
    pub mime: String,
    /// Size in bytes
    pub size: f64,
}

impl SelectedFile {
    /// Describe a browser `File`.
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime: file.type_(),
            size: file.size(),
        }
    }
}

/// Parameters of one upscale submission.
///
/// Built fresh for every submit and dropped once the request completes.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadRequest {
    /// The file being sent
    pub file: SelectedFile,
    /// Scale slider value divided by 100
    pub scale: f64,
    /// Interpolation slider value divided by 100
    pub interpolation: f64,
    /// Selected model identifier
    pub model: String,
}

impl UploadRequest {
    /// Build a request from the raw slider strings.
    pub fn from_form(
        file: SelectedFile,
        scale: &str,
        interpolation: &str,
        model: &str,
    ) -> AppResult<Self> {
        Ok(Self {
            file,
            scale: slider_fraction("scale", scale)?,
            interpolation: slider_fraction("interpolation", interpolation)?,
            model: model.to_string(),
        })
    }

    /// Text fields of the multipart body, in send order. The file part
    /// goes first and is appended by the upload service.
    pub fn form_fields(&self) -> [(&'static str, String); 3] {
        [
            ("scale", self.scale.to_string()),
            ("interpolation", self.interpolation.to_string()),
            ("model", self.model.clone()),
        ]
    }
}

fn slider_fraction(name: &str, raw: &str) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map(|v| v / 100.0)
        .map_err(|_| AppError::Validation(format!("Invalid {} value: {}", name, raw)))
}

// =============================================================================
// API Response Types
// =============================================================================

/// Body returned by `POST /upscale`.
///
/// The server uses one loose shape for every case, so all fields are optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpscaleResponse {
    /// Server-side failure message
    #[serde(default)]
    pub error: Option<String>,
    /// "video" for background jobs, "image" otherwise
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Location of a finished result
    #[serde(default)]
    pub result_url: Option<String>,
    /// Informational message sent with video jobs
    #[serde(default)]
    pub message: Option<String>,
}

/// What a successful upload leads to.
#[derive(Clone, Debug, PartialEq)]
pub enum UpscaleOutcome {
    /// A background video job started; progress must be polled.
    VideoStarted { message: Option<String> },
    /// The result is ready.
    Ready { result_url: String },
}

impl UpscaleResponse {
    /// Interpret the response. A non-empty `error` always wins.
    pub fn outcome(self) -> AppResult<UpscaleOutcome> {
        if let Some(error) = self.error.filter(|e| !e.is_empty()) {
            return Err(AppError::Server(error));
        }

        if self.kind.as_deref() == Some("video") {
            return Ok(UpscaleOutcome::VideoStarted { message: self.message });
        }

        self.result_url
            .map(|result_url| UpscaleOutcome::Ready { result_url })
            .ok_or_else(|| AppError::Parse("Response is missing result_url".to_string()))
    }
}

/// Body returned by `GET /progress`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProgressResponse {
    /// Percentage, absent until the job reports anything
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Meaning of a progress report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProgressUpdate {
    /// Nothing reported yet
    Unknown,
    /// Job running, percentage in [0, 100)
    Running(f64),
    /// Job reported 100%; the result file may still be being written
    Completed,
    /// Job failed server-side
    Failed,
}

impl ProgressResponse {
    /// Classify the report. The server signals failure with `-1` and
    /// caps progress at `100`.
    pub fn update(&self) -> AppResult<ProgressUpdate> {
        if let Some(error) = self.error.as_ref().filter(|e| !e.is_empty()) {
            return Err(AppError::Server(error.clone()));
        }

        Ok(match self.progress {
            None => ProgressUpdate::Unknown,
            Some(p) if p < 0.0 => ProgressUpdate::Failed,
            Some(p) if p >= 100.0 => ProgressUpdate::Completed,
            Some(p) => ProgressUpdate::Running(p),
        })
    }
}

// =============================================================================
// Media Types
// =============================================================================

/// How a piece of media is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Kind of an uploaded original, from its MIME type.
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("video/") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    /// Kind of a server result, from its URL.
    ///
    /// Only `.mp4` counts as video: this is a name check, unlike
    /// [`MediaKind::from_mime`].
    pub fn from_result_url(url: &str) -> Self {
        if url.ends_with(".mp4") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// A media element source.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaSource {
    pub kind: MediaKind,
    pub url: String,
}

/// Everything the result area shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    /// The uploaded file, served from an object URL
    pub original: MediaSource,
    /// The server result
    pub upscaled: MediaSource,
    /// Name offered by the download button
    pub download_name: String,
}

impl ResultView {
    pub fn new(original: &SelectedFile, original_url: String, result_url: String) -> Self {
        Self {
            original: MediaSource {
                kind: MediaKind::from_mime(&original.mime),
                url: original_url,
            },
            upscaled: MediaSource {
                kind: MediaKind::from_result_url(&result_url),
                url: result_url,
            },
            download_name: download_name(&original.name),
        }
    }

    pub fn result_url(&self) -> &str {
        &self.upscaled.url
    }
}

/// Name of the downloaded file: `upscaled_<original name>`.
pub fn download_name(original_name: &str) -> String {
    format!("{}{}", RESULT_PREFIX, original_name)
}

/// Where the server stores the result of a video job for this upload.
pub fn video_result_url(original_name: &str) -> String {
    format!("{}{}{}", RESULTS_PATH, RESULT_PREFIX, sanitize_filename(original_name))
}

/// Reduce a file name the way the server does before saving it.
///
/// Accented letters are decomposed to their ASCII base, path separators
/// and whitespace runs become `_`, anything outside `[A-Za-z0-9._-]` is
/// dropped, then leading/trailing `.` and `_` are trimmed.
pub fn sanitize_filename(name: &str) -> String {
    let spaced: String = name
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

/// CSS width of the progress bar (`42%`).
pub fn percent_width(progress: f64) -> String {
    format!("{}%", progress)
}

/// Status line while a video job runs, rounded half up.
pub fn processing_status(progress: f64) -> String {
    format!("Processing: {}%", (progress + 0.5).floor())
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Every variant displays its bare message so the status line can read
/// `Error: <message>`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Form input rejected before any request.
    #[error("{0}")]
    Validation(String),
    /// The server answered with an `error` field.
    #[error("{0}")]
    Server(String),
    /// Network/HTTP error.
    #[error("{0}")]
    Network(String),
    /// Response body could not be understood.
    #[error("{0}")]
    Parse(String),
    /// A DOM/JS call failed.
    #[error("{0}")]
    Dom(String),
    /// An upload is already in flight.
    #[error("An upload is already in progress")]
    Busy,
}

impl AppError {
    /// Wrap a thrown JS value, preferring its `message` property.
    pub fn from_js(value: &JsValue) -> Self {
        AppError::Dom(js_message(value))
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Parse(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

/// Message of a JS error value.
pub fn js_message(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn png() -> SelectedFile {
        SelectedFile {
            name: "cat photo.png".to_string(),
            mime: "image/png".to_string(),
            size: 2048.0,
        }
    }

    #[test]
    fn test_form_fields_divide_sliders_by_100() {
        let request = UploadRequest::from_form(png(), "50", "7", "BSRGANx2").unwrap();
        let fields = request.form_fields();

        assert_eq!(fields[0], ("scale", "0.5".to_string()));
        assert_eq!(fields[1], ("interpolation", "0.07".to_string()));
        assert_eq!(fields[2], ("model", "BSRGANx2".to_string()));
    }

    #[test]
    fn test_form_fields_whole_values() {
        let request = UploadRequest::from_form(png(), "100", "0", "RealESRGANx4").unwrap();
        let fields = request.form_fields();

        assert_eq!(fields[0].1, "1");
        assert_eq!(fields[1].1, "0");
    }

    #[test]
    fn test_invalid_slider_is_validation_error() {
        let err = UploadRequest::from_form(png(), "abc", "50", "x").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_error_field_wins() {
        let json = r#"{"error": "File type not allowed", "type": "image", "result_url": "/x.png"}"#;
        let response: UpscaleResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response.outcome(),
            Err(AppError::Server("File type not allowed".to_string()))
        );
    }

    #[test]
    fn test_empty_error_is_ignored() {
        let json = r#"{"error": "", "result_url": "/x.png"}"#;
        let response: UpscaleResponse = serde_json::from_str(json).unwrap();

        assert!(matches!(response.outcome(), Ok(UpscaleOutcome::Ready { .. })));
    }

    #[test]
    fn test_video_response() {
        let json = r#"{"type": "video", "message": "Video processing started"}"#;
        let response: UpscaleResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response.outcome().unwrap(),
            UpscaleOutcome::VideoStarted {
                message: Some("Video processing started".to_string())
            }
        );
    }

    #[test]
    fn test_result_without_type_is_image_style() {
        let response: UpscaleResponse = serde_json::from_str(r#"{"result_url": "x.png"}"#).unwrap();

        assert_eq!(
            response.outcome().unwrap(),
            UpscaleOutcome::Ready { result_url: "x.png".to_string() }
        );
    }

    #[test]
    fn test_missing_result_url_is_parse_error() {
        let response: UpscaleResponse = serde_json::from_str(r#"{"type": "image"}"#).unwrap();
        assert!(matches!(response.outcome(), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_progress_classification() {
        let parse = |json: &str| serde_json::from_str::<ProgressResponse>(json).unwrap().update();

        assert_eq!(parse(r#"{"progress": null}"#), Ok(ProgressUpdate::Unknown));
        assert_eq!(parse(r#"{}"#), Ok(ProgressUpdate::Unknown));
        assert_eq!(parse(r#"{"progress": 42}"#), Ok(ProgressUpdate::Running(42.0)));
        assert_eq!(parse(r#"{"progress": 100}"#), Ok(ProgressUpdate::Completed));
        assert_eq!(parse(r#"{"progress": -1}"#), Ok(ProgressUpdate::Failed));
        assert!(matches!(parse(r#"{"error": "boom"}"#), Err(AppError::Server(_))));
    }

    #[test]
    fn test_media_kind_detection_is_asymmetric() {
        assert_eq!(MediaKind::from_mime("video/mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime("image/png"), MediaKind::Image);
        assert_eq!(MediaKind::from_mime(""), MediaKind::Image);

        assert_eq!(MediaKind::from_result_url("/static/results/upscaled_a.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_result_url("/static/results/upscaled_a.webm"), MediaKind::Image);
        assert_eq!(MediaKind::from_result_url("/static/results/upscaled_a.MP4"), MediaKind::Image);
    }

    #[test]
    fn test_result_view() {
        let view = ResultView::new(&png(), "blob:orig".to_string(), "x.mp4".to_string());

        assert_eq!(view.original.kind, MediaKind::Image);
        assert_eq!(view.upscaled.kind, MediaKind::Video);
        assert_eq!(view.result_url(), "x.mp4");
        assert_eq!(view.download_name, "upscaled_cat photo.png");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("My cool movie.mp4"), "My_cool_movie.mp4");
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename("clip (1).mov"), "clip_1.mov");
        assert_eq!(sanitize_filename("_.hidden.avi"), "hidden.avi");
        assert_eq!(sanitize_filename("café.mp4"), "cafe.mp4");
        assert_eq!(sanitize_filename("naïve.png"), "naive.png");
        assert_eq!(sanitize_filename("ｆｕｌｌ ｗｉｄｔｈ.mp4"), "full_width.mp4");
        assert_eq!(sanitize_filename("日本.mp4"), "mp4");
    }

    #[test]
    fn test_video_result_url() {
        assert_eq!(video_result_url("my clip.mp4"), "/static/results/upscaled_my_clip.mp4");
        assert_eq!(video_result_url("café.mp4"), "/static/results/upscaled_cafe.mp4");
    }

    #[test]
    fn test_progress_text() {
        assert_eq!(percent_width(42.0), "42%");
        assert_eq!(percent_width(12.5), "12.5%");
        assert_eq!(processing_status(42.0), "Processing: 42%");
        assert_eq!(processing_status(12.5), "Processing: 13%");
        assert_eq!(processing_status(33.333333333333336), "Processing: 33%");
    }

    #[test]
    fn test_error_display_is_bare_message() {
        assert_eq!(AppError::Server("Model not loaded".into()).to_string(), "Model not loaded");
        assert_eq!(AppError::Network("Failed to fetch".into()).to_string(), "Failed to fetch");
    }
}
