//! Application configuration.
//!
//! Centralized configuration for the upscaler frontend. Endpoints are
//! relative to the page origin since the page is served by the upscaling
//! server itself.

/// Multipart upload endpoint.
pub const UPSCALE_ENDPOINT: &str = "/upscale";

/// Video job progress endpoint.
pub const PROGRESS_ENDPOINT: &str = "/progress";

/// Where the server publishes finished results.
pub const RESULTS_PATH: &str = "/static/results/";

/// Cadence of the progress poll, in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 1_000;

/// Initial value of the scale slider (0-100).
pub const DEFAULT_SCALE: &str = "100";

/// Initial value of the interpolation slider (0-100).
pub const DEFAULT_INTERPOLATION: &str = "50";

/// Prefix of the downloaded file name and of server-side result names.
pub const RESULT_PREFIX: &str = "upscaled_";

/// An upscaling model offered in the model picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModelOption {
    /// Identifier sent as the `model` form field
    pub id: &'static str,
    /// Human readable label
    pub label: &'static str,
}

/// Models known to the server. The first one is the default.
pub const MODELS: &[ModelOption] = &[
    ModelOption { id: "RealESRGANx4", label: "Real-ESRGAN x4" },
    ModelOption { id: "BSRGANx4", label: "BSRGAN x4" },
    ModelOption { id: "BSRGANx2", label: "BSRGAN x2" },
];

/// Extensions the server accepts, used for the file picker hint.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "heic",
    "mp4", "webm", "mkv", "flv", "m4v", "avi", "mov", "qt", "3gp", "mpg", "mpeg",
];

/// Default model id.
pub fn default_model() -> &'static str {
    MODELS[0].id
}

/// Value for the file input's `accept` attribute (`.png,.jpg,...`).
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_realesrgan() {
        assert_eq!(default_model(), "RealESRGANx4");
    }

    #[test]
    fn test_accept_attribute() {
        let accept = accept_attribute();
        assert!(accept.starts_with(".png,.jpg,"));
        assert!(accept.ends_with(".mpeg"));
        assert!(!accept.contains(",,"));
    }
}
