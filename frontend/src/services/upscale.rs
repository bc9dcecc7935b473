//! HTTP service for the upscaling server.
//!
//! Both endpoints answer with JSON even on 4xx/5xx, so bodies are parsed
//! regardless of status and the `error` field decides success.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{PROGRESS_ENDPOINT, UPSCALE_ENDPOINT};
use crate::types::{AppError, AppResult, ProgressResponse, UploadRequest, UpscaleResponse};

/// Upload a file with its upscale parameters.
pub async fn upload_media(file: &File, request: &UploadRequest) -> AppResult<UpscaleResponse> {
    let form_data = FormData::new().map_err(|e| AppError::from_js(&e))?;

    form_data
        .append_with_blob_and_filename("file", file, &request.file.name)
        .map_err(|e| AppError::from_js(&e))?;

    for (name, value) in request.form_fields() {
        form_data
            .append_with_str(name, &value)
            .map_err(|e| AppError::from_js(&e))?;
    }

    log::debug!(
        "📤 POST {} ({}, {} bytes, scale={}, interpolation={}, model={})",
        UPSCALE_ENDPOINT,
        request.file.name,
        request.file.size,
        request.scale,
        request.interpolation,
        request.model,
    );

    let response = Request::post(UPSCALE_ENDPOINT)
        .body(form_data)?
        .send()
        .await?;

    if !response.ok() {
        log::warn!("Upscale request answered {}", response.status());
    }

    Ok(response.json::<UpscaleResponse>().await?)
}

/// Fetch the progress of the running video job.
pub async fn fetch_progress() -> AppResult<ProgressResponse> {
    let response = Request::get(PROGRESS_ENDPOINT).send().await?;
    Ok(response.json::<ProgressResponse>().await?)
}

/// Whether a published result can be fetched yet.
pub async fn result_available(result_url: &str) -> AppResult<bool> {
    let response = Request::get(result_url).send().await?;
    Ok(response.ok())
}
