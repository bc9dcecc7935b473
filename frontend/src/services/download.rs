//! Browser download through a temporary anchor element.

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::types::{AppError, AppResult};

/// Download `url` as `filename` without navigating away from the page.
pub fn trigger_download(url: &str, filename: &str) -> AppResult<()> {
    let document = gloo_utils::document();
    let body = gloo_utils::body();

    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| AppError::from_js(&e))?
        .dyn_into()
        .map_err(|_| AppError::Dom("Created element is not an anchor".to_string()))?;

    link.set_href(url);
    link.set_download(filename);

    body.append_child(&link).map_err(|e| AppError::from_js(&e))?;
    link.click();
    body.remove_child(&link).map_err(|e| AppError::from_js(&e))?;

    log::info!("⬇️ Download started: {}", filename);
    Ok(())
}
