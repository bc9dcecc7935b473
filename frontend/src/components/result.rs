//! Side-by-side view of the original and the upscaled media.

use leptos::*;

use crate::controller::UpscaleController;
use crate::state::Screen;
use crate::types::{MediaKind, MediaSource};

#[component]
pub fn ResultPanel(controller: UpscaleController) -> impl IntoView {
    let state = controller.state;

    let original = Signal::derive(move || state.with(|s| s.result.as_ref().map(|r| r.original.clone())));
    let upscaled = Signal::derive(move || state.with(|s| s.result.as_ref().map(|r| r.upscaled.clone())));

    view! {
        <div
            id="resultArea"
            class="mt-4"
            class:d-none=move || state.with(|s| s.screen != Screen::Result)
        >
            <div class="row">
                <div class="col-md-6" id="originalContainer">
                    <h5>"Original"</h5>
                    <MediaPair source=original image_id="originalImage" video_id="originalVideo"/>
                </div>
                <div class="col-md-6" id="upscaledContainer">
                    <h5>"Upscaled"</h5>
                    <MediaPair source=upscaled image_id="upscaledImage" video_id="upscaledVideo"/>
                </div>
            </div>
            <button
                id="downloadBtn"
                class="btn btn-success mt-3"
                disabled=move || state.with(|s| s.result.is_none())
                title=move || state.with(|s| s.result.as_ref().map(|r| r.download_name.clone()))
                on:click=move |_| controller.on_download()
            >
                "⬇️ Download"
            </button>
        </div>
    }
}

/// An image and a video element of which only the one matching the
/// source kind is visible and carries the URL.
#[component]
fn MediaPair(
    source: Signal<Option<MediaSource>>,
    image_id: &'static str,
    video_id: &'static str,
) -> impl IntoView {
    let kind = move || source.with(|s| s.as_ref().map(|m| m.kind));
    let url_for = move |wanted: MediaKind| {
        source.with(|s| s.as_ref().filter(|m| m.kind == wanted).map(|m| m.url.clone()))
    };

    view! {
        <img
            id=image_id
            class="img-fluid"
            class:d-none=move || kind() != Some(MediaKind::Image)
            alt=""
            src=move || url_for(MediaKind::Image)
        />
        <video
            id=video_id
            class="w-100"
            controls=true
            class:d-none=move || kind() != Some(MediaKind::Video)
            src=move || url_for(MediaKind::Video)
        ></video>
    }
}
