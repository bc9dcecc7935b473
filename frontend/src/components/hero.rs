//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero text-center my-4">
            <h1>"AI Upscaler"</h1>
            <p class="lead text-muted">
                "Upscale images and videos with Real-ESRGAN and BSRGAN models. "
                "Video jobs run in the background and report their progress here."
            </p>
        </div>
    }
}
