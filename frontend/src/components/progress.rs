use leptos::*;

use crate::controller::UpscaleController;
use crate::state::Screen;

#[component]
pub fn ProgressPanel(controller: UpscaleController) -> impl IntoView {
    let state = controller.state;

    view! {
        <div
            id="progressArea"
            class="mt-4"
            class:d-none=move || state.with(|s| s.screen != Screen::Processing)
        >
            <div class="progress">
                <div
                    class="progress-bar progress-bar-striped"
                    class:progress-bar-animated=move || state.with(|s| s.progress_animated)
                    role="progressbar"
                    style:width=move || state.with(|s| s.progress_width())
                ></div>
            </div>
            <p id="statusText" class="mt-2 text-muted">
                {move || state.with(|s| s.status.clone())}
            </p>
        </div>
    }
}
