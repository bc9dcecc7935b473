//! Upscale form: file picker, sliders and model choice.

use leptos::*;

use crate::config::{accept_attribute, default_model, MODELS};
use crate::controller::UpscaleController;

#[component]
pub fn UploadForm(controller: UpscaleController) -> impl IntoView {
    let state = controller.state;
    let file_input = create_node_ref::<html::Input>();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        controller.on_submit(file);
    };

    view! {
        <form id="uploadForm" class="card card-body" on:submit=on_submit>
            <div class="mb-3">
                <label for="imageFile" class="form-label">"Image or video"</label>
                <input
                    type="file"
                    class="form-control"
                    id="imageFile"
                    accept=accept_attribute()
                    node_ref=file_input
                />
            </div>

            <div class="mb-3">
                <label for="aiModel" class="form-label">"AI model"</label>
                <select
                    id="aiModel"
                    class="form-select"
                    on:change=move |ev| controller.on_model_change(event_target_value(&ev))
                >
                    {MODELS
                        .iter()
                        .map(|model| view! {
                            <option value=model.id selected={model.id == default_model()}>
                                {model.label}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="mb-3">
                <label for="scaleRange" class="form-label">
                    "Scale: " <span id="scaleValue">{move || state.with(|s| s.scale.clone())}</span>
                </label>
                <input
                    type="range"
                    class="form-range"
                    id="scaleRange"
                    min="0"
                    max="100"
                    prop:value=move || state.with(|s| s.scale.clone())
                    on:input=move |ev| controller.on_scale_input(event_target_value(&ev))
                />
            </div>

            <div class="mb-3">
                <label for="interpolationRange" class="form-label">
                    "Interpolation: "
                    <span id="interpolationValue">{move || state.with(|s| s.interpolation.clone())}</span>
                </label>
                <input
                    type="range"
                    class="form-range"
                    id="interpolationRange"
                    min="0"
                    max="100"
                    prop:value=move || state.with(|s| s.interpolation.clone())
                    on:input=move |ev| controller.on_interpolation_input(event_target_value(&ev))
                />
            </div>

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || state.with(|s| s.uploading)
            >
                {move || if state.with(|s| s.uploading) { "⏳ Uploading..." } else { "Upscale" }}
            </button>
        </form>
    }
}
