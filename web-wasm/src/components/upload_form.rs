//! アップロードフォームコンポーネント

use leptos::prelude::*;
use web_sys::{Event, File, HtmlInputElement, SubmitEvent};
use crate::components::spinner::Spinner;

#[component]
pub fn UploadForm<FF, FS>(
    can_submit: Signal<bool>,
    is_loading: Signal<bool>,
    on_file_selected: FF,
    on_submit: FS,
) -> impl IntoView
where
    FF: Fn(File) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    let on_change = move |ev: Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file_selected(file);
        }
    };

    let on_form_submit = move |ev: SubmitEvent| {
        // ページ遷移を抑止
        ev.prevent_default();
        on_submit(());
    };

    view! {
        <form class="upload-form" on:submit=on_form_submit>
            <div class="upload-field">
                <label class="upload-hint">
                    "Upload an MRI scan to classify the type of brain tumor."
                </label>
                <label class="upload-button">
                    <span>"Upload Image"</span>
                    <input type="file" accept="image/*" class="hidden" on:change=on_change />
                </label>
            </div>

            <button
                type="submit"
                class="submit-button"
                disabled=move || !can_submit.get()
            >
                <Show when=move || is_loading.get()>
                    <Spinner />
                </Show>
                {move || if is_loading.get() { "Analyzing..." } else { "Predict Tumor Type" }}
            </button>
        </form>
    }
}
