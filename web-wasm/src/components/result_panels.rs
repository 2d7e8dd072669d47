//! 結果エリア（画像プレビュー / 予測カード）
//!
//! プレビューか予測のどちらかがあれば表示し、各パネルは独立して出し分ける。

use leptos::prelude::*;
use mri_classifier_common::Prediction;

#[component]
pub fn ResultPanels(
    preview: Signal<Option<String>>,
    prediction: Signal<Option<Prediction>>,
) -> impl IntoView {
    let has_preview = move || preview.with(|p| p.is_some());
    let has_prediction = move || prediction.with(|p| p.is_some());

    view! {
        <Show when=move || has_preview() || has_prediction()>
            <div class="result-grid">
                <Show when=has_preview>
                    <ImagePreview data_url=preview />
                </Show>
                <Show when=has_prediction>
                    <PredictionCard prediction=prediction />
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn ImagePreview(data_url: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class="preview-panel">
            <img src=move || data_url.get().unwrap_or_default() alt="Uploaded MRI" />
        </div>
    }
}

#[component]
fn PredictionCard(prediction: Signal<Option<Prediction>>) -> impl IntoView {
    let label = move || prediction.with(|p| p.as_ref().map(|p| p.label.clone()).unwrap_or_default());
    let description = move || {
        prediction.with(|p| p.as_ref().map(|p| p.description.clone()).unwrap_or_default())
    };

    view! {
        <div class="prediction-card">
            <h2>"Prediction Result"</h2>
            <p class="prediction-label">{label}</p>
            <p class="prediction-description">{description}</p>
        </div>
    }
}
