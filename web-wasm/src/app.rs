//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use mri_classifier_common::{Controller, Phase, READ_ERROR_MESSAGE};
use web_sys::File;
use crate::api;
use crate::components::{
    error_panel::ErrorPanel,
    header::Header,
    result_panels::ResultPanels,
    upload_form::UploadForm,
};
use crate::config;
use crate::preview::read_preview;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態（File はスレッド間で共有できないためローカル保持）
    let state = RwSignal::new_local(Controller::<File>::new());
    let endpoint = config::endpoint();

    // 表示用の派生状態
    let dark_mode = Signal::derive(move || state.with(|c| c.dark_mode()));
    let is_loading = Signal::derive(move || state.with(|c| c.is_loading()));
    let can_submit = Signal::derive(move || state.with(|c| c.can_submit()));
    let error = Signal::derive(move || state.with(|c| c.error().map(str::to_string)));
    let preview = Signal::derive(move || state.with(|c| c.image_preview().map(str::to_string)));
    let prediction = Signal::derive(move || {
        state.with(|c| match c.phase() {
            Phase::Succeeded(p) => Some(p.clone()),
            _ => None,
        })
    });

    // ファイル選択ハンドラ
    let on_file_selected = move |file: File| {
        let name = file.name();
        let Some(ticket) = state.try_update(|c| c.select_file(file.clone(), name)) else {
            return;
        };

        spawn_local(async move {
            match read_preview(&file).await {
                Ok(data_url) => state.update(|c| {
                    c.preview_loaded(ticket, data_url);
                }),
                Err(e) => {
                    gloo::console::warn!(format!("failed to read {}: {}", file.name(), e));
                    state.update(|c| {
                        c.preview_failed(ticket, READ_ERROR_MESSAGE);
                    });
                }
            }
        });
    };

    // 送信ハンドラ
    let on_submit = move |_| {
        let submission = match state.try_update(|c| c.submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(rejected)) => {
                gloo::console::debug!(format!("submission rejected: {}", rejected));
                return;
            }
            None => return,
        };

        let endpoint = endpoint.clone();
        spawn_local(async move {
            let outcome = api::predict(&endpoint, &submission.file).await;
            let applied = state.try_update(|c| c.resolve(submission.ticket, outcome));
            if applied != Some(true) {
                gloo::console::debug!("dropped response for a superseded request");
            }
        });
    };

    // テーマ切替ハンドラ
    let on_toggle_dark_mode = move |_| {
        state.update(|c| c.toggle_dark_mode());
    };

    view! {
        <div class=move || if dark_mode.get() { "app dark" } else { "app light" }>
            <div class="container">
                <Header dark_mode=dark_mode on_toggle_dark_mode=on_toggle_dark_mode />

                <UploadForm
                    can_submit=can_submit
                    is_loading=is_loading
                    on_file_selected=on_file_selected
                    on_submit=on_submit
                />

                <ErrorPanel message=error />

                <ResultPanels preview=preview prediction=prediction />
            </div>
        </div>
    }
}

