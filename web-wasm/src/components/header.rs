//! ヘッダーコンポーネント（タイトル + テーマ切替）

use leptos::prelude::*;

#[component]
pub fn Header<F>(dark_mode: Signal<bool>, on_toggle_dark_mode: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <header class="header">
            <h1>"🧠 Brain Tumor Classifier"</h1>
            <button
                type="button"
                class="theme-toggle"
                title="Toggle dark mode"
                on:click=move |_| on_toggle_dark_mode(())
            >
                {move || if dark_mode.get() { "🌙" } else { "☀️" }}
            </button>
        </header>
    }
}
