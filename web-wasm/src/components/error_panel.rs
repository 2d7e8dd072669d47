//! エラー表示パネル

use leptos::prelude::*;

#[component]
pub fn ErrorPanel(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(|m| m.is_some())>
            <div class="error-panel" role="alert">
                "⚠️ " {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
