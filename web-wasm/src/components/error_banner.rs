//! エラー表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">
            <span>"⚠️"</span>
            " "
            {message}
        </div>
    }
}
