//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"InstantPortfolio " <span class="accent">"AI ✨"</span></h1>
            <p class="subtitle">"From PDF to Web presence in seconds. 🚀"</p>
        </header>
    }
}
