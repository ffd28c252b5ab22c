//! テーマ選択コンポーネント

use folio_common::Theme;
use leptos::prelude::*;

#[component]
pub fn ThemePicker<F>(theme: Theme, on_select: F) -> impl IntoView
where
    F: Fn(Theme) + 'static + Clone,
{
    view! {
        <div class="theme-grid">
            {Theme::ALL
                .into_iter()
                .map(|t| {
                    let on_select = on_select.clone();
                    view! {
                        <button
                            class=if t == theme { "theme-btn active" } else { "theme-btn" }
                            on:click=move |_| on_select(t)
                        >
                            {t.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
