//! 生成ボタンコンポーネント

use folio_common::view::generate_label;
use leptos::prelude::*;

#[component]
pub fn GenerateButton<F>(
    is_generating: bool,
    can_generate: bool,
    on_generate: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <button
            class=if can_generate { "btn btn-primary btn-generate" } else { "btn btn-generate disabled" }
            disabled=!can_generate
            on:click=move |_| on_generate(())
        >
            {is_generating.then(|| view! { <span class="spinner"></span> })}
            {generate_label(is_generating)}
        </button>
    }
}
