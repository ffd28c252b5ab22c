//! プレビュー画面の操作パネル（テーマ・PDF出力・やり直し）

use crate::components::theme_picker::ThemePicker;
use folio_common::Theme;
use leptos::prelude::*;

#[component]
pub fn PreviewControls<FT, FE, FR>(
    theme: Theme,
    on_theme: FT,
    on_export: FE,
    on_reset: FR,
) -> impl IntoView
where
    FT: Fn(Theme) + 'static + Clone,
    FE: Fn(()) + 'static + Clone,
    FR: Fn(()) + 'static + Clone,
{
    view! {
        <div class="preview-controls no-print">
            <p class="controls-title">"Controls ⚙️"</p>
            <p class="controls-label">"Pick Theme 🎨"</p>
            <ThemePicker theme=theme on_select=on_theme />

            <button class="btn btn-export" on:click=move |_| on_export(())>
                "Export PDF 📄"
            </button>

            <button class="btn btn-secondary" on:click=move |_| on_reset(())>
                "Restart 🔄"
            </button>
        </div>
    }
}
