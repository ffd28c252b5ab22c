//! アップロードエリアコンポーネント
//!
//! 履歴書と写真のファイル選択。読み込みと受付判定は呼び出し側（App）が行う。

use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

/// input[type=file] から先頭ファイルを取り出す
///
/// 同じファイルを選び直せるように値はクリアする
fn first_file(ev: &leptos::ev::Event) -> Option<File> {
    let input: HtmlInputElement = event_target(ev);
    let file = input.files().and_then(|files| files.get(0));
    input.set_value("");
    file
}

#[component]
pub fn ResumeUpload<F>(
    resume_name: Option<String>,
    disabled: bool,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let has_file = resume_name.is_some();

    view! {
        <div class="form-section">
            <label class="section-label">"1. Your Resume 📄"</label>
            <div class=if has_file { "upload-area has-file" } else { "upload-area" }>
                <input
                    type="file"
                    accept=".pdf,.txt,.md"
                    disabled=disabled
                    on:change=move |ev| {
                        if let Some(file) = first_file(&ev) {
                            on_file(file);
                        }
                    }
                />
                {match resume_name {
                    Some(name) => view! {
                        <div class="upload-done">
                            <span class="file-name">{format!("{} ✅", name)}</span>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="upload-empty">
                            <p class="upload-title">"Drop your resume here 📥"</p>
                            <p class="text-muted">"Supports PDF or Text files"</p>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
pub fn PhotoUpload<F>(photo_url: Option<String>, on_file: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    view! {
        <div class="form-section">
            <label class="section-label">"2. Profile Photo 📸"</label>
            <div class="photo-row">
                <div class="photo-frame">
                    {match photo_url {
                        Some(url) => view! { <img src=url alt="Preview" /> }.into_any(),
                        None => view! { <span class="photo-placeholder">"👤"</span> }.into_any(),
                    }}
                </div>
                <input
                    type="file"
                    accept="image/*"
                    on:change=move |ev| {
                        if let Some(file) = first_file(&ev) {
                            on_file(file);
                        }
                    }
                />
            </div>
        </div>
    }
}
