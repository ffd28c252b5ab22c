//! メインアプリケーションコンポーネント

use gloo::file::ObjectUrl;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api::{FetchTransport, GeminiSettings};
use crate::components::{
    error_banner::ErrorBanner,
    generate_button::GenerateButton,
    header::Header,
    portfolio_preview::PortfolioPreview,
    preview_controls::PreviewControls,
    theme_picker::ThemePicker,
    upload_area::{PhotoUpload, ResumeUpload},
};
use crate::export::pdf_wasm::download_portfolio_pdf;
use folio_common::{
    generate_portfolio, intake, render, Error, ResumeFile, Screen, Session, Theme,
};

/// アプリケーションの状態（写真ハンドルは ObjectUrl、dropでrevoke）
pub type AppSession = Session<ObjectUrl>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new_local(AppSession::new());
    let settings = GeminiSettings::from_build_env();

    // 履歴書選択ハンドラ
    let on_resume = move |file: File| {
        let name = file.name();
        let mime_type = file.type_();

        // 非対応形式は読み込まずに拒否を記録
        if intake::validate(&name, &mime_type).is_err() {
            session.update(|s| {
                let _ = s.select_resume(ResumeFile::new(name, mime_type, Vec::new()));
            });
            return;
        }

        spawn_local(async move {
            let file = gloo::file::File::from(file);
            match gloo::file::futures::read_as_bytes(&file).await {
                Ok(bytes) => session.update(|s| {
                    // 読込中に生成が始まった場合は選択を捨てる
                    if let Err(e) = s.select_resume(ResumeFile::new(name, mime_type, bytes)) {
                        web_sys::console::warn_1(&format!("resume not selected: {}", e).into());
                    }
                }),
                Err(e) => {
                    let err = Error::FileRead(e.to_string());
                    web_sys::console::error_1(&err.to_string().into());
                    session.update(|s| s.fail_resume(&err));
                }
            }
        });
    };

    // 写真選択ハンドラ
    let on_photo = move |file: File| {
        let url = ObjectUrl::from(gloo::file::File::from(file));
        session.update(|s| s.select_photo(url));
    };

    let on_theme = move |theme: Theme| {
        session.update(|s| s.select_theme(theme));
    };

    // 生成ハンドラ（生成中・ファイル無しなら何もしない）
    let on_generate = move |_: ()| {
        let started = session
            .try_update(|s| s.begin_generation().map(|file| (s.attempt(), file)))
            .flatten();
        let Some((attempt, file)) = started else {
            return;
        };

        spawn_local(async move {
            let transport = FetchTransport::new(settings);
            let result = generate_portfolio(&transport, &file).await;
            if let Err(err) = &result {
                web_sys::console::error_1(&err.to_string().into());
            }
            session.update(|s| s.finish_attempt(attempt, result));
        });
    };

    // PDF出力ハンドラ
    let on_export = move |_: ()| {
        let Some(options) = session.with_untracked(|s| s.export_options()) else {
            return;
        };

        spawn_local(async move {
            if let Err(e) = download_portfolio_pdf(&options).await {
                web_sys::console::error_1(&e.into());
            }
        });
    };

    let on_reset = move |_: ()| {
        session.update(|s| s.reset());
    };

    view! {
        {move || session.with(|s| match render(s) {
            Screen::Preview(preview) => view! {
                <div class="preview-page">
                    <PreviewControls
                        theme=preview.theme
                        on_theme=on_theme
                        on_export=on_export
                        on_reset=on_reset
                    />
                    <PortfolioPreview
                        data=preview.data.clone()
                        theme=preview.theme
                        photo_url=preview.photo_url.map(str::to_string)
                    />
                </div>
            }
            .into_any(),
            Screen::Intake(intake_view) => view! {
                <div class="container">
                    <Header />

                    <div class="card">
                        <ResumeUpload
                            resume_name=intake_view.resume_name.map(str::to_string)
                            disabled=intake_view.is_generating
                            on_file=on_resume
                        />

                        <PhotoUpload
                            photo_url=intake_view.photo_url.map(str::to_string)
                            on_file=on_photo
                        />

                        <div class="form-section">
                            <label class="section-label">"3. Pick Your Style 🎨"</label>
                            <ThemePicker theme=intake_view.theme on_select=on_theme />
                        </div>

                        {intake_view.error.map(|message| view! { <ErrorBanner message=message.to_string() /> })}

                        <GenerateButton
                            is_generating=intake_view.is_generating
                            can_generate=intake_view.can_generate
                            on_generate=on_generate
                        />
                    </div>

                    <footer class="footer">
                        <p>"Powered by Google Gemini 💎"</p>
                    </footer>
                </div>
            }
            .into_any(),
        })}
    }
}
