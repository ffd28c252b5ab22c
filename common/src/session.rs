//! アプリケーション状態（1セッション1インスタンス）
//!
//! 画面の状態はすべてここを経由して遷移する:
//! Idle → Ready → Generating → Preview、reset で Idle へ戻る

use std::ops::Deref;

use crate::error::{Error, Result};
use crate::export::PdfExportOptions;
use crate::gateway::{generate_portfolio, Transport};
use crate::intake::{self, ResumeFile};
use crate::types::{PortfolioData, Theme};

/// 画面フェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Ready,
    Generating,
    Preview,
}

/// セッション状態
///
/// `P` はプロフィール写真の表示用ハンドル。
/// 差し替え・リセット時に旧ハンドルをdropして解放する
/// （Web版では ObjectUrl のdropでURLがrevokeされる）。
#[derive(Debug)]
pub struct Session<P = String> {
    resume_file: Option<ResumeFile>,
    photo: Option<P>,
    theme: Theme,
    portfolio: Option<PortfolioData>,
    is_generating: bool,
    error: Option<String>,
    attempt: u64,
}

impl<P> Default for Session<P> {
    fn default() -> Self {
        Self {
            resume_file: None,
            photo: None,
            theme: Theme::default(),
            portfolio: None,
            is_generating: false,
            error: None,
            attempt: 0,
        }
    }
}

impl<P: Deref<Target = str>> Session<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.portfolio.is_some() {
            Phase::Preview
        } else if self.is_generating {
            Phase::Generating
        } else if self.resume_file.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn resume_file(&self) -> Option<&ResumeFile> {
        self.resume_file.as_ref()
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn portfolio(&self) -> Option<&PortfolioData> {
        self.portfolio.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 直近に開始した生成の番号（resetを跨いで単調増加）
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// 履歴書を選択
    ///
    /// 受付時はファイルを保持してエラーを消す（プレビュー中なら破棄してReadyへ）。
    /// 拒否時はファイルを空にしてエラーを設定する。テーマと写真は変更しない。
    pub fn select_resume(&mut self, file: ResumeFile) -> Result<()> {
        if self.is_generating {
            return Err(Error::GenerationInProgress);
        }

        if let Err(err) = intake::validate(&file.name, &file.mime_type) {
            self.resume_file = None;
            self.error = Some(err.user_message());
            return Err(err);
        }

        log::info!("resume selected: {} ({} bytes)", file.name, file.bytes.len());
        self.resume_file = Some(file);
        self.portfolio = None;
        self.error = None;
        Ok(())
    }

    /// 履歴書の読み込み失敗を記録
    ///
    /// 拒否と同じくファイルを空にしてエラーを表示する。生成中は何もしない。
    pub fn fail_resume(&mut self, err: &Error) {
        if self.is_generating {
            log::warn!("resume read failed during generation: {}", err);
            return;
        }
        log::warn!("resume read failed: {}", err);
        self.resume_file = None;
        self.error = Some(err.user_message());
    }

    /// プロフィール写真を差し替え（旧ハンドルはここで解放）
    pub fn select_photo(&mut self, photo: P) {
        self.photo = Some(photo);
    }

    pub fn select_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// 生成開始
    ///
    /// Ready 以外（ファイル無し・生成中・プレビュー中）では何もせず None。
    /// 開始できた場合は送信するファイルを返す。番号は `attempt()` で取れる。
    pub fn begin_generation(&mut self) -> Option<ResumeFile> {
        if self.phase() != Phase::Ready {
            return None;
        }

        let file = self.resume_file.clone()?;
        self.is_generating = true;
        self.error = None;
        self.attempt += 1;
        log::info!("generation #{} started: {}", self.attempt, file.name);
        Some(file)
    }

    /// 直近の生成結果を反映（生成中でなければ無視）
    pub fn finish_generation(&mut self, result: Result<PortfolioData>) {
        self.finish_attempt(self.attempt, result);
    }

    /// 番号付きで生成結果を反映
    ///
    /// reset後に始まった別の生成と取り違えないよう、番号が直近と違えば捨てる
    pub fn finish_attempt(&mut self, attempt: u64, result: Result<PortfolioData>) {
        if !self.is_generating || attempt != self.attempt {
            log::debug!("stale generation #{} ignored", attempt);
            return;
        }
        self.is_generating = false;

        match result {
            Ok(data) => {
                log::info!("generation finished: {}", data.name);
                self.portfolio = Some(data);
            }
            Err(err) => {
                log::warn!("generation failed: {}", err);
                self.error = Some(err.user_message());
            }
        }
    }

    /// 生成を1回実行して遷移後のフェーズを返す
    pub async fn generate<T: Transport>(&mut self, transport: &T) -> Phase {
        let Some(file) = self.begin_generation() else {
            return self.phase();
        };

        let result = generate_portfolio(transport, &file).await;
        self.finish_generation(result);
        self.phase()
    }

    /// 初期状態に戻す（写真ハンドルもここで解放、生成番号は引き継ぐ）
    pub fn reset(&mut self) {
        let attempt = self.attempt;
        *self = Self::default();
        self.attempt = attempt;
    }

    /// プレビュー中のみPDF出力設定を返す
    pub fn export_options(&self) -> Option<PdfExportOptions> {
        self.portfolio.as_ref().map(PdfExportOptions::for_portfolio)
    }
}
