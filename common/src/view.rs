//! 画面記述
//!
//! セッション状態から表示内容を決める純粋関数。描画はフロントエンド側が行う。

use std::ops::Deref;

use crate::session::Session;
use crate::types::{PortfolioData, Theme};

/// 表示する画面
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    Intake(IntakeView<'a>),
    Preview(PreviewView<'a>),
}

/// 入力画面（履歴書・写真・テーマ選択）
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeView<'a> {
    pub resume_name: Option<&'a str>,
    pub photo_url: Option<&'a str>,
    pub theme: Theme,
    pub error: Option<&'a str>,
    pub is_generating: bool,
    pub can_generate: bool,
}

/// プレビュー画面
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView<'a> {
    pub data: &'a PortfolioData,
    pub theme: Theme,
    pub photo_url: Option<&'a str>,
}

pub fn render<P: Deref<Target = str>>(session: &Session<P>) -> Screen<'_> {
    if let Some(data) = session.portfolio() {
        return Screen::Preview(PreviewView {
            data,
            theme: session.theme(),
            photo_url: session.photo_url(),
        });
    }

    let resume_name = session.resume_file().map(|f| f.name.as_str());
    Screen::Intake(IntakeView {
        resume_name,
        photo_url: session.photo_url(),
        theme: session.theme(),
        error: session.error(),
        is_generating: session.is_generating(),
        can_generate: resume_name.is_some() && !session.is_generating(),
    })
}

/// 生成ボタンのラベル
pub fn generate_label(is_generating: bool) -> &'static str {
    if is_generating {
        "AI is thinking... 🧠"
    } else {
        "Build My Portfolio 🚀"
    }
}
