//! ポートフォリオの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - PortfolioData: AIが履歴書から抽出した構造化データ
//! - Theme: ポートフォリオの表示テーマ

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 履歴書から抽出したポートフォリオデータ
///
/// 全フィールド必須。欠けている場合はパース失敗として扱い、
/// 部分的なデータは保持しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub name: String,
    pub title: String,
    pub tagline: String,          // 絵文字入りのキャッチコピー
    pub about: String,            // 絵文字入りの自己紹介
    pub skills: Vec<String>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

/// 職歴
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: Vec<String>,
}

/// 学歴
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

/// プロジェクト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// 連絡先
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub location: String,
    pub socials: Vec<SocialLink>,
}

/// SNSリンク
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// 表示テーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Modern,
    Creative,
    Minimal,
    DarkTech,
}

impl Theme {
    /// 表示順の全テーマ
    pub const ALL: [Theme; 4] = [Theme::Modern, Theme::Creative, Theme::Minimal, Theme::DarkTech];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Modern => "modern",
            Theme::Creative => "creative",
            Theme::Minimal => "minimal",
            Theme::DarkTech => "dark-tech",
        }
    }

    /// ボタン表示用ラベル（ハイフンを空白に）
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Modern => "modern",
            Theme::Creative => "creative",
            Theme::Minimal => "minimal",
            Theme::DarkTech => "dark tech",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown theme: {}", s))
    }
}
