use crate::error::{FolioError, Result};
use folio_common::gemini::{DEFAULT_MODEL, GEMINI_API_BASE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIキーを読む環境変数（先頭ほど優先）
const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            api_base: GEMINI_API_BASE.into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        log::debug!("config loaded: {}", path.display());
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FolioError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("folio").join("config.json"))
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 環境変数を優先
        for name in API_KEY_ENV_VARS {
            if let Ok(key) = std::env::var(name) {
                if !key.trim().is_empty() {
                    return Ok(key);
                }
            }
        }

        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(FolioError::MissingApiKey)
    }
}
