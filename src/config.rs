use crate::error::{ReviewerError, Result};
use resume_reviewer_common::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIベースURLを上書きする環境変数
pub const API_URL_ENV: &str = "RESUME_REVIEWER_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: Option<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込む（ファイルが無ければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    /// 読み込めなければ警告してデフォルトを返す
    ///
    /// `config` コマンドが壊れた設定ファイルを上書きできるようにする
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::load_or_default_from(&Self::config_path()?))
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            eprintln!("⚠ Could not load {} ({}); using defaults", path.display(), e);
            Self::default_config()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReviewerError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("resume-reviewer").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            api_url: None,
            log_level: "info".into(),
        }
    }

    /// 使用するAPIベースURLを決定
    ///
    /// 優先順位: 引数 > 環境変数 > 設定ファイル > デフォルト
    pub fn api_url(&self, flag: Option<&str>) -> Result<String> {
        self.resolve_api_url(flag, std::env::var(API_URL_ENV).ok())
    }

    pub fn resolve_api_url(&self, flag: Option<&str>, env_value: Option<String>) -> Result<String> {
        let candidate = flag
            .map(str::to_string)
            .or_else(|| env_value.filter(|v| !v.trim().is_empty()))
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        validate_api_url(&candidate)
    }

    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        self.api_url = Some(validate_api_url(url)?);
        Ok(())
    }

    pub fn reset_api_url(&mut self) {
        self.api_url = None;
    }
}

/// http(s) のURLかを確認し、前後の空白と末尾の `/` を除いて返す
pub fn validate_api_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(ReviewerError::Config(format!(
            "API URL must start with http:// or https://: {}",
            url
        )))
    }
}
