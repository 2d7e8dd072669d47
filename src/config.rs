use crate::error::{ClassifierError, Result};
use mri_classifier_common::{Endpoint, ENDPOINT_ENV_VAR};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: Endpoint,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 設定ファイルが無ければ既定値
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            validate_timeout(config.timeout_seconds)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 設定ファイルが壊れていても既定値で続行する（`config` サブコマンドでの修復用）
    pub fn load_lenient() -> Result<Self> {
        Ok(Self::load_lenient_from(&Self::config_path()?))
    }

    pub fn load_lenient_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
            Self::default()
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
            .ok_or_else(|| ClassifierError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("mri-classifier").join("config.json"))
    }

    /// 使用するエンドポイントを決定
    ///
    /// 優先順位: コマンドライン引数 > 環境変数 > 設定ファイル
    pub fn resolve_endpoint(&self, flag: Option<&str>) -> Result<Endpoint> {
        let env = std::env::var(ENDPOINT_ENV_VAR).ok();
        self.resolve_endpoint_with(flag, env.as_deref())
    }

    pub fn resolve_endpoint_with(&self, flag: Option<&str>, env: Option<&str>) -> Result<Endpoint> {
        if let Some(url) = flag {
            return Ok(Endpoint::parse(url)?);
        }
        if let Some(url) = env.filter(|s| !s.trim().is_empty()) {
            return Ok(Endpoint::parse(url)?);
        }
        Ok(self.endpoint.clone())
    }

    pub fn set_endpoint(&mut self, url: &str) -> Result<()> {
        self.endpoint = Endpoint::parse(url)?;
        Ok(())
    }

    pub fn set_timeout_seconds(&mut self, seconds: u64) -> Result<()> {
        validate_timeout(seconds)?;
        self.timeout_seconds = seconds;
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn validate_timeout(seconds: u64) -> Result<()> {
    if seconds == 0 {
        return Err(ClassifierError::Config("タイムアウトは1秒以上を指定してください".into()));
    }
    Ok(())
}
