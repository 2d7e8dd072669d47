//! 推論サービスのエンドポイント設定

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::error::{Error, Result};

/// 既定のエンドポイント（ローカル開発用の推論サーバ）
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/";

/// エンドポイントを上書きする環境変数名
pub const ENDPOINT_ENV_VAR: &str = "MRI_CLASSIFIER_ENDPOINT";

/// 検証済みのエンドポイントURL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Endpoint(String);

impl Endpoint {
    /// http/https のURLのみ受け付ける
    pub fn parse(url: &str) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(Error::InvalidEndpoint("empty URL".to_string()));
        }

        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .ok_or_else(|| Error::InvalidEndpoint(format!("{} (expected http:// or https://)", url)))?;

        if rest.is_empty() || rest.starts_with('/') {
            return Err(Error::InvalidEndpoint(format!("{} (missing host)", url)));
        }

        let parsed = Url::parse(url).map_err(|e| Error::InvalidEndpoint(format!("{} ({})", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidEndpoint(format!("{} (expected http:// or https://)", url)));
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(Error::InvalidEndpoint(format!("{} (missing host)", url)));
        }

        // 正規化済みの表記で保持
        Ok(Self(parsed.into()))
    }

    /// 値があれば解析、無ければ既定値
    pub fn from_optional(url: Option<&str>) -> Result<Self> {
        match url {
            Some(url) => Self::parse(url),
            None => Ok(Self::default()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self(DEFAULT_ENDPOINT.to_string())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Endpoint {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Endpoint> for String {
    fn from(endpoint: Endpoint) -> Self {
        endpoint.0
    }
}
