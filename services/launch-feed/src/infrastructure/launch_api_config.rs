// 打ち上げAPI接続設定
//
// 取得先URLを管理する。通常は固定のSpaceX APIエンドポイントを使用し、
// LAUNCH_API_URL環境変数が設定されている場合のみ上書きする。

use thiserror::Error;
use url::Url;

/// 直近の打ち上げ予定5件を返すSpaceX APIエンドポイント
pub const DEFAULT_LAUNCH_API_URL: &str = "https://api.spacexdata.com/v4/launches/upcoming?limit=5";

/// 取得先URLを上書きする環境変数
pub const LAUNCH_API_URL_ENV: &str = "LAUNCH_API_URL";

/// 打ち上げAPI設定エラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LaunchApiConfigError {
    /// URLとして解釈できない、またはhttp/https以外
    #[error("無効な打ち上げAPI URL: {0}")]
    InvalidUrl(String),
}

/// 打ち上げAPI設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchApiConfig {
    url: String,
}

impl Default for LaunchApiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_LAUNCH_API_URL.to_string(),
        }
    }
}

impl LaunchApiConfig {
    /// 明示的なURLで作成
    ///
    /// # エラー
    /// - `InvalidUrl`: URLが無効、またはスキームがhttp/httpsでない
    pub fn new(url: impl Into<String>) -> Result<Self, LaunchApiConfigError> {
        let url = url.into();
        Self::validate_url(&url)?;
        Ok(Self { url })
    }

    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - `LAUNCH_API_URL`: 取得先URL（任意、未設定・空文字はデフォルト）
    pub fn from_env() -> Result<Self, LaunchApiConfigError> {
        match std::env::var(LAUNCH_API_URL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
        {
            Some(url) => Self::new(url.trim()),
            None => Ok(Self::default()),
        }
    }

    fn validate_url(url: &str) -> Result<(), LaunchApiConfigError> {
        let parsed =
            Url::parse(url).map_err(|e| LaunchApiConfigError::InvalidUrl(format!("{}: {}", url, e)))?;

        if parsed.scheme() != "https" && parsed.scheme() != "http" {
            return Err(LaunchApiConfigError::InvalidUrl(format!(
                "{}: スキームはhttpまたはhttpsである必要があります",
                url
            )));
        }

        Ok(())
    }

    /// 取得先URLを取得
    pub fn url(&self) -> &str {
        &self.url
    }
}
