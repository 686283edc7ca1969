/// 打ち上げ予定取得ハンドラー
///
/// 上流APIへGETを1回発行し、返却された打ち上げレコードをサマリーに変換して
/// `statusCode: 200`のエンベロープで返す。
///
/// 失敗は一切回復せず`Err`として呼び出し元（Lambdaランタイム）に伝播する。
use lambda_runtime::{Diagnostic, LambdaEvent};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::domain::{LaunchParseError, LaunchSummary, ResponseEnvelope, parse_launch_records};
use crate::infrastructure::{HttpClientError, HttpGetter, LaunchApiConfig};

/// エラーメッセージに含める上流レスポンス本文の最大文字数
const UPSTREAM_BODY_PREVIEW_CHARS: usize = 200;

/// ハンドラーのエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LaunchFeedError {
    /// 上流APIへの通信エラー
    #[error(transparent)]
    Http(#[from] HttpClientError),

    /// 上流APIが2xx以外を返した（本文は先頭のみ表示）
    #[error("Upstream returned HTTP {status}: {}", body_preview(.body))]
    UpstreamStatus { status: u16, body: String },

    /// 上流レスポンスのパースエラー
    #[error(transparent)]
    Parse(#[from] LaunchParseError),
}

impl LaunchFeedError {
    /// Lambdaエラーレスポンスの`errorType`
    pub fn error_type(&self) -> &'static str {
        match self {
            LaunchFeedError::Http(_) => "LaunchFeedError::Http",
            LaunchFeedError::UpstreamStatus { .. } => "LaunchFeedError::UpstreamStatus",
            LaunchFeedError::Parse(_) => "LaunchFeedError::Parse",
        }
    }
}

// Lambdaランタイムは`errorType`/`errorMessage`としてエラーを報告する
impl From<LaunchFeedError> for Diagnostic {
    fn from(err: LaunchFeedError) -> Self {
        Diagnostic {
            error_type: err.error_type().to_string(),
            error_message: err.to_string(),
        }
    }
}

fn body_preview(body: &str) -> String {
    if body.chars().count() <= UPSTREAM_BODY_PREVIEW_CHARS {
        return body.to_string();
    }
    let preview: String = body.chars().take(UPSTREAM_BODY_PREVIEW_CHARS).collect();
    format!("{}... ({} bytes)", preview, body.len())
}

/// 打ち上げ予定取得ハンドラー
pub struct UpcomingLaunchesHandler<HG>
where
    HG: HttpGetter,
{
    /// HTTPクライアント
    http_client: HG,
    /// 取得先設定
    config: LaunchApiConfig,
}

impl<HG> UpcomingLaunchesHandler<HG>
where
    HG: HttpGetter,
{
    /// 新しいハンドラーを作成
    pub fn new(http_client: HG, config: LaunchApiConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// 取得先設定を取得
    pub fn config(&self) -> &LaunchApiConfig {
        &self.config
    }

    /// Lambda呼び出しを処理
    ///
    /// イベント本文とコンテキストは処理に使用しない（request_idのみログに付与）。
    #[instrument(skip_all, fields(request_id = %event.context.request_id))]
    pub async fn invoke(
        &self,
        event: LambdaEvent<Value>,
    ) -> Result<ResponseEnvelope, LaunchFeedError> {
        info!("打ち上げ予定取得リクエスト受信");

        self.handle().await.inspect_err(|err| {
            error!(error = %err, url = self.config.url(), "打ち上げ予定の取得に失敗");
        })
    }

    /// 打ち上げ予定を取得してエンベロープを構築
    ///
    /// # 処理フロー
    /// 1. 設定URLへGETリクエスト
    /// 2. 2xx以外はエラー
    /// 3. 本文を打ち上げレコードのリストにパース
    /// 4. 順序を保ったままサマリーに変換
    pub async fn handle(&self) -> Result<ResponseEnvelope, LaunchFeedError> {
        let url = self.config.url();
        info!(url = url, "打ち上げ予定を取得");

        let response = self.http_client.get(url).await?;

        info!(status = response.status, "上流APIレスポンス受信");

        if !response.is_success() {
            return Err(LaunchFeedError::UpstreamStatus {
                status: response.status,
                body: response.body,
            });
        }

        let summaries: Vec<LaunchSummary> = parse_launch_records(&response.body)?
            .into_iter()
            .map(LaunchSummary::from)
            .collect();

        info!(launch_count = summaries.len(), "打ち上げ予定の取得に成功");

        Ok(ResponseEnvelope::ok(summaries))
    }
}
