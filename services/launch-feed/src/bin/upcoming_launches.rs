/// 打ち上げ予定取得Lambdaエントリポイント
///
/// SpaceX APIから直近の打ち上げ予定を取得し、
/// `{"statusCode": 200, "body": [...]}`形式で返却する。
/// 取得・パースに失敗した場合は呼び出しエラーとしてランタイムに報告する。
use launch_feed::application::UpcomingLaunchesHandler;
use launch_feed::domain::ResponseEnvelope;
use launch_feed::infrastructure::{LaunchApiConfig, ReqwestHttpClient, init_logging};
use lambda_runtime::{Diagnostic, Error, LambdaEvent, service_fn};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::info;

/// ハンドラーの静的インスタンス
///
/// warm start時にHTTPコネクションプールを再利用する。
static HANDLER: OnceCell<UpcomingLaunchesHandler<ReqwestHttpClient>> = OnceCell::const_new();

/// 環境変数からハンドラーを構築
fn build_handler() -> Result<UpcomingLaunchesHandler<ReqwestHttpClient>, Error> {
    let config = LaunchApiConfig::from_env()?;
    let http_client = ReqwestHttpClient::new()?;

    info!(url = config.url(), "打ち上げ予定取得ハンドラーを初期化");

    Ok(UpcomingLaunchesHandler::new(http_client, config))
}

async fn get_handler() -> Result<&'static UpcomingLaunchesHandler<ReqwestHttpClient>, Error> {
    HANDLER.get_or_try_init(|| async { build_handler() }).await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// 失敗時はランタイムが`{"errorType", "errorMessage"}`として呼び出し元に報告する。
async fn handler(event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Diagnostic> {
    let launches_handler = get_handler().await?;
    Ok(launches_handler.invoke(event).await?)
}
