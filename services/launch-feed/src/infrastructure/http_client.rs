/// 上流API向けHTTP GETクライアント
///
/// ハンドラーはHTTP通信を`HttpGetter`トレイト越しに行う。
/// 本番は`ReqwestHttpClient`、テストではフェイク実装に差し替える。
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error};

/// HTTPクライアントのエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HttpClientError {
    /// クライアントの構築に失敗
    #[error("HTTP client build error: {0}")]
    Build(String),

    /// 接続・送信の失敗
    #[error("Network error: {0}")]
    Network(String),

    /// レスポンス本文の読み込み失敗
    #[error("Response body error: {0}")]
    Body(String),
}

/// HTTPレスポンス（ステータスと本文のみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xxかどうか
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP GET用トレイト
#[async_trait]
pub trait HttpGetter: Send + Sync {
    /// 指定URLにGETリクエストを送信
    ///
    /// # 戻り値
    /// * ステータスに関わらずレスポンスを受信できれば`Ok(HttpResponse)`
    /// * 接続失敗・本文読み込み失敗は`Err(HttpClientError)`
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpClientError>;
}

/// reqwestによるHTTP GET実装
///
/// タイムアウト・再試行は設定しない。
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// 新しいクライアントを作成
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder().build().map_err(|e| {
            error!(error = %e, "HTTPクライアントの構築に失敗");
            HttpClientError::Build(e.to_string())
        })?;

        Ok(Self { client })
    }

    /// 事前設定されたクライアントで作成
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpGetter for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpClientError> {
        debug!(url = %url, "GETリクエスト送信");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(error = %e, url = %url, "GETリクエスト失敗");
            HttpClientError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();

        let body = response.text().await.map_err(|e| {
            error!(error = %e, status = status, "レスポンス本文の読み込みに失敗");
            HttpClientError::Body(e.to_string())
        })?;

        debug!(status = status, body_len = body.len(), "GETレスポンス受信");

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // 1回だけ固定レスポンスを返すローカルHTTPサーバーを起動し、ベースURLを返す
    async fn spawn_one_shot_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            // リクエストヘッダーの終端まで読み捨てる
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}", addr)
    }

    // ==================== HttpResponse テスト ====================

    #[test]
    fn test_is_success_for_2xx() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(HttpResponse::new(299, "").is_success());
    }

    #[test]
    fn test_is_success_false_for_non_2xx() {
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(404, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    // ==================== HttpClientError テスト ====================

    #[test]
    fn test_error_display_network() {
        let error = HttpClientError::Network("connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_error_display_body() {
        let error = HttpClientError::Body("unexpected eof".to_string());
        assert_eq!(error.to_string(), "Response body error: unexpected eof");
    }

    // ==================== ReqwestHttpClient テスト ====================

    #[tokio::test]
    async fn test_get_returns_status_and_body() {
        let base = spawn_one_shot_server("200 OK", r#"[{"name":"Starlink 1"}]"#).await;
        let client = ReqwestHttpClient::new().unwrap();

        let response = client
            .get(&format!("{}/v4/launches/upcoming?limit=5", base))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"[{"name":"Starlink 1"}]"#);
    }

    #[tokio::test]
    async fn test_get_returns_error_status_as_response() {
        // 非2xxはエラーにせずステータスとして返す
        let base = spawn_one_shot_server("500 Internal Server Error", "oops").await;
        let client = ReqwestHttpClient::new().unwrap();

        let response = client.get(&base).await.unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
        assert_eq!(response.body, "oops");
    }

    #[tokio::test]
    async fn test_get_connection_refused_is_network_error() {
        // バインドしてすぐ閉じたポートには接続できない
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ReqwestHttpClient::new().unwrap();
        let result = client.get(&format!("http://{}/", addr)).await;

        assert!(matches!(result, Err(HttpClientError::Network(_))));
    }
}
