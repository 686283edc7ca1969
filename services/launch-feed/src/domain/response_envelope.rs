// Lambdaレスポンスエンベロープ
//
// `statusCode`と`body`からなる戻り値の形。
// ステータスコードは成功時の200のみを取る。

use super::launch::LaunchSummary;
use serde::Serialize;

/// 成功時のステータスコード
pub const STATUS_OK: u16 = 200;

/// レスポンスエンベロープ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseEnvelope {
    /// ステータスコード（常に200）
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// 打ち上げサマリー（上流の順序を保持）
    pub body: Vec<LaunchSummary>,
}

impl ResponseEnvelope {
    /// 200レスポンスを作成
    pub fn ok(body: Vec<LaunchSummary>) -> Self {
        Self {
            status_code: STATUS_OK,
            body,
        }
    }
}
