/// 打ち上げレコードと打ち上げサマリー
///
/// SpaceX APIが返す打ち上げレコード（`name`, `date_utc`, `details`）を型付きで読み込み、
/// Lambdaレスポンス用のサマリー（`mission_name`, `launch_date_utc`, `details`）に変換する。
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// 打ち上げレコードのフィールド名: ミッション名
pub const FIELD_NAME: &str = "name";

/// 打ち上げレコードのフィールド名: 打ち上げ日時（UTC, ISO-8601）
pub const FIELD_DATE_UTC: &str = "date_utc";

/// 打ち上げレコードのフィールド名: 詳細（文字列またはnull）
pub const FIELD_DETAILS: &str = "details";

/// 打ち上げレコードのパースエラー
///
/// 最初に見つかった不正な要素でパースを打ち切る。
/// `index`は上流レスポンス配列内の0始まりの位置。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LaunchParseError {
    /// レスポンス本文がJSONではない
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    /// トップレベルがJSON配列ではない
    #[error("Launch list is not a JSON array")]
    NotAnArray,

    /// 配列要素がJSONオブジェクトではない
    #[error("Launch at index {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// 必須フィールドが存在しない
    #[error("Launch at index {index} is missing field '{field}'")]
    MissingField { index: usize, field: &'static str },

    /// フィールドの型が不正
    #[error("Launch at index {index} has invalid field '{field}': expected {expected}")]
    InvalidFieldType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
}

/// 打ち上げレコード（上流APIの1要素）
///
/// 上流の他のフィールドは読み捨てる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRecord {
    /// ミッション名
    pub name: String,
    /// 打ち上げ日時（上流の文字列をそのまま保持）
    pub date_utc: String,
    /// 詳細（欠落またはnullの場合はNone）
    pub details: Option<String>,
}

impl LaunchRecord {
    /// JSON値から打ち上げレコードを構築
    ///
    /// # Arguments
    /// * `index` - 配列内の位置（エラー報告用）
    /// * `value` - 配列要素のJSON値
    ///
    /// # Returns
    /// * `Ok(LaunchRecord)` - 必須フィールドがすべて揃っている
    /// * `Err(LaunchParseError)` - オブジェクトでない、必須フィールド欠落、型不正
    pub fn from_value(index: usize, value: &Value) -> Result<Self, LaunchParseError> {
        let object = value
            .as_object()
            .ok_or(LaunchParseError::NotAnObject { index })?;

        let required_string = |field: &'static str| -> Result<String, LaunchParseError> {
            match object.get(field) {
                None => Err(LaunchParseError::MissingField { index, field }),
                Some(Value::String(s)) => Ok(s.clone()),
                Some(_) => Err(LaunchParseError::InvalidFieldType {
                    index,
                    field,
                    expected: "string",
                }),
            }
        };

        let name = required_string(FIELD_NAME)?;
        let date_utc = required_string(FIELD_DATE_UTC)?;

        // detailsは欠落・nullともにNone
        let details = match object.get(FIELD_DETAILS) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                return Err(LaunchParseError::InvalidFieldType {
                    index,
                    field: FIELD_DETAILS,
                    expected: "string or null",
                });
            }
        };

        Ok(Self {
            name,
            date_utc,
            details,
        })
    }
}

/// 上流レスポンス本文を打ち上げレコードのリストにパース
///
/// 要素の順序は上流の順序をそのまま保つ。
pub fn parse_launch_records(body: &str) -> Result<Vec<LaunchRecord>, LaunchParseError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| LaunchParseError::MalformedJson(e.to_string()))?;

    let items = value.as_array().ok_or(LaunchParseError::NotAnArray)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| LaunchRecord::from_value(index, item))
        .collect()
}

/// 打ち上げサマリー（Lambdaレスポンスの1要素）
///
/// `details`はNoneでも省略せず`null`として出力する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchSummary {
    pub mission_name: String,
    pub launch_date_utc: String,
    pub details: Option<String>,
}

impl LaunchSummary {
    /// 打ち上げレコードからサマリーを作成（各フィールドはそのままコピー）
    pub fn from_record(record: LaunchRecord) -> Self {
        Self {
            mission_name: record.name,
            launch_date_utc: record.date_utc,
            details: record.details,
        }
    }
}

impl From<LaunchRecord> for LaunchSummary {
    fn from(record: LaunchRecord) -> Self {
        Self::from_record(record)
    }
}
