/// ログ基盤モジュール
///
/// CloudWatch向けにJSON形式の構造化ログを出力する。
use std::sync::Once;

use tracing::Subscriber;
use tracing_subscriber::fmt::format::{Format, Json, JsonFields};
use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// RUST_LOG未設定時のログレベル
const DEFAULT_LOG_LEVEL: &str = "info";

/// `RUST_LOG`からフィルターを作成（未設定・不正時は`default_level`）
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// 1行1オブジェクトのJSONログレイヤー
///
/// イベントのフィールドはトップレベルに展開し、
/// 呼び出しスパン（request_id等）は`spans`配列に出力する。
pub(crate) fn json_fmt_layer<S, W>(
    make_writer: W,
) -> tracing_subscriber::fmt::Layer<S, JsonFields, Format<Json>, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    tracing_subscriber::fmt::layer()
        .json()
        .with_writer(make_writer)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .flatten_event(true)
        .with_current_span(false)
}

/// ログサブスクライバーを初期化する
///
/// 複数回呼び出しても初期化は最初の1回のみ。
///
/// ```ignore
/// use launch_feed::infrastructure::init_logging;
///
/// init_logging();
/// tracing::info!("打ち上げ予定取得Lambdaを初期化");
/// ```
pub fn init_logging() {
    INIT.call_once(|| {
        // Lambdaランタイム側で既に初期化されていても失敗扱いにしない
        let _ = tracing_subscriber::registry()
            .with(env_filter(DEFAULT_LOG_LEVEL))
            .with(json_fmt_layer(std::io::stdout))
            .try_init();
    });
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter("debug"))
            .with(fmt_layer)
            .try_init();
    });
}
