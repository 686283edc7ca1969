// アプリケーション層モジュール
pub mod upcoming_launches_handler;

// 再エクスポート
pub use upcoming_launches_handler::{LaunchFeedError, UpcomingLaunchesHandler};
