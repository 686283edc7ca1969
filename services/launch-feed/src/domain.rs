// Domain layer modules
pub mod launch;
pub mod response_envelope;

// Re-exports
pub use launch::{LaunchParseError, LaunchRecord, LaunchSummary, parse_launch_records};
pub use response_envelope::{ResponseEnvelope, STATUS_OK};
