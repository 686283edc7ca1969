// Infrastructure layer modules
pub mod http_client;
pub mod launch_api_config;
pub mod logging;

// Re-exports
pub use http_client::{HttpClientError, HttpGetter, HttpResponse, ReqwestHttpClient};
pub use launch_api_config::{
    DEFAULT_LAUNCH_API_URL, LAUNCH_API_URL_ENV, LaunchApiConfig, LaunchApiConfigError,
};
pub use logging::init_logging;
