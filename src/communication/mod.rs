/// 通信モジュール
pub mod payload;
pub mod routes;
pub mod telemetry_service;

#[cfg(feature = "esp")]
pub mod http_server;
#[cfg(feature = "esp")]
pub mod network_manager;

pub use payload::{render_json, TelemetryPayload};
pub use routes::{ApiResponse, HttpMethod, Route};
pub use telemetry_service::TelemetryService;

#[cfg(feature = "esp")]
pub use http_server::start_http_server;
#[cfg(feature = "esp")]
pub use network_manager::NetworkManager;
