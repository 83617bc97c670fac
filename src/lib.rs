/*!
 * # Soil Monitor Library
 *
 * 土壌水分・地温・ガス濃度を測定し、WiFiアクセスポイント上の
 * HTTPサーバーで公開するためのライブラリ
 *
 * ## モジュール構成
 * - `core`: 測定値の変換と判定（キャリブレーション、温度、スナップショット）
 * - `hardware`: センサー入力（実機ドライバー、テスト用Mock）
 * - `communication`: 通信機能（JSONペイロード、ルーティング、HTTPサーバー、WiFi AP）
 * - `config`: `cfg.toml` からの設定読み込みと検証
 */

// 公開モジュール
pub mod communication;
pub mod config;
pub mod core;
pub mod hardware;

// 内部で使用する型をまとめてエクスポート
pub use crate::communication::{render_json, ApiResponse, HttpMethod, Route, TelemetryPayload, TelemetryService};
pub use crate::config::{AppConfig, ConfigError};
pub use crate::core::{
    CalibrationBounds, CalibrationError, RawReader, SensorError, SensorPort, TelemetrySnapshot,
    TemperatureSample,
};

/// ライブラリのバージョン情報
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
