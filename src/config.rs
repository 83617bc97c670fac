use crate::core::calibration::{CalibrationBounds, CalibrationError};

/// SSIDの最大長（バイト）
const MAX_SSID_LEN: usize = 32;
/// WPA2パスワードの長さ制約（バイト）
const MIN_PASSWORD_LEN: usize = 8;
const MAX_PASSWORD_LEN: usize = 64;
/// 2.4GHz帯で使用可能なチャンネル
const MAX_WIFI_CHANNEL: u8 = 13;

/// アプリケーション設定
///
/// この構造体はビルド時に`cfg.toml`ファイルの`[soil-monitor]`セクションから
/// 読み込まれた設定を保持します。
#[toml_cfg::toml_config]
pub struct Config {
    #[default("Solo Seguro")]
    wifi_ap_ssid: &'static str,

    #[default("soloseguro123")]
    wifi_ap_password: &'static str,

    #[default(1)]
    wifi_ap_channel: u8,

    // 土壌水分センサーのキャリブレーション値（ADC生値）
    #[default(3200)] // 乾燥した空気中
    moisture_air_value: u16,

    #[default(1400)] // 水に浸した状態
    moisture_water_value: u16,

    #[default(80)]
    http_port: u16,

    #[default(10240)]
    http_stack_size: usize,

    #[default(10)]
    idle_delay_ms: u32,
}

/// 設定エラー
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("キャリブレーション値が無効です: {0}")]
    InvalidCalibration(#[from] CalibrationError),
    #[error("SSIDの長さが無効です (1-32バイト): {0:?}")]
    InvalidSsid(String),
    #[error("パスワードの長さが無効です (空または8-64バイト): {0}バイト")]
    InvalidPassword(usize),
    #[error("WiFiチャンネルが無効です (1-13): {0}")]
    InvalidChannel(u8),
    #[error("HTTPポートが無効です: {0}")]
    InvalidHttpPort(u16),
    #[error("待機時間が無効です: {0}ms")]
    InvalidIdleDelay(u32),
}

/// アプリケーション設定を表す構造体
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// アクセスポイントのSSID
    pub wifi_ap_ssid: String,

    /// アクセスポイントのパスワード（空の場合はオープン）
    pub wifi_ap_password: String,

    /// アクセスポイントのチャンネル
    pub wifi_ap_channel: u8,

    /// 土壌水分のキャリブレーション範囲
    pub calibration: CalibrationBounds,

    /// HTTPサーバーのポート
    pub http_port: u16,

    /// HTTPサーバータスクのスタックサイズ（バイト）
    pub http_stack_size: usize,

    /// メインループの待機時間（ミリ秒）
    pub idle_delay_ms: u32,
}

impl AppConfig {
    /// 設定ファイルから設定をロードします
    pub fn load() -> Result<Self, ConfigError> {
        // toml_cfg によって生成された定数
        Self::from_config(&CONFIG)
    }

    /// toml_cfgの設定値を検証して`AppConfig`に変換します
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let calibration =
            CalibrationBounds::new(config.moisture_air_value, config.moisture_water_value)?;

        validate_ssid(config.wifi_ap_ssid)?;
        validate_password(config.wifi_ap_password)?;

        if config.wifi_ap_channel == 0 || config.wifi_ap_channel > MAX_WIFI_CHANNEL {
            return Err(ConfigError::InvalidChannel(config.wifi_ap_channel));
        }
        if config.http_port == 0 {
            return Err(ConfigError::InvalidHttpPort(config.http_port));
        }
        if config.idle_delay_ms == 0 {
            return Err(ConfigError::InvalidIdleDelay(config.idle_delay_ms));
        }

        Ok(AppConfig {
            wifi_ap_ssid: config.wifi_ap_ssid.to_string(),
            wifi_ap_password: config.wifi_ap_password.to_string(),
            wifi_ap_channel: config.wifi_ap_channel,
            calibration,
            http_port: config.http_port,
            http_stack_size: config.http_stack_size,
            idle_delay_ms: config.idle_delay_ms,
        })
    }

    /// パスワード未設定の場合はオープンなアクセスポイントになる
    pub fn is_open_access_point(&self) -> bool {
        self.wifi_ap_password.is_empty()
    }
}

pub fn validate_ssid(ssid: &str) -> Result<(), ConfigError> {
    if ssid.is_empty() || ssid.len() > MAX_SSID_LEN {
        Err(ConfigError::InvalidSsid(ssid.to_string()))
    } else {
        Ok(())
    }
}

pub fn validate_password(password: &str) -> Result<(), ConfigError> {
    let len = password.len();
    if len == 0 || (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        Ok(())
    } else {
        Err(ConfigError::InvalidPassword(len))
    }
}
