use serde::{Deserialize, Serialize};

use crate::core::TelemetrySnapshot;

/// JSONペイロードのバッファ容量（バイト）
///
/// 最悪ケース（`analog`/`gas` = 65535、温度 = f32最大値）でも
/// 100バイト未満に収まる。
pub const PAYLOAD_CAPACITY: usize = 128;

/// `/data` で返すJSONの形式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryPayload {
    pub digital: u8,
    pub analog: u16,
    pub percent: u8,
    /// 小数点以下2桁に丸めた温度（故障時は0.0）
    pub temperature: f64,
    pub gas: u16,
}

impl From<&TelemetrySnapshot> for TelemetryPayload {
    fn from(snapshot: &TelemetrySnapshot) -> Self {
        Self {
            digital: snapshot.digital().as_flag(),
            analog: snapshot.analog(),
            percent: snapshot.percent(),
            temperature: round_to_centi(snapshot.temperature_celsius()),
            gas: snapshot.gas(),
        }
    }
}

/// 小数点以下2桁に丸める
fn round_to_centi(celsius: f32) -> f64 {
    (f64::from(celsius) * 100.0).round() / 100.0
}

/// スナップショットをJSON文字列に変換する
pub fn render_json(snapshot: &TelemetrySnapshot) -> serde_json::Result<String> {
    let payload = TelemetryPayload::from(snapshot);
    let mut buffer = Vec::with_capacity(PAYLOAD_CAPACITY);
    serde_json::to_writer(&mut buffer, &payload)?;
    String::from_utf8(buffer).map_err(serde::ser::Error::custom)
}
