use log::warn;

use crate::core::calibration::CalibrationBounds;
use crate::core::classification::{GasStatus, MoistureStatus, TemperatureStatus};
use crate::core::reading::{DigitalMoisture, RawReading};
use crate::core::temperature::TemperatureSample;

/// 温度プローブ故障時の警告メッセージ
pub const PROBE_FAULT_WARNING: &str = "温度の読み取りに失敗しました (0.0°Cとして報告)";

/// テレメトリスナップショット（ハードウェア非依存）
///
/// リクエストごとに生成され、生成後は変更されません。
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySnapshot {
    digital: DigitalMoisture,
    analog: u16,
    percent: u8,
    temperature: TemperatureSample,
    gas: u16,
    sensor_warnings: Vec<String>,
}

impl TelemetrySnapshot {
    /// 生データとキャリブレーション値からスナップショットを組み立てる
    pub fn build(raw: &RawReading, calibration: &CalibrationBounds) -> Self {
        let mut sensor_warnings = Vec::new();

        if raw.temperature.is_fault() {
            warn!("{}", PROBE_FAULT_WARNING);
            sensor_warnings.push(PROBE_FAULT_WARNING.to_string());
        }

        Self {
            digital: raw.digital_moisture,
            analog: raw.analog_moisture,
            percent: calibration.moisture_percent(raw.analog_moisture),
            temperature: raw.temperature,
            gas: raw.gas,
            sensor_warnings,
        }
    }

    pub fn digital(&self) -> DigitalMoisture {
        self.digital
    }

    pub fn analog(&self) -> u16 {
        self.analog
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn temperature(&self) -> TemperatureSample {
        self.temperature
    }

    /// クライアントへ報告する温度（故障時は0.0）
    pub fn temperature_celsius(&self) -> f32 {
        self.temperature.reported_celsius()
    }

    pub fn gas(&self) -> u16 {
        self.gas
    }

    pub fn sensor_warnings(&self) -> &[String] {
        &self.sensor_warnings
    }

    /// 測定データのサマリを取得
    pub fn summary(&self) -> String {
        let mut parts = vec![
            format!(
                "水分:{}% ({}, ADC:{}, {})",
                self.percent,
                MoistureStatus::from_percent(self.percent).label(),
                self.analog,
                match self.digital {
                    DigitalMoisture::Dry => "D:乾燥",
                    DigitalMoisture::Wet => "D:湿潤",
                }
            ),
        ];

        match self.temperature {
            TemperatureSample::Valid(celsius) => parts.push(format!(
                "温度:{:.2}°C ({})",
                celsius,
                TemperatureStatus::from_celsius(celsius).label()
            )),
            TemperatureSample::Fault => parts.push("温度:エラー".to_string()),
        }

        parts.push(format!(
            "ガス:{} ({})",
            self.gas,
            GasStatus::from_raw(self.gas).label()
        ));

        if !self.sensor_warnings.is_empty() {
            parts.push(format!("警告:{}件", self.sensor_warnings.len()));
        }

        parts.join(", ")
    }
}
