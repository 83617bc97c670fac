/// DS18B20系プローブが読み取り失敗時に返す値（℃）
pub const PROBE_FAULT_SENTINEL_C: f32 = -127.0;

/// 故障時にクライアントへ報告する温度（℃）
pub const FAULT_REPORTED_CELSIUS: f32 = 0.0;

/// 温度プローブの測定結果
///
/// 内部では「正常値」と「故障」を区別し、数値への置き換えは
/// シリアライズ時の `reported_celsius()` でのみ行います。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemperatureSample {
    /// 正常な測定値（℃）
    Valid(f32),
    /// プローブ未接続・通信エラー・故障値
    Fault,
}

impl TemperatureSample {
    /// プローブが返した値を判定する
    ///
    /// 故障値（-127.0）と非有限値は `Fault` として扱います。
    pub fn from_probe_celsius(celsius: f32) -> Self {
        if !celsius.is_finite() || celsius == PROBE_FAULT_SENTINEL_C {
            TemperatureSample::Fault
        } else {
            TemperatureSample::Valid(celsius)
        }
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, TemperatureSample::Fault)
    }

    pub fn celsius(&self) -> Option<f32> {
        match self {
            TemperatureSample::Valid(celsius) => Some(*celsius),
            TemperatureSample::Fault => None,
        }
    }

    /// クライアントへ報告する温度（故障時は0.0）
    pub fn reported_celsius(&self) -> f32 {
        self.celsius().unwrap_or(FAULT_REPORTED_CELSIUS)
    }
}
