use crate::core::temperature::TemperatureSample;

/// デジタル土壌水分センサー（コンパレーター出力）の状態
///
/// しきい値より乾燥しているとピンがHIGHになる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitalMoisture {
    Wet,
    Dry,
}

impl DigitalMoisture {
    pub fn from_pin_level(is_high: bool) -> Self {
        if is_high {
            DigitalMoisture::Dry
        } else {
            DigitalMoisture::Wet
        }
    }

    /// APIで報告する値（乾燥: 1, 湿潤: 0）
    pub fn as_flag(&self) -> u8 {
        match self {
            DigitalMoisture::Wet => 0,
            DigitalMoisture::Dry => 1,
        }
    }
}

/// 1回の測定で得られた生データ（ハードウェア非依存）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawReading {
    pub digital_moisture: DigitalMoisture,
    /// 土壌水分のADC生値
    pub analog_moisture: u16,
    pub temperature: TemperatureSample,
    /// ガスセンサー（MQ-135）のADC生値
    pub gas: u16,
}
