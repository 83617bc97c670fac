use esp_idf_svc::hal::gpio::*;

/// センサーピン設定構造体
///
/// # 配線例（ESP32 DevKit）
/// ```text
/// 土壌水分センサー (デジタル) -> GPIO26
/// 土壌水分センサー (アナログ) -> GPIO34 (ADC1)
/// ガスセンサー MQ-135        -> GPIO35 (ADC1)
/// DS18B20 Data               -> GPIO4 (4.7kΩ プルアップ)
/// ```
pub struct SensorPins {
    pub moisture_digital: Gpio26,
    pub moisture_analog: Gpio34,
    pub gas_analog: Gpio35,
    pub one_wire: Gpio4,
}

impl SensorPins {
    /// 個別のピンから作成
    pub fn new(
        moisture_digital: Gpio26,
        moisture_analog: Gpio34,
        gas_analog: Gpio35,
        one_wire: Gpio4,
    ) -> Self {
        Self {
            moisture_digital,
            moisture_analog,
            gas_analog,
            one_wire,
        }
    }
}
