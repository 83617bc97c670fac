use log::debug;

use crate::core::reading::{DigitalMoisture, RawReading};
use crate::core::temperature::TemperatureSample;

/// センサー読み取りエラー
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SensorError {
    #[error("GPIO読み取りエラー: {0}")]
    Gpio(String),
    #[error("ADC読み取りエラー: {0}")]
    Adc(String),
    #[error("1-Wire通信エラー: {0}")]
    OneWire(String),
    #[error("温度プローブが見つかりません")]
    ProbeNotFound,
}

/// センサー入力インターフェースのトレイト
///
/// このトレイトを実装することで、実機用とテスト用(Mock)の
/// 実装を切り替えることができます。
pub trait SensorPort {
    /// デジタル土壌水分ピンのレベルを読み取る（true: HIGH）
    fn read_moisture_digital(&mut self) -> Result<bool, SensorError>;

    /// 土壌水分のADC生値を読み取る
    fn read_moisture_adc(&mut self) -> Result<u16, SensorError>;

    /// 温度変換を開始し、完了を待ってから温度（℃）を読み取る
    ///
    /// 変換が終わるまでブロックします（DS18B20 12bit: 最大750ms）。
    fn read_probe_celsius(&mut self) -> Result<f32, SensorError>;

    /// ガスセンサーのADC生値を読み取る
    fn read_gas_adc(&mut self) -> Result<u16, SensorError>;
}

/// 生データ読み取り
///
/// 各入力を1回の測定につき1回だけ読み取ります。リトライもキャッシュもしません。
pub struct RawReader<P: SensorPort> {
    port: P,
}

impl<P: SensorPort> RawReader<P> {
    pub fn new(port: P) -> Self {
        Self { port }
    }

    /// 全センサーを1回ずつ読み取る
    ///
    /// 温度プローブの失敗は `TemperatureSample::Fault` として返し、
    /// GPIO/ADCのエラーのみ呼び出し側へ伝播します。
    pub fn sample(&mut self) -> Result<RawReading, SensorError> {
        let digital_moisture = DigitalMoisture::from_pin_level(self.port.read_moisture_digital()?);
        let analog_moisture = self.port.read_moisture_adc()?;

        let temperature = match self.port.read_probe_celsius() {
            Ok(celsius) => TemperatureSample::from_probe_celsius(celsius),
            Err(e) => {
                debug!("温度プローブ読み取りエラー: {}", e);
                TemperatureSample::Fault
            }
        };

        let gas = self.port.read_gas_adc()?;

        let reading = RawReading {
            digital_moisture,
            analog_moisture,
            temperature,
            gas,
        };
        debug!("生データ: {:?}", reading);
        Ok(reading)
    }
}
