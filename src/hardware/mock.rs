use crate::core::{SensorError, SensorPort};
use std::sync::{Arc, Mutex};

/// テスト用のセンサーモック実装
///
/// 実際のハードウェアを使わずにセンサー入力をシミュレートします。
/// クローンは状態を共有するため、サービスに渡した後でも値を変更できます。
#[derive(Debug, Clone)]
pub struct MockSensorPort {
    pub digital_high: Arc<Mutex<bool>>,
    pub moisture_adc: Arc<Mutex<u16>>,
    pub probe_celsius: Arc<Mutex<f32>>,
    pub gas_adc: Arc<Mutex<u16>>,
    /// エラーシミュレーション用のフラグ
    pub simulate_probe_error: Arc<Mutex<bool>>,
    pub simulate_adc_error: Arc<Mutex<bool>>,
    /// 各入力が読み取られた回数
    pub read_count: Arc<Mutex<ReadCount>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadCount {
    pub digital: u32,
    pub moisture: u32,
    pub probe: u32,
    pub gas: u32,
}

impl Default for MockSensorPort {
    fn default() -> Self {
        Self::new(false, 2300, 24.5, 150)
    }
}

impl MockSensorPort {
    /// 新しいMockSensorPortインスタンスを作成します
    pub fn new(digital_high: bool, moisture_adc: u16, probe_celsius: f32, gas_adc: u16) -> Self {
        Self {
            digital_high: Arc::new(Mutex::new(digital_high)),
            moisture_adc: Arc::new(Mutex::new(moisture_adc)),
            probe_celsius: Arc::new(Mutex::new(probe_celsius)),
            gas_adc: Arc::new(Mutex::new(gas_adc)),
            simulate_probe_error: Arc::new(Mutex::new(false)),
            simulate_adc_error: Arc::new(Mutex::new(false)),
            read_count: Arc::new(Mutex::new(ReadCount::default())),
        }
    }

    /// テスト用: 土壌水分のADC値を設定
    pub fn set_moisture_adc(&self, value: u16) {
        *self.moisture_adc.lock().unwrap() = value;
    }

    /// テスト用: プローブの戻り値を設定（-127.0 で故障値）
    pub fn set_probe_celsius(&self, value: f32) {
        *self.probe_celsius.lock().unwrap() = value;
    }

    /// テスト用: ガスセンサーのADC値を設定
    pub fn set_gas_adc(&self, value: u16) {
        *self.gas_adc.lock().unwrap() = value;
    }

    /// テスト用: デジタルピンのレベルを設定
    pub fn set_digital_high(&self, value: bool) {
        *self.digital_high.lock().unwrap() = value;
    }

    /// テスト用: 1-Wire通信エラーをシミュレート
    pub fn set_probe_error(&self, enable: bool) {
        *self.simulate_probe_error.lock().unwrap() = enable;
    }

    /// テスト用: ADC読み取りエラーをシミュレート
    pub fn set_adc_error(&self, enable: bool) {
        *self.simulate_adc_error.lock().unwrap() = enable;
    }

    /// テスト用: 読み取り回数を取得
    pub fn read_count(&self) -> ReadCount {
        *self.read_count.lock().unwrap()
    }

    fn adc_error(&self) -> Result<(), SensorError> {
        if *self.simulate_adc_error.lock().unwrap() {
            return Err(SensorError::Adc("Simulated ADC error".to_string()));
        }
        Ok(())
    }
}

impl SensorPort for MockSensorPort {
    fn read_moisture_digital(&mut self) -> Result<bool, SensorError> {
        self.read_count.lock().unwrap().digital += 1;
        Ok(*self.digital_high.lock().unwrap())
    }

    fn read_moisture_adc(&mut self) -> Result<u16, SensorError> {
        self.read_count.lock().unwrap().moisture += 1;
        self.adc_error()?;
        Ok(*self.moisture_adc.lock().unwrap())
    }

    fn read_probe_celsius(&mut self) -> Result<f32, SensorError> {
        self.read_count.lock().unwrap().probe += 1;
        if *self.simulate_probe_error.lock().unwrap() {
            return Err(SensorError::OneWire("Simulated CRC mismatch".to_string()));
        }
        Ok(*self.probe_celsius.lock().unwrap())
    }

    fn read_gas_adc(&mut self) -> Result<u16, SensorError> {
        self.read_count.lock().unwrap().gas += 1;
        self.adc_error()?;
        Ok(*self.gas_adc.lock().unwrap())
    }
}
