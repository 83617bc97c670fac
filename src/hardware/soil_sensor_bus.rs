use anyhow::anyhow;
use ds18b20::{Ds18b20, Resolution};
use esp_idf_svc::hal::{
    adc::{
        attenuation::DB_11,
        oneshot::{
            config::{AdcChannelConfig, Calibration},
            AdcChannelDriver, AdcDriver,
        },
        ADC1,
    },
    delay::Ets,
    gpio::{ADCPin, AnyIOPin, Gpio26, Gpio34, Gpio35, IOPin, Input, InputOutput, PinDriver, Pull},
};
use log::{info, warn};
use one_wire_bus::{Address, OneWire};

use crate::core::{SensorError, SensorPort};
use crate::hardware::pins::SensorPins;

/// 実機のセンサー入力
///
/// 土壌水分（デジタル/アナログ）、ガスセンサー（アナログ）、
/// DS18B20温度プローブ（1-Wire）を排他的に所有します。
pub struct EspSensorBus {
    adc: ADC1,
    moisture_analog: Gpio34,
    gas_analog: Gpio35,
    moisture_digital: PinDriver<'static, Gpio26, Input>,
    one_wire: OneWire<PinDriver<'static, AnyIOPin, InputOutput>>,
    probe_address: Option<Address>,
    delay: Ets,
}

impl EspSensorBus {
    pub fn new(adc: ADC1, pins: SensorPins) -> anyhow::Result<Self> {
        info!("センサーを初期化しています");
        let moisture_digital = PinDriver::input(pins.moisture_digital)?;

        let mut one_wire_pin = PinDriver::input_output_od(pins.one_wire.downgrade())?;
        one_wire_pin.set_pull(Pull::Up)?;
        one_wire_pin.set_high()?;
        let one_wire = OneWire::new(one_wire_pin)
            .map_err(|e| anyhow!("1-Wireバスの初期化に失敗しました: {:?}", e))?;

        let mut bus = Self {
            adc,
            moisture_analog: pins.moisture_analog,
            gas_analog: pins.gas_analog,
            moisture_digital,
            one_wire,
            probe_address: None,
            delay: Ets,
        };
        bus.scan_probe();

        info!("✓ センサーの初期化が完了しました");
        Ok(bus)
    }

    /// 1-Wireバス上のDS18B20を検索する
    fn scan_probe(&mut self) {
        info!("DS18B20を検索しています...");
        let mut found: Option<Address> = None;
        let mut device_count = 0_u32;

        for result in self.one_wire.devices(false, &mut self.delay) {
            match result {
                Ok(address) => {
                    device_count = device_count.saturating_add(1);
                    if found.is_none() && address.family_code() == ds18b20::FAMILY_CODE {
                        found = Some(address);
                    }
                }
                Err(e) => {
                    warn!("1-Wireデバイスの検索に失敗しました: {:?}", e);
                    break;
                }
            }
        }

        self.probe_address = found;
        match self.probe_address {
            Some(address) => info!("✓ DS18B20を検出しました (デバイス数: {}, 使用: {:?})", device_count, address),
            None => warn!("DS18B20が見つかりません (デバイス数: {})", device_count),
        }
    }

    /// 通信失敗時は次回の読み取りで再検索する
    fn forget_probe(&mut self, reason: String) -> SensorError {
        self.probe_address = None;
        SensorError::OneWire(reason)
    }
}

/// ADC1のワンショット読み取り（生値、減衰11dB）
fn read_adc_raw<T>(adc: &mut ADC1, pin: &mut T) -> Result<u16, SensorError>
where
    T: ADCPin<Adc = ADC1>,
{
    let driver = AdcDriver::new(&mut *adc).map_err(|e| SensorError::Adc(e.to_string()))?;
    let config = AdcChannelConfig {
        attenuation: DB_11,
        calibration: Calibration::None,
        ..Default::default()
    };
    let mut channel = AdcChannelDriver::new(&driver, &mut *pin, &config)
        .map_err(|e| SensorError::Adc(e.to_string()))?;

    channel.read_raw().map_err(|e| SensorError::Adc(e.to_string()))
}

impl SensorPort for EspSensorBus {
    fn read_moisture_digital(&mut self) -> Result<bool, SensorError> {
        Ok(self.moisture_digital.is_high())
    }

    fn read_moisture_adc(&mut self) -> Result<u16, SensorError> {
        read_adc_raw(&mut self.adc, &mut self.moisture_analog)
    }

    fn read_probe_celsius(&mut self) -> Result<f32, SensorError> {
        if self.probe_address.is_none() {
            self.scan_probe();
        }
        let address = self.probe_address.ok_or(SensorError::ProbeNotFound)?;

        let sensor = match Ds18b20::new::<std::convert::Infallible>(address) {
            Ok(sensor) => sensor,
            Err(e) => return Err(self.forget_probe(format!("無効なアドレス {:?}: {:?}", address, e))),
        };

        if let Err(e) = ds18b20::start_simultaneous_temp_measurement(&mut self.one_wire, &mut self.delay) {
            return Err(self.forget_probe(format!("温度変換の開始に失敗: {:?}", e)));
        }

        // 12bit分解能の変換完了まで待機（最大750ms）
        Resolution::Bits12.delay_for_measurement_time(&mut self.delay);

        match sensor.read_data(&mut self.one_wire, &mut self.delay) {
            Ok(data) => Ok(data.temperature),
            Err(e) => Err(self.forget_probe(format!("データの読み取りに失敗: {:?}", e))),
        }
    }

    fn read_gas_adc(&mut self) -> Result<u16, SensorError> {
        read_adc_raw(&mut self.adc, &mut self.gas_analog)
    }
}
