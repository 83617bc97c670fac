/// 土壌水分キャリブレーション
/// ハードウェア非依存の純粋関数を提供

/// ESP32 ADC（12bit）の最大値
pub const ADC_MAX_COUNTS: u16 = 4095;

/// 乾燥した空気中でのADC生値（デフォルト）
pub const DEFAULT_AIR_VALUE: u16 = 3200;
/// 水に浸した状態でのADC生値（デフォルト）
pub const DEFAULT_WATER_VALUE: u16 = 1400;

const PERCENT_MIN: i32 = 0;
const PERCENT_MAX: i32 = 100;

/// キャリブレーションエラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalibrationError {
    #[error("水中値({water})は空気中値({air})より小さくなければなりません")]
    InvertedBounds { air: u16, water: u16 },
    #[error("ADCの範囲外です (0-4095): {0}")]
    OutOfAdcRange(u16),
}

/// 土壌水分センサーのキャリブレーション範囲
///
/// 起動時に一度だけ構築され、以降は変更されません。
/// 不変条件: `water_value < air_value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationBounds {
    air_value: u16,
    water_value: u16,
}

impl CalibrationBounds {
    pub fn new(air_value: u16, water_value: u16) -> Result<Self, CalibrationError> {
        if air_value > ADC_MAX_COUNTS {
            return Err(CalibrationError::OutOfAdcRange(air_value));
        }
        if water_value >= air_value {
            return Err(CalibrationError::InvertedBounds {
                air: air_value,
                water: water_value,
            });
        }
        Ok(Self {
            air_value,
            water_value,
        })
    }

    pub fn air_value(&self) -> u16 {
        self.air_value
    }

    pub fn water_value(&self) -> u16 {
        self.water_value
    }

    /// 生値をキャリブレーション範囲内に収める
    ///
    /// ノイズや断線による範囲外の値は近い方の境界に固定されます。
    pub fn clamp(&self, raw: u16) -> u16 {
        raw.clamp(self.water_value, self.air_value)
    }

    /// ADC生値を土壌水分パーセンテージ（0-100）に変換する
    ///
    /// 値が小さいほど湿っている（100%に近い）。小数部は切り捨て。
    ///
    /// # Examples
    /// ```
    /// use soil_monitor::core::calibration::CalibrationBounds;
    ///
    /// let bounds = CalibrationBounds::new(3200, 1400).unwrap();
    /// assert_eq!(bounds.moisture_percent(2300), 50);
    /// ```
    pub fn moisture_percent(&self, raw: u16) -> u8 {
        let clamped = self.clamp(raw);
        let percent = map_range(
            i32::from(clamped),
            i32::from(self.air_value),
            i32::from(self.water_value),
            PERCENT_MIN,
            PERCENT_MAX,
        )
        // new() で空の範囲は排除済み
        .unwrap_or(PERCENT_MIN);

        percent.clamp(PERCENT_MIN, PERCENT_MAX) as u8
    }
}

impl Default for CalibrationBounds {
    fn default() -> Self {
        Self {
            air_value: DEFAULT_AIR_VALUE,
            water_value: DEFAULT_WATER_VALUE,
        }
    }
}

/// 整数の線形写像（Arduino `map()` と同じ切り捨て除算）
///
/// 入力範囲が空の場合は `None` を返します。
pub fn map_range(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> Option<i32> {
    let run = in_max - in_min;
    if run == 0 {
        return None;
    }
    let rise = out_max - out_min;
    let delta = x - in_min;
    Some(delta * rise / run + out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> CalibrationBounds {
        CalibrationBounds::new(3200, 1400).unwrap()
    }

    #[test]
    fn test_water_value_is_100_percent() {
        assert_eq!(bounds().moisture_percent(1400), 100);
    }

    #[test]
    fn test_air_value_is_0_percent() {
        assert_eq!(bounds().moisture_percent(3200), 0);
    }

    #[test]
    fn test_midpoint_is_50_percent() {
        // (2300 - 3200) * 100 / (1400 - 3200) = 50
        assert_eq!(bounds().moisture_percent(2300), 50);
    }

    #[test]
    fn test_fraction_is_truncated() {
        // 49.94... -> 49
        assert_eq!(bounds().moisture_percent(2301), 49);
        // 50.05... -> 50
        assert_eq!(bounds().moisture_percent(2299), 50);
    }

    #[test]
    fn test_below_water_value_clamped_to_100() {
        assert_eq!(bounds().moisture_percent(0), 100);
        assert_eq!(bounds().moisture_percent(1399), 100);
    }

    #[test]
    fn test_above_air_value_clamped_to_0() {
        assert_eq!(bounds().moisture_percent(3201), 0);
        assert_eq!(bounds().moisture_percent(ADC_MAX_COUNTS), 0);
        assert_eq!(bounds().moisture_percent(u16::MAX), 0);
    }

    #[test]
    fn test_percent_is_non_increasing_over_adc_range() {
        let bounds = bounds();
        let mut previous = bounds.moisture_percent(0);
        for raw in 1..=ADC_MAX_COUNTS {
            let percent = bounds.moisture_percent(raw);
            assert!(percent <= previous, "raw={} percent={} previous={}", raw, percent, previous);
            assert!(percent <= 100);
            previous = percent;
        }
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert_eq!(
            CalibrationBounds::new(1400, 3200),
            Err(CalibrationError::InvertedBounds { air: 1400, water: 3200 })
        );
    }

    #[test]
    fn test_air_value_above_adc_range_rejected() {
        assert_eq!(
            CalibrationBounds::new(ADC_MAX_COUNTS + 1, 1400),
            Err(CalibrationError::OutOfAdcRange(4096))
        );
        assert!(CalibrationBounds::new(ADC_MAX_COUNTS, 1400).is_ok());
    }

    #[test]
    fn test_equal_bounds_rejected() {
        assert!(CalibrationBounds::new(2000, 2000).is_err());
    }

    #[test]
    fn test_narrow_bounds() {
        // 範囲が1しかない場合も0か100のどちらかになる
        let bounds = CalibrationBounds::new(1001, 1000).unwrap();
        assert_eq!(bounds.moisture_percent(1000), 100);
        assert_eq!(bounds.moisture_percent(1001), 0);
    }

    #[test]
    fn test_default_bounds() {
        let bounds = CalibrationBounds::default();
        assert_eq!(bounds.air_value(), DEFAULT_AIR_VALUE);
        assert_eq!(bounds.water_value(), DEFAULT_WATER_VALUE);
    }

    #[test]
    fn test_map_range_empty_input_range() {
        assert_eq!(map_range(5, 10, 10, 0, 100), None);
    }

    #[test]
    fn test_map_range_forward() {
        assert_eq!(map_range(512, 0, 1023, 0, 255), Some(127));
    }
}
