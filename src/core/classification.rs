//! ダッシュボードと同じ判定区分（ログ表示用）
//!
//! JSONには含めず、クライアント側でも同じしきい値で判定します。

/// これ未満は乾燥
pub const MOISTURE_DRY_BELOW_PERCENT: u8 = 30;
/// これ未満は適度、以上は湿潤
pub const MOISTURE_WET_FROM_PERCENT: u8 = 70;
/// これを超えると高温
pub const TEMPERATURE_HIGH_ABOVE_C: f32 = 30.0;
/// これ未満は低温
pub const TEMPERATURE_LOW_BELOW_C: f32 = 15.0;
/// これを超えるとガス濃度が危険
pub const GAS_CRITICAL_ABOVE: u16 = 700;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoistureStatus {
    Dry,
    Moderate,
    Wet,
}

impl MoistureStatus {
    pub fn from_percent(percent: u8) -> Self {
        if percent < MOISTURE_DRY_BELOW_PERCENT {
            MoistureStatus::Dry
        } else if percent < MOISTURE_WET_FROM_PERCENT {
            MoistureStatus::Moderate
        } else {
            MoistureStatus::Wet
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoistureStatus::Dry => "乾燥",
            MoistureStatus::Moderate => "適度",
            MoistureStatus::Wet => "湿潤",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureStatus {
    Low,
    Ideal,
    High,
}

impl TemperatureStatus {
    pub fn from_celsius(celsius: f32) -> Self {
        if celsius > TEMPERATURE_HIGH_ABOVE_C {
            TemperatureStatus::High
        } else if celsius < TEMPERATURE_LOW_BELOW_C {
            TemperatureStatus::Low
        } else {
            TemperatureStatus::Ideal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureStatus::Low => "低温",
            TemperatureStatus::Ideal => "適温",
            TemperatureStatus::High => "高温",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasStatus {
    Normal,
    Critical,
}

impl GasStatus {
    pub fn from_raw(raw: u16) -> Self {
        if raw > GAS_CRITICAL_ABOVE {
            GasStatus::Critical
        } else {
            GasStatus::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GasStatus::Normal => "正常",
            GasStatus::Critical => "危険",
        }
    }
}
