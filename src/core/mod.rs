/// コアシステムモジュール（ハードウェア非依存）
pub mod calibration;
pub mod classification;
pub mod reading;
pub mod sensor_port;
pub mod snapshot;
pub mod temperature;

pub use calibration::{CalibrationBounds, CalibrationError};
pub use reading::{DigitalMoisture, RawReading};
pub use sensor_port::{RawReader, SensorError, SensorPort};
pub use snapshot::TelemetrySnapshot;
pub use temperature::TemperatureSample;
