/// ハードウェア制御モジュール
#[cfg(feature = "esp")]
pub mod pins;
#[cfg(feature = "esp")]
pub mod soil_sensor_bus;

// Mock実装（テストとnon-espビルドで使用可能）
#[cfg(not(feature = "esp"))]
pub mod mock;

#[cfg(feature = "esp")]
pub use pins::SensorPins;
#[cfg(feature = "esp")]
pub use soil_sensor_bus::EspSensorBus;
