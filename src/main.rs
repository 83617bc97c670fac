use std::sync::{Arc, Mutex};

use esp_idf_svc::{
    eventloop::EspSystemEventLoop,
    hal::{delay::FreeRtos, peripherals::Peripherals},
    nvs::EspDefaultNvsPartition,
};
use log::{error, info};

use soil_monitor::communication::{start_http_server, NetworkManager, TelemetryService};
use soil_monitor::config::AppConfig;
use soil_monitor::hardware::{EspSensorBus, SensorPins};

/// アプリケーションのメインエントリーポイント
fn main() -> anyhow::Result<()> {
    // ESP-IDFの基本初期化
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("=== Soil Monitor v{} を起動します ===", soil_monitor::VERSION);

    // 設定ファイル読み込み
    let app_config = AppConfig::load().map_err(|e| {
        error!("設定ファイルの読み込みに失敗しました: {}", e);
        anyhow::anyhow!("設定ファイルの読み込みエラー: {}", e)
    })?;
    info!(
        "キャリブレーション値: 乾燥={}, 水中={}",
        app_config.calibration.air_value(),
        app_config.calibration.water_value()
    );

    // ペリフェラルとシステムリソースの初期化
    info!("ペリフェラルを初期化しています");
    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;
    let nvs_partition = EspDefaultNvsPartition::take()?;

    let pins = peripherals.pins;
    let sensor_pins = SensorPins::new(pins.gpio26, pins.gpio34, pins.gpio35, pins.gpio4);
    let sensor_bus = EspSensorBus::new(peripherals.adc1, sensor_pins)?;

    // WiFi APはサーバー稼働中ずっと保持する
    let _wifi = NetworkManager::start_access_point(
        peripherals.modem,
        &sysloop,
        &nvs_partition,
        &app_config,
    )?;

    let service = Arc::new(Mutex::new(TelemetryService::new(
        sensor_bus,
        app_config.calibration,
    )));
    let _server = start_http_server(service, &app_config)?;

    info!("✓ 初期化が完了しました。リクエストを待機しています");
    loop {
        // HTTPハンドラーは別タスクで動作するため、ここでは待機のみ
        FreeRtos::delay_ms(app_config.idle_delay_ms);
    }
}
