use anyhow::anyhow;
use esp_idf_svc::hal::modem::Modem;
use esp_idf_svc::{
    eventloop::EspSystemEventLoop,
    nvs::EspDefaultNvsPartition,
    wifi::{AccessPointConfiguration, AuthMethod, BlockingWifi, Configuration, EspWifi},
};
use log::{info, warn};

use crate::config::AppConfig;

/// WiFiアクセスポイントの初期化を管理するモジュール
pub struct NetworkManager;

impl NetworkManager {
    /// 設定に従ってソフトAPを起動する
    ///
    /// 戻り値のWiFiハンドルを破棄するとAPも停止するため、
    /// 呼び出し側で保持し続けてください。
    pub fn start_access_point(
        modem: Modem,
        sysloop: &EspSystemEventLoop,
        nvs_partition: &EspDefaultNvsPartition,
        config: &AppConfig,
    ) -> anyhow::Result<BlockingWifi<EspWifi<'static>>> {
        info!("WiFiアクセスポイントを準備しています: {}", config.wifi_ap_ssid);

        let mut wifi = BlockingWifi::wrap(
            EspWifi::new(modem, sysloop.clone(), Some(nvs_partition.clone()))?,
            sysloop.clone(),
        )?;

        let auth_method = if config.is_open_access_point() {
            warn!("APパスワードが未設定です。オープンネットワークとして起動します");
            AuthMethod::None
        } else {
            AuthMethod::WPA2Personal
        };

        wifi.set_configuration(&Configuration::AccessPoint(AccessPointConfiguration {
            ssid: config
                .wifi_ap_ssid
                .as_str()
                .try_into()
                .map_err(|_| anyhow!("SSIDが長すぎます: {}", config.wifi_ap_ssid))?,
            password: config
                .wifi_ap_password
                .as_str()
                .try_into()
                .map_err(|_| anyhow!("APパスワードが長すぎます"))?,
            auth_method,
            channel: config.wifi_ap_channel,
            ..Default::default()
        }))?;

        wifi.start()?;
        wifi.wait_netif_up()?;

        let ip_info = wifi.wifi().ap_netif().get_ip_info()?;
        info!(
            "✓ アクセスポイントを起動しました (SSID: {}, チャンネル: {}, IP: {})",
            config.wifi_ap_ssid, config.wifi_ap_channel, ip_info.ip
        );

        Ok(wifi)
    }
}
