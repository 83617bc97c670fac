use log::{error, info};

use crate::communication::payload::render_json;
use crate::communication::routes::{ApiResponse, HttpMethod, Route, DASHBOARD_HTML};
use crate::core::{CalibrationBounds, RawReader, SensorError, SensorPort, TelemetrySnapshot};

/// テレメトリサービス - センサー読み取りとHTTPリクエスト処理を管理
///
/// センサーの所有者はこのサービスだけです。リクエスト間で共有する
/// 可変状態は持たず、スナップショットは毎回新しく生成します。
pub struct TelemetryService<P: SensorPort> {
    reader: RawReader<P>,
    calibration: CalibrationBounds,
}

impl<P: SensorPort> TelemetryService<P> {
    pub fn new(port: P, calibration: CalibrationBounds) -> Self {
        Self {
            reader: RawReader::new(port),
            calibration,
        }
    }

    /// センサーを読み取り、スナップショットを生成する
    pub fn snapshot(&mut self) -> Result<TelemetrySnapshot, SensorError> {
        let raw = self.reader.sample()?;
        Ok(TelemetrySnapshot::build(&raw, &self.calibration))
    }

    /// HTTPリクエストを処理する
    pub fn handle(&mut self, method: HttpMethod, uri: &str) -> ApiResponse {
        match Route::resolve(method, uri) {
            Route::Dashboard => ApiResponse::html(DASHBOARD_HTML),
            Route::Data => self.handle_data(),
            Route::NotFound => {
                info!("未定義のリクエスト: {:?} {}", method, uri);
                ApiResponse::not_found()
            }
        }
    }

    fn handle_data(&mut self) -> ApiResponse {
        let snapshot = match self.snapshot() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("センサー読み取りに失敗しました: {}", e);
                return ApiResponse::sensor_error();
            }
        };
        info!("📊 {}", snapshot.summary());

        match render_json(&snapshot) {
            Ok(json) => ApiResponse::json(json),
            Err(e) => {
                error!("JSONの生成に失敗しました: {}", e);
                ApiResponse::encoding_error()
            }
        }
    }
}
