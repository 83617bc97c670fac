/// Telemetry Service Integration Tests
///
/// このテストは、センサーのMock実装を使用して、
/// センサー読み取りからHTTPレスポンス生成までのデータフローをテストします。
/// ホストマシンで実行: `cargo test`

use serde_json::Value;
use soil_monitor::communication::routes::{
    CONTENT_TYPE_HTML, CONTENT_TYPE_JSON, CORS_HEADER, NOT_FOUND_BODY, SENSOR_ERROR_BODY,
};
use soil_monitor::communication::{HttpMethod, TelemetryPayload, TelemetryService};
use soil_monitor::core::CalibrationBounds;
use soil_monitor::hardware::mock::MockSensorPort;

fn create_service(mock: &MockSensorPort) -> TelemetryService<MockSensorPort> {
    TelemetryService::new(mock.clone(), CalibrationBounds::default())
}

fn get_json(service: &mut TelemetryService<MockSensorPort>) -> Value {
    let response = service.handle(HttpMethod::Get, "/data");
    assert_eq!(response.status, 200);
    assert_eq!(response.content_type, CONTENT_TYPE_JSON);
    serde_json::from_slice(&response.body).unwrap()
}

#[test]
fn test_data_endpoint_returns_five_typed_fields() {
    let mock = MockSensorPort::new(false, 2300, 24.5, 150);
    let mut service = create_service(&mock);

    let json = get_json(&mut service);
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 5);

    assert_eq!(json["digital"], 0);
    assert_eq!(json["analog"], 2300);
    assert_eq!(json["percent"], 50);
    assert_eq!(json["temperature"].as_f64(), Some(24.5));
    assert_eq!(json["gas"], 150);

    assert!(json["digital"].is_u64());
    assert!(json["analog"].is_u64());
    assert!(json["percent"].is_u64());
    assert!(json["temperature"].is_f64());
    assert!(json["gas"].is_u64());
}

#[test]
fn test_data_endpoint_dry_soil() {
    let mock = MockSensorPort::new(true, 3200, 18.0, 400);
    let mut service = create_service(&mock);

    let json = get_json(&mut service);
    assert_eq!(json["digital"], 1);
    assert_eq!(json["percent"], 0);
}

#[test]
fn test_probe_fault_reports_zero_then_recovers() {
    let mock = MockSensorPort::default();
    let mut service = create_service(&mock);

    mock.set_probe_celsius(-127.0);
    let json = get_json(&mut service);
    assert_eq!(json["temperature"].as_f64(), Some(0.0));
    // 他のフィールドは正常に返る
    assert_eq!(json["analog"], 2300);
    assert_eq!(json["percent"], 50);

    mock.set_probe_celsius(21.0625);
    let json = get_json(&mut service);
    assert_eq!(json["temperature"].as_f64(), Some(21.06));
}

#[test]
fn test_probe_communication_error_reports_zero() {
    let mock = MockSensorPort::default();
    let mut service = create_service(&mock);

    mock.set_probe_error(true);
    let json = get_json(&mut service);
    assert_eq!(json["temperature"].as_f64(), Some(0.0));
    assert_eq!(json["gas"], 150);
}

#[test]
fn test_unknown_path_returns_not_found_and_data_still_works() {
    let mock = MockSensorPort::default();
    let mut service = create_service(&mock);

    let response = service.handle(HttpMethod::Get, "/nonexistent");
    assert_eq!(response.status, 404);
    assert_eq!(response.body_text(), NOT_FOUND_BODY);
    assert!(response.headers().contains(&CORS_HEADER));
    // 404ではセンサーを読み取らない
    assert_eq!(mock.read_count().moisture, 0);

    let json = get_json(&mut service);
    assert_eq!(json["analog"], 2300);
}

#[test]
fn test_post_data_is_not_routed() {
    let mock = MockSensorPort::default();
    let mut service = create_service(&mock);

    let response = service.handle(HttpMethod::Post, "/data");
    assert_eq!(response.status, 404);
    assert_eq!(mock.read_count().gas, 0);
}

#[test]
fn test_repeated_requests_with_stable_inputs_are_identical() {
    let mock = MockSensorPort::new(false, 1800, 22.25, 333);
    let mut service = create_service(&mock);

    let first = service.handle(HttpMethod::Get, "/data");
    let second = service.handle(HttpMethod::Get, "/data");
    assert_eq!(first.body, second.body);

    // リクエストごとに各センサーを1回ずつ読み取る
    let count = mock.read_count();
    assert_eq!(count.digital, 2);
    assert_eq!(count.moisture, 2);
    assert_eq!(count.probe, 2);
    assert_eq!(count.gas, 2);
}

#[test]
fn test_gas_raw_value_passes_through() {
    let mock = MockSensorPort::default();
    mock.set_gas_adc(812);
    let mut service = create_service(&mock);

    let json = get_json(&mut service);
    assert_eq!(json["gas"], 812);
}

#[test]
fn test_out_of_range_moisture_is_clamped() {
    let mock = MockSensorPort::default();
    let mut service = create_service(&mock);

    mock.set_moisture_adc(4095);
    let json = get_json(&mut service);
    assert_eq!(json["percent"], 0);
    // 生値はそのまま報告する
    assert_eq!(json["analog"], 4095);

    mock.set_moisture_adc(0);
    let json = get_json(&mut service);
    assert_eq!(json["percent"], 100);
}

#[test]
fn test_adc_error_returns_server_error() {
    let mock = MockSensorPort::default();
    mock.set_adc_error(true);
    let mut service = create_service(&mock);

    let response = service.handle(HttpMethod::Get, "/data");
    assert_eq!(response.status, 500);
    assert_eq!(response.body_text(), SENSOR_ERROR_BODY);
    assert!(response.headers().contains(&CORS_HEADER));

    // エラー解消後は通常通り応答する
    mock.set_adc_error(false);
    let json = get_json(&mut service);
    assert_eq!(json["analog"], 2300);
}

#[test]
fn test_dashboard_is_served_as_html() {
    let mock = MockSensorPort::default();
    let mut service = create_service(&mock);

    let response = service.handle(HttpMethod::Get, "/");
    assert_eq!(response.status, 200);
    assert_eq!(response.content_type, CONTENT_TYPE_HTML);
    assert!(response.body_text().contains("<html"));
    assert!(response.headers().contains(&CORS_HEADER));
    // ダッシュボード表示ではセンサーを読み取らない
    assert_eq!(mock.read_count().probe, 0);
}

#[test]
fn test_payload_deserializes_from_response() {
    let mock = MockSensorPort::new(true, 1400, -3.5, 701);
    let mut service = create_service(&mock);

    let response = service.handle(HttpMethod::Get, "/data?t=1");
    let payload: TelemetryPayload = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(
        payload,
        TelemetryPayload {
            digital: 1,
            analog: 1400,
            percent: 100,
            temperature: -3.5,
            gas: 701,
        }
    );
}

#[test]
fn test_custom_calibration() {
    let mock = MockSensorPort::default();
    mock.set_moisture_adc(2000);
    let calibration = CalibrationBounds::new(3000, 1000).unwrap();
    let mut service = TelemetryService::new(mock.clone(), calibration);

    let json = get_json(&mut service);
    assert_eq!(json["percent"], 50);
}

#[test]
fn test_unrouted_methods_get_not_found_with_cors() {
    let mock = MockSensorPort::default();
    let mut service = create_service(&mock);

    // OPTIONS / PATCH などは HttpMethod::Other としてルーターに届く
    for uri in ["/data", "/", "/nonexistent"] {
        let response = service.handle(HttpMethod::Other, uri);
        assert_eq!(response.status, 404);
        assert_eq!(response.body_text(), NOT_FOUND_BODY);
        assert!(response.headers().contains(&CORS_HEADER));
    }
    assert_eq!(mock.read_count().probe, 0);
}

#[test]
fn test_probe_error_records_single_warning() {
    let mock = MockSensorPort::default();
    mock.set_probe_error(true);
    let mut service = create_service(&mock);

    let snapshot = service.snapshot().unwrap();
    assert_eq!(snapshot.sensor_warnings().len(), 1);
    assert!(snapshot.temperature().is_fault());
}
