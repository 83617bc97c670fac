use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use embedded_svc::http::{Method, Query};
use embedded_svc::io::Write;
use esp_idf_svc::http::server::{Configuration, EspHttpServer};
use log::info;

use crate::communication::routes::HttpMethod;
use crate::communication::telemetry_service::TelemetryService;
use crate::config::AppConfig;
use crate::core::SensorPort;

/// ワイルドカードハンドラーを登録するメソッド
///
/// ルーティング自体は `Route::resolve` が行うため、
/// 未定義のパスやメソッドも含めてすべてサービスに渡します。
/// 未登録のメソッドはhttpdが405（CORSヘッダーなし）で応答してしまうため、
/// `HttpMethod::Other` に落ちるメソッドもここに並べます。
const HANDLED_METHODS: [Method; 9] = [
    Method::Get,
    Method::Head,
    Method::Post,
    Method::Put,
    Method::Delete,
    Method::Options,
    Method::Patch,
    Method::Connect,
    Method::Trace,
];

impl From<Method> for HttpMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => HttpMethod::Get,
            Method::Head => HttpMethod::Head,
            Method::Post => HttpMethod::Post,
            Method::Put => HttpMethod::Put,
            Method::Delete => HttpMethod::Delete,
            _ => HttpMethod::Other,
        }
    }
}

/// HTTPサーバーを起動する
///
/// 戻り値のサーバーを破棄するとリスナーも停止します。
pub fn start_http_server<P>(
    service: Arc<Mutex<TelemetryService<P>>>,
    config: &AppConfig,
) -> anyhow::Result<EspHttpServer<'static>>
where
    P: SensorPort + Send + 'static,
{
    let server_config = Configuration {
        http_port: config.http_port,
        stack_size: config.http_stack_size,
        uri_match_wildcard: true,
        max_uri_handlers: HANDLED_METHODS.len(),
        ..Default::default()
    };
    let mut server = EspHttpServer::new(&server_config)?;

    for method in HANDLED_METHODS {
        let service = service.clone();
        server.fn_handler::<anyhow::Error, _>("/*", method, move |req| {
            let uri = req.uri().to_string();
            let response = service
                .lock()
                .map_err(|_| anyhow!("テレメトリサービスのロックに失敗しました"))?
                .handle(HttpMethod::from(req.method()), &uri);

            let headers = response.headers();
            let mut resp = req.into_response(response.status, Some(response.reason()), &headers)?;
            resp.write_all(&response.body)?;
            Ok(())
        })?;
    }

    info!("✓ HTTPサーバーを起動しました (ポート: {})", config.http_port);
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routed_methods_map_to_router_methods() {
        assert_eq!(HttpMethod::from(Method::Get), HttpMethod::Get);
        assert_eq!(HttpMethod::from(Method::Head), HttpMethod::Head);
        assert_eq!(HttpMethod::from(Method::Post), HttpMethod::Post);
        assert_eq!(HttpMethod::from(Method::Put), HttpMethod::Put);
        assert_eq!(HttpMethod::from(Method::Delete), HttpMethod::Delete);
    }

    #[test]
    fn test_preflight_and_patch_are_registered() {
        for method in [Method::Options, Method::Patch, Method::Connect, Method::Trace] {
            assert!(HANDLED_METHODS.contains(&method), "{:?} が未登録です", method);
            assert_eq!(HttpMethod::from(method), HttpMethod::Other);
        }
    }

    #[test]
    fn test_handler_count_fits_server_limit() {
        let default_limit = Configuration::default().max_uri_handlers;
        assert!(HANDLED_METHODS.len() <= default_limit);
    }
}
