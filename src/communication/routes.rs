//! HTTPルーティング（ハードウェア非依存）

/// 全レスポンスに付与するCORSヘッダー
pub const CORS_HEADER: (&str, &str) = ("Access-Control-Allow-Origin", "*");

pub const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// 未定義パスへの固定メッセージ
pub const NOT_FOUND_BODY: &str = "Not Found";
/// センサー読み取り失敗時の固定メッセージ
pub const SENSOR_ERROR_BODY: &str = "Sensor read failed";
/// JSON生成失敗時の固定メッセージ
pub const ENCODING_ERROR_BODY: &str = "Response encoding failed";

/// ダッシュボードHTML
pub const DASHBOARD_HTML: &str = include_str!("dashboard.html");

/// HTTPメソッド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Other,
}

/// 解決されたルート
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /`
    Dashboard,
    /// `GET /data`
    Data,
    NotFound,
}

impl Route {
    /// メソッドとURIからルートを決定する
    ///
    /// クエリ文字列は無視し、パスは完全一致で比較します。
    pub fn resolve(method: HttpMethod, uri: &str) -> Self {
        let path = uri.split(['?', '#']).next().unwrap_or("");

        match (method, path) {
            (HttpMethod::Get, "/") => Route::Dashboard,
            (HttpMethod::Get, "/data") => Route::Data,
            _ => Route::NotFound,
        }
    }
}

/// HTTPレスポンス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn html(body: &str) -> Self {
        Self {
            status: 200,
            content_type: CONTENT_TYPE_HTML,
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn json(body: String) -> Self {
        Self {
            status: 200,
            content_type: CONTENT_TYPE_JSON,
            body: body.into_bytes(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            content_type: CONTENT_TYPE_TEXT,
            body: NOT_FOUND_BODY.as_bytes().to_vec(),
        }
    }

    pub fn sensor_error() -> Self {
        Self {
            status: 500,
            content_type: CONTENT_TYPE_TEXT,
            body: SENSOR_ERROR_BODY.as_bytes().to_vec(),
        }
    }

    pub fn encoding_error() -> Self {
        Self {
            status: 500,
            content_type: CONTENT_TYPE_TEXT,
            body: ENCODING_ERROR_BODY.as_bytes().to_vec(),
        }
    }

    pub fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            404 => "Not Found",
            500 => "Internal Server Error",
            _ => "",
        }
    }

    /// レスポンスヘッダー（Content-TypeとCORS）
    pub fn headers(&self) -> [(&'static str, &'static str); 2] {
        [("Content-Type", self.content_type), CORS_HEADER]
    }

    pub fn body_text(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap_or("")
    }
}
