use axum::response::IntoResponse;
use http::StatusCode;

use crate::conf::ParseEnvError;

#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ParseEnvError),
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
    #[error("Tracing error: {0}")]
    Tracing(#[from] dash_observability::TracingError),
}

#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error("No page at {0}")]
    NotFound(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> axum::response::Response {
        let (code, code_str) = match &self {
            PageError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        };
        let body = serde_json::json!({
            "error": { "code": code_str, "message": self.to_string() }
        });
        let mut resp = (code, body.to_string()).into_response();
        resp.headers_mut().insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        resp
    }
}
