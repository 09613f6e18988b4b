use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use serde::Deserialize;

// ───── Data Access Errors ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StoreErrorKind {
    #[display("not found")]
    NotFound,

    /// Network failure, malformed request, permission denial: one bucket.
    #[display("transport")]
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{message} (code: {code})")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub code: String,
    pub message: String,
}

impl std::error::Error for StoreError {}

impl StoreError {
    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError {
            kind: StoreErrorKind::NotFound,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn transport(code: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError {
            kind: StoreErrorKind::Transport,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == StoreErrorKind::NotFound
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            "timeout"
        } else if err.is_connect() {
            "connect"
        } else if err.is_decode() {
            "decode"
        } else {
            "network"
        };
        StoreError::transport(code, err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::transport("decode", format!("Unexpected record shape: {}", err))
    }
}

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
pub struct RemoteErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

// ───── HTTP Boundary Errors ─────────────────────────────────────────

#[derive(Debug, Display)]
pub enum AppError {
    #[display("Bad request: {_0}")]
    BadRequest(String),

    #[display("Not found: {_0}")]
    NotFound(String),

    #[display("Another {_0} operation is already in progress")]
    Busy(&'static str),

    #[display("Upstream error: {_0}")]
    Upstream(String),
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({"error": self.to_string()}))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Busy(_) => StatusCode::CONFLICT,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err.kind {
            StoreErrorKind::NotFound => AppError::NotFound(err.message),
            StoreErrorKind::Transport => AppError::Upstream(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_maps_to_conflict() {
        assert_eq!(AppError::Busy("project").status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn store_kinds_map_to_http_statuses() {
        let missing: AppError = StoreError::not_found("PGRST116", "no rows").into();
        let offline: AppError = StoreError::transport("connect", "refused").into();

        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(offline.status_code(), StatusCode::BAD_GATEWAY);
    }
}
