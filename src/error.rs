use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::error::Category;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("Expected request with `Content-Type: application/json`")]
    UnsupportedMediaType,

    #[error("Failed to parse the request body as JSON: {0}")]
    MalformedJson(serde_json::Error),

    #[error("Failed to deserialize the JSON body into the target type: {0}")]
    InvalidBody(serde_json::Error),

    /// Body could not be buffered (too large, aborted). Keeps axum's status.
    #[error(transparent)]
    Body(#[from] BytesRejection),
}

impl AppError {
    /// Syntax and truncation problems are the client's JSON; anything else is a shape mismatch.
    pub fn from_json(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof => AppError::MalformedJson(err),
            Category::Data | Category::Io => AppError::InvalidBody(err),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Body(rejection) => rejection.status(),
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::Body(rejection) => rejection.body_text(),
            other => other.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "Request failed");
        } else {
            tracing::debug!(%status, error = %self, "Request rejected");
        }
        (status, Json(ErrorBody { error: self.message() })).into_response()
    }
}
