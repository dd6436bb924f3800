//! Error responses produced by the route handlers.
//!
//! # Design
//! A bad path id and a missing entry are the only failures the handlers
//! detect themselves. Both are answered with a plain-text message, not a JSON
//! object. A body that fails to deserialize is passed through untouched so
//! axum's own rejection status and message reach the client.

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todo_core::TodoId;

const INVALID_ID_ON_GET: &str = "id값이 잘못 입력되었습니다.";
const INVALID_ID: &str = "id값이 유효하지 않습니다.";
const NOT_FOUND_ON_GET: &str = "해당 id에 데이터가 없습니다.";

/// Failures returned by the todo route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The `{id}` path segment is not a 32-bit integer. Answered with 400.
    InvalidId(&'static str),

    /// No entry carries the requested id. Answered with 404.
    NotFound(String),

    /// The request body could not be read as a `Todo`.
    Body(JsonRejection),
}

impl ApiError {
    pub fn invalid_id_on_get() -> Self {
        ApiError::InvalidId(INVALID_ID_ON_GET)
    }

    /// Used by update and delete, which share a wording distinct from get.
    pub fn invalid_id() -> Self {
        ApiError::InvalidId(INVALID_ID)
    }

    pub fn not_found_on_get() -> Self {
        ApiError::NotFound(NOT_FOUND_ON_GET.to_string())
    }

    pub fn not_found(id: TodoId) -> Self {
        ApiError::NotFound(format!("{id} id값을 찾지 못했습니다."))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Body(rejection) => rejection.status(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidId(msg) => write!(f, "{msg}"),
            ApiError::NotFound(msg) => write!(f, "{msg}"),
            ApiError::Body(rejection) => write!(f, "{}", rejection.body_text()),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Body(rejection) => rejection.into_response(),
            other => (other.status(), other.to_string()).into_response(),
        }
    }
}
