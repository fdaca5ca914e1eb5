//! Response envelope and API errors.
//!
//! Every `/api` endpoint answers with the same JSON envelope:
//!
//! ```json
//! {
//!   "success": true,
//!   "data": { "id": "flight-1", "...": "..." }
//! }
//! ```
//!
//! Failures carry `success: false` and an `error` string, and server-side
//! failures add the underlying text under `message`. Bodies are pretty-printed.

use std::any::Any;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;

/// Error text used for every 500 response.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// The uniform response wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// A successful response with a message and no data.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>, message: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            message,
            error: Some(error.into()),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        PrettyJson(self).into_response()
    }
}

/// JSON response serialized with indentation.
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(bytes) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                bytes,
            )
                .into_response(),
            Err(e) => {
                error!(error = %e, "Failed to serialize response body");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("text/plain; charset=utf-8"),
                    )],
                    INTERNAL_ERROR,
                )
                    .into_response()
            }
        }
    }
}

/// Errors a request handler can end with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The id path segment was absent or blank.
    #[error("Missing {0} ID")]
    MissingId(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("No weather data available")]
    NoWeatherData,

    /// The query string could not be read.
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The body could not be decoded into the expected shape.
    ///
    /// Reported as a server error, like any other failure while handling
    /// the request.
    #[error("{0}")]
    MalformedBody(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingId(_) | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::NoWeatherData => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::DuplicateId { .. }) => StatusCode::CONFLICT,
            ApiError::MalformedBody(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = if status.is_server_error() {
            warn!(status = status.as_u16(), error = %self, "Request failed");
            ApiResponse::<()>::failure(INTERNAL_ERROR, Some(self.to_string()))
        } else {
            ApiResponse::<()>::failure(self.to_string(), None)
        };
        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

/// JSON request body whose decoding failures turn into [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Query string extractor answering failures with the standard envelope.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct QueryParams<T>(pub T);

/// Turn a panic inside a handler into the standard 500 envelope.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };
    error!(panic = %detail, "Handler panicked");
    ApiError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingId("flight").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("Flight").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::NoWeatherData.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InvalidQuery("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Store(StoreError::DuplicateId {
                noun: "Gate",
                id: "gate-1".to_string()
            })
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::MalformedBody("bad".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ApiError::MissingId("staff").to_string(), "Missing staff ID");
        assert_eq!(
            ApiError::NotFound("Staff member").to_string(),
            "Staff member not found"
        );
        assert_eq!(
            ApiError::Store(StoreError::DuplicateId {
                noun: "Gate",
                id: "gate-1".to_string()
            })
            .to_string(),
            "Gate with id gate-1 already exists"
        );
    }

    #[test]
    fn test_envelope_omits_unset_fields() {
        let value = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(value, json!({ "success": true, "data": [1, 2] }));

        let value = serde_json::to_value(ApiResponse::<()>::message("Flight deleted")).unwrap();
        assert_eq!(value, json!({ "success": true, "message": "Flight deleted" }));

        let value: Value =
            serde_json::to_value(ApiResponse::<()>::failure("Gate not found", None)).unwrap();
        assert_eq!(value, json!({ "success": false, "error": "Gate not found" }));
    }

    #[test]
    fn test_panic_response_is_internal_error() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
