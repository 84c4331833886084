//! # V1 API Response Envelope & Error Contract
//!
//! Canonical wire format for all v1 responses. Every endpoint returns an
//! [`ApiResponse<T>`] envelope with three optional top-level fields:
//!
//! ```json
//! {
//!   "data": { ... },       // present on success, absent on error
//!   "meta": { "total": 42 },  // optional list metadata
//!   "error": { "code": "not_found", "message": "..." }  // present on error
//! }
//! ```
//!
//! Entry IDs are nanoids (21 characters). Dates on the wire are ISO 8601
//! (`YYYY-MM-DD` for entry dates, RFC 3339 for timestamps).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::VitalogError;

/// Machine-readable error code included in every error response.
///
/// Serialized as a snake_case string on the wire (e.g. `"invalid_request"`).
/// Each variant maps to a fixed HTTP status code via [`ErrorCode::status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request was malformed, had invalid parameters, or failed validation.
    /// HTTP 400.
    InvalidRequest,
    /// Authentication is required or the provided credentials are invalid.
    /// HTTP 401.
    Unauthorized,
    /// The requested resource does not exist. HTTP 404.
    NotFound,
    /// An unexpected server-side error occurred. Internal details are never
    /// leaked to the client. HTTP 500.
    InternalError,
    /// A required upstream service (the LLM provider) is not configured or
    /// not reachable. HTTP 503.
    ServiceUnavailable,
}

impl ErrorCode {
    /// Returns the HTTP status code corresponding to this error code.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::NotFound => write!(f, "not_found"),
            Self::InternalError => write!(f, "internal_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
        }
    }
}

/// Structured error payload within the API envelope.
///
/// ```json
/// { "code": "not_found", "message": "Entry abc123 not found" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiError {
    /// Machine-readable error classification.
    pub code: ErrorCode,
    /// Human-readable description safe to display to end users.
    /// Internal implementation details are never included.
    pub message: String,
}

/// List metadata included in collection responses.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResponseMeta {
    /// Total number of items returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Canonical v1 API response envelope.
///
/// Every v1 endpoint returns this shape. On success, `data` is present and
/// `error` is absent. On error, `error` is present and `data` is absent.
///
/// The HTTP status code is derived from the error code (on error) or
/// from the explicit status set via constructors like [`ApiResponse::created`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// The response payload. Present on success, absent on error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// List metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
    /// Error details. Present on error, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    /// HTTP status to use in the response. Not serialized on the wire.
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success response with data (HTTP 200).
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            meta: None,
            error: None,
            status: StatusCode::OK,
        }
    }

    /// Success response with data and list metadata (HTTP 200).
    pub fn success_with_meta(data: T, meta: ResponseMeta) -> Self {
        Self {
            data: Some(data),
            meta: Some(meta),
            error: None,
            status: StatusCode::OK,
        }
    }

    /// Resource created response (HTTP 201).
    pub fn created(data: T) -> Self {
        Self {
            data: Some(data),
            meta: None,
            error: None,
            status: StatusCode::CREATED,
        }
    }

    /// Error response. HTTP status is derived from the [`ErrorCode`].
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        let status = code.status();
        Self {
            data: None,
            meta: None,
            error: Some(ApiError {
                code,
                message: message.into(),
            }),
            status,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        match serde_json::to_value(&self) {
            Ok(body) => (status, Json(body)).into_response(),
            Err(_) => {
                let body = serde_json::json!({
                    "error": {
                        "code": "internal_error",
                        "message": "An internal error occurred"
                    }
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl<T: Serialize> From<VitalogError> for ApiResponse<T> {
    /// Convert a [`VitalogError`] into a v1 [`ApiResponse`].
    ///
    /// Internal error details are **never** leaked to the client. For
    /// `internal_error` responses, a generic message is returned and the
    /// real error is logged via `tracing::error!`.
    fn from(err: VitalogError) -> Self {
        match err {
            VitalogError::NotFound(ref msg) => {
                ApiResponse::error(ErrorCode::NotFound, msg.clone())
            }

            VitalogError::Validation(ref msg) => {
                ApiResponse::error(ErrorCode::InvalidRequest, msg.clone())
            }

            VitalogError::Json(ref e) => {
                ApiResponse::error(ErrorCode::InvalidRequest, format!("Invalid JSON: {e}"))
            }

            VitalogError::LlmRateLimit { retry_after } => {
                let msg = match retry_after {
                    Some(secs) => format!("Rate limit exceeded, retry after {secs} seconds"),
                    None => "Rate limit exceeded".to_string(),
                };
                ApiResponse::error(ErrorCode::InvalidRequest, msg)
            }

            VitalogError::LlmUnavailable(ref msg) => {
                ApiResponse::error(ErrorCode::ServiceUnavailable, msg.clone())
            }

            ref internal @ (VitalogError::Database(_)
            | VitalogError::Http(_)
            | VitalogError::Io(_)
            | VitalogError::Internal(_)
            | VitalogError::Llm(_)) => {
                tracing::error!(error = %internal, "Internal error mapped to v1 response");
                ApiResponse::error(ErrorCode::InternalError, "An internal error occurred")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_serializes_without_error() {
        let resp = ApiResponse::success("hello");
        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json["data"], "hello");
        assert!(json.get("error").is_none());
        assert!(json.get("meta").is_none());
    }

    #[test]
    fn error_response_serializes_without_data() {
        let resp = ApiResponse::<()>::error(ErrorCode::NotFound, "gone");
        let json = serde_json::to_value(&resp).expect("serialize");
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["code"], "not_found");
        assert_eq!(json["error"]["message"], "gone");
    }

    #[test]
    fn success_with_meta_serializes_all_fields() {
        let meta = ResponseMeta { total: Some(42) };
        let resp = ApiResponse::success_with_meta(vec![1, 2, 3], meta);
        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["meta"]["total"], 42);
    }

    #[test]
    fn error_code_status_mapping() {
        assert_eq!(ErrorCode::InvalidRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::InternalError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::ServiceUnavailable.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn error_code_serializes_snake_case() {
        let json = serde_json::to_value(&ErrorCode::InvalidRequest).expect("serialize");
        assert_eq!(json, "invalid_request");

        let json = serde_json::to_value(&ErrorCode::ServiceUnavailable).expect("serialize");
        assert_eq!(json, "service_unavailable");
    }

    #[test]
    fn created_response_has_201_status() {
        let resp = ApiResponse::created("new-resource");
        assert_eq!(resp.status, StatusCode::CREATED);
    }

    #[test]
    fn vitalog_error_not_found_maps_correctly() {
        let resp: ApiResponse<()> = VitalogError::NotFound("gone".into()).into();
        assert_eq!(
            resp.error.as_ref().expect("error").code,
            ErrorCode::NotFound
        );
    }

    #[test]
    fn vitalog_error_internal_does_not_leak() {
        let resp: ApiResponse<()> = VitalogError::Internal("secret debug info".into()).into();
        let err = resp.error.as_ref().expect("error");
        assert_eq!(err.code, ErrorCode::InternalError);
        assert_eq!(err.message, "An internal error occurred");
    }

    #[test]
    fn vitalog_error_unavailable_maps_to_service_unavailable() {
        let resp: ApiResponse<()> = VitalogError::LlmUnavailable("no LLM".into()).into();
        assert_eq!(
            resp.error.as_ref().expect("error").code,
            ErrorCode::ServiceUnavailable
        );
    }
}
