// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Envelope shared by every JSON route: `{ success, data?, error? }`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        Self::with_status(StatusCode::OK, data)
    }

    pub fn created(data: T) -> HttpResponse {
        Self::with_status(StatusCode::CREATED, data)
    }

    /// Used by fire-and-forget endpoints: the work was scheduled, not awaited.
    pub fn accepted(data: T) -> HttpResponse {
        Self::with_status(StatusCode::ACCEPTED, data)
    }

    fn with_status(status: StatusCode, data: T) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    pub fn payload_too_large(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::PAYLOAD_TOO_LARGE, code, message)
    }

    /// The content store call went out and came back with a failure.
    pub fn bad_gateway(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_GATEWAY, code, message)
    }

    /// The content store is not configured, so writes cannot be served.
    pub fn backend_disabled() -> HttpResponse {
        Self::error(
            StatusCode::SERVICE_UNAVAILABLE,
            "BACKEND_DISABLED",
            "Content store is not configured",
        )
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
