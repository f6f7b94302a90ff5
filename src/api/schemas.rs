// src/api/schemas.rs
//! Documentation-only mirrors of the `ApiResponse` envelope so handlers can
//! reference concrete success and error bodies in their `#[utoipa::path]`s.
use serde::Serialize;
use utoipa::ToSchema;

/// `{ "success": true, "data": ... }`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{ "success": false, "error": { "code", "message" } }`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable upper-snake-case code, e.g. `PROJECT_NOT_FOUND` or `BACKEND_DISABLED`.
    #[schema(example = "PROJECT_NOT_FOUND")]
    pub code: String,

    #[schema(example = "No project with that slug")]
    pub message: String,
}
