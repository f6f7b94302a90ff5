use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::{LoginAdminRequest, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct LoginAdminRequestDto {
    #[schema(example = "admin@example.com")]
    pub email: String,

    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginAdminResponseBody {
    /// JWT access token for the admin routes
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    #[schema(example = "Bearer")]
    token_type: String,

    /// Seconds until the token expires
    #[schema(example = 3600)]
    expires_in: i64,
}

/// Admin login
///
/// Exchanges the administrator's email and password for a bearer token.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = LoginAdminRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginAdminResponseBody>)),
        (status = 400, description = "Malformed email or empty password", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (status = 503, description = "No admin account configured", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginAdminRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginAdminRequest::new(dto.email, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    info!(email = %request.email(), "Admin login attempt");

    match data.auth.login.execute(request).await {
        Ok(response) => {
            info!("Admin logged in");
            ApiResponse::success(LoginAdminResponseBody {
                access_token: response.access_token,
                token_type: response.token_type,
                expires_in: response.expires_in,
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Admin login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::AdminNotConfigured) => ApiResponse::error(
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
            "ADMIN_NOT_CONFIGURED",
            "Admin login is not available",
        ),

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
