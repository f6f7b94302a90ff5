use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenProvider, ACCESS_TOKEN_TYPE, ADMIN_ROLE,
};
use crate::shared::api::ApiResponse;

/// An authenticated administrator, resolved from the bearer token on each
/// request. Handlers that take this argument are admin-only.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub subject: String,
    pub expires_at: i64,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve(req))
    }
}

fn resolve(req: &HttpRequest) -> Result<AdminSession, ActixError> {
    let Some(tokens) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() else {
        tracing::error!("Token provider is not registered as app data");
        return Err(create_api_error(ApiResponse::internal_error()));
    };

    let token = extract_token_from_header(req).ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        ))
    })?;

    let claims = tokens.verify_token(&token).map_err(|_| {
        create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))
    })?;

    if claims.token_type != ACCESS_TOKEN_TYPE {
        return Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN_TYPE",
            "Invalid token type",
        )));
    }

    if claims.role != ADMIN_ROLE {
        tracing::warn!(subject = %claims.sub, role = %claims.role, "Non-admin token on admin route");
        return Err(create_api_error(ApiResponse::forbidden(
            "ADMIN_REQUIRED",
            "Administrator access required",
        )));
    }

    Ok(AdminSession {
        subject: claims.sub,
        expires_at: claims.exp,
    })
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
