use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::contact::application::domain::ContactSubmission;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitContactResponse {
    pub submitted: bool,
}

/// Send a message through the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 201, description = "Message received", body = inline(SuccessResponse<SubmitContactResponse>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 502, description = "Content store rejected the message", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<SubmitContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let submission =
        match ContactSubmission::new(&req.name, &req.email, req.message.as_deref()) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "contact form rejected");
                return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
            }
        };

    match data.contact.submit.execute(submission).await {
        Ok(()) => ApiResponse::created(SubmitContactResponse { submitted: true }),
        Err(e) => ApiResponse::bad_gateway("CONTACT_SUBMIT_FAILED", &e.to_string()),
    }
}
