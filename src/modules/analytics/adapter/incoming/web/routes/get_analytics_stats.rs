use actix_web::{get, web, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::analytics::application::domain::AnalyticsStats;
use crate::modules::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Dashboard counters
#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    tag = "admin",
    responses(
        (status = 200, description = "Event counts", body = inline(SuccessResponse<AnalyticsStats>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/analytics")]
pub async fn get_analytics_stats_handler(
    _admin: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.analytics.stats.execute().await)
}
