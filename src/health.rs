use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::shared::backend::BackendMode;
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    backend: BackendMode,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Reports which content store was selected at startup. A disabled store is
///   still ready: reads degrade to empty and writes answer 503.
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ReadinessResponse {
        status: "ok",
        backend: data.backend_mode,
    })
}
