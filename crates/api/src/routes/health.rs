use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Payload for `GET /health`.
///
/// `status` stays "ok" as long as the database answers; the version comes
/// from the crate manifest so a deployment is identifiable from outside.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// Liveness probe with a database round-trip.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = fenestra_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mounted at the root, beside `/api`, so load balancers reach it without
/// the API prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
