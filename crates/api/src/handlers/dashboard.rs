//! Handler for the admin dashboard aggregate.

use axum::extract::State;
use axum::Json;
use fenestra_core::contact::STATUS_NEW;
use fenestra_db::models::contact::{ContactQuery, ContactSummary, StatusCount};
use fenestra_db::repositories::{ContactRepo, ProductRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Number of most-recent contact messages included in the overview.
const RECENT_CONTACTS: i64 = 5;

/// Aggregate payload for `GET /api/admin/dashboard`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_contacts: Vec<ContactSummary>,
    pub contact_stats: Vec<StatusCount>,
}

/// Headline counters shown at the top of the dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_contacts: i64,
    pub new_contacts: i64,
    pub total_products: i64,
    pub active_products: i64,
}

/// GET /api/admin/dashboard
///
/// Everything is computed on request; the sub-queries run concurrently and
/// share no snapshot, so counts and listings may skew momentarily under
/// concurrent writes.
pub async fn overview(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<ApiResponse<DashboardData>>> {
    let all = ContactQuery::default();
    let new_only = ContactQuery {
        status: Some(STATUS_NEW.to_string()),
        ..ContactQuery::default()
    };

    let (total_contacts, new_contacts, total_products, active_products, recent_contacts, contact_stats) =
        tokio::try_join!(
            ContactRepo::count(&state.pool, &all),
            ContactRepo::count(&state.pool, &new_only),
            ProductRepo::count_all(&state.pool),
            ProductRepo::count_active(&state.pool),
            ContactRepo::recent(&state.pool, RECENT_CONTACTS),
            ContactRepo::count_by_status(&state.pool),
        )?;

    Ok(Json(ApiResponse::data(DashboardData {
        stats: DashboardStats {
            total_contacts,
            new_contacts,
            total_products,
            active_products,
        },
        recent_contacts,
        contact_stats,
    })))
}
