//! Route definitions for the `/admin` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{admin, dashboard};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// POST /login      -> login (public)
/// POST /register   -> register (open while no admin exists, then admin only)
/// GET  /profile    -> get_profile (requires auth)
/// PUT  /profile    -> update_profile (requires auth)
/// PUT  /password   -> change_password (requires auth)
/// GET  /dashboard  -> overview (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/register", post(admin::register))
        .route(
            "/profile",
            get(admin::get_profile).put(admin::update_profile),
        )
        .route("/password", put(admin::change_password))
        .route("/dashboard", get(dashboard::overview))
}
