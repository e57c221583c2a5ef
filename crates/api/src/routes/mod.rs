pub mod admin;
pub mod contact;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /contact                  submit (public POST), triage list (admin GET)
/// /contact/{id}             get, delete (admin)
/// /contact/{id}/status      update triage status (admin PUT)
///
/// /products                 list (public GET), create (admin POST)
/// /products/categories      active category names (public GET)
/// /products/{id}            get (public), update, delete (admin)
///
/// /admin/login              login (public)
/// /admin/register           register (open for first account, then admin only)
/// /admin/profile            get, update own profile (requires auth)
/// /admin/password           change own password (requires auth)
/// /admin/dashboard          triage overview (requires auth)
/// ```
///
/// The health endpoint lives at the server root, not under `/api`; see
/// [`health::router`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/contact", contact::router())
        .nest("/products", products::router())
        .nest("/admin", admin::router())
}
