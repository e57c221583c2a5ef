//! Route definitions for the `/contact` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST   /              -> submit_contact (public)
/// GET    /              -> list_contacts (admin)
/// GET    /{id}          -> get_contact (admin)
/// PUT    /{id}/status   -> update_status (admin)
/// DELETE /{id}          -> delete_contact (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(contact::list_contacts).post(contact::submit_contact),
        )
        .route(
            "/{id}",
            get(contact::get_contact).delete(contact::delete_contact),
        )
        .route("/{id}/status", put(contact::update_status))
}
