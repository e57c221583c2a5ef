//! Route definitions for the `/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /             -> list_products (public)
/// POST   /             -> create_product (admin)
/// GET    /categories   -> list_categories (public)
/// GET    /{id}         -> get_product (public)
/// PUT    /{id}         -> update_product (admin)
/// DELETE /{id}         -> delete_product (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_products).post(products::create_product),
        )
        .route("/categories", get(products::list_categories))
        .route(
            "/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
}
