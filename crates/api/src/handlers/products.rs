//! Handlers for the `/products` resource (public catalog + admin management).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fenestra_core::error::CoreError;
use fenestra_core::types::DbId;
use fenestra_core::validation::{evaluate_form, forms};
use fenestra_db::models::product::{Product, ProductInput, ProductQuery};
use fenestra_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{ApiResponse, Pagination};
use crate::state::AppState;

/// Run the shared payload validation and deserialize into [`ProductInput`].
///
/// Create and update accept the same full-document body, so they share this
/// front half.
fn parse_product_payload(payload: serde_json::Value) -> AppResult<ProductInput> {
    let normalized = evaluate_form(forms::PRODUCT_PAYLOAD, payload)
        .map_err(|violations| AppError::Core(CoreError::Validation(violations)))?;
    serde_json::from_value(normalized)
        .map_err(|e| AppError::BadRequest(format!("Malformed request body: {e}")))
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/products
///
/// Public catalog listing. Hides inactive products unless the caller asks
/// for them with `?active=false`.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ProductQuery>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let rows = ProductRepo::list(&state.pool, &params).await?;
    let total = ProductRepo::count(&state.pool, &params).await?;

    let pagination = Pagination::new(params.page(), params.limit(), total);
    Ok(Json(ApiResponse::paginated(rows, pagination)))
}

/// GET /api/products/categories
///
/// Distinct categories that currently have at least one active product.
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<String>>>> {
    let categories = ProductRepo::active_categories(&state.pool).await?;
    Ok(Json(ApiResponse::data(categories)))
}

/// GET /api/products/{id}
///
/// Single product by id, active or not. Deactivation hides a product from
/// the listing without breaking direct links.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;
    Ok(Json(ApiResponse::data(product)))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let input = parse_product_payload(payload)?;
    let product = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(product_id = product.id, name = %product.name, "product created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Product created successfully",
            product,
        )),
    ))
}

/// PUT /api/products/{id}
///
/// Full-document replace. Optional fields omitted from the payload reset to
/// their defaults rather than keeping their old values.
pub async fn update_product(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let input = parse_product_payload(payload)?;
    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    Ok(Json(ApiResponse::with_message(
        "Product updated successfully",
        product,
    )))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }
    Ok(Json(ApiResponse::message("Product deleted successfully")))
}
