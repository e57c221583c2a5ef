//! Repository for the `products` table.

use sqlx::PgPool;

use fenestra_core::types::DbId;

use crate::models::product::{Product, ProductInput, ProductQuery};

/// Column list shared across queries. Excludes the generated `search_tsv`
/// column, which never leaves the database.
const COLUMNS: &str = "\
    id, name, description, category, price, features, images, \
    is_active, specifications, created_at, updated_at";

/// Provides CRUD and catalog-browsing operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// A duplicate name surfaces as a database error on the
    /// `uq_products_name` constraint.
    pub async fn create(pool: &PgPool, input: &ProductInput) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, description, category, price, features, images, is_active, specifications)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.price)
            .bind(&input.features)
            .bind(&input.images)
            .bind(input.is_active)
            .bind(&input.specifications)
            .fetch_one(pool)
            .await
    }

    /// Find a product by ID, active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List products matching `params`, newest first.
    pub async fn list(pool: &PgPool, params: &ProductQuery) -> Result<Vec<Product>, sqlx::Error> {
        let (where_clause, bind_values, bind_idx) = build_product_filter(params);

        let query = format!(
            "SELECT {COLUMNS} FROM products {where_clause} \
             ORDER BY created_at DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let mut q = sqlx::query_as::<_, Product>(&query);
        for value in &bind_values {
            q = q.bind(value.as_str());
        }
        q.bind(params.limit()).bind(params.offset()).fetch_all(pool).await
    }

    /// Count products matching `params` (for pagination metadata).
    pub async fn count(pool: &PgPool, params: &ProductQuery) -> Result<i64, sqlx::Error> {
        let (where_clause, bind_values, _) = build_product_filter(params);

        let query = format!("SELECT COUNT(*)::BIGINT FROM products {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        for value in &bind_values {
            q = q.bind(value.as_str());
        }
        q.fetch_one(pool).await
    }

    /// Replace a product wholesale (full-document update).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProductInput,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                name = $2,
                description = $3,
                category = $4,
                price = $5,
                features = $6,
                images = $7,
                is_active = $8,
                specifications = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.category)
            .bind(input.price)
            .bind(&input.features)
            .bind(&input.images)
            .bind(input.is_active)
            .bind(&input.specifications)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Distinct categories that currently have at least one active product.
    pub async fn active_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT category FROM products WHERE is_active = TRUE ORDER BY category",
        )
        .fetch_all(pool)
        .await
    }

    /// Total product count, active or not (dashboard).
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM products")
            .fetch_one(pool)
            .await
    }

    /// Active product count (dashboard).
    pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM products WHERE is_active = TRUE",
        )
        .fetch_one(pool)
        .await
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Build a WHERE clause and bind values from `ProductQuery` filters.
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The active-only
/// restriction has no bind value; it is inlined as a constant condition.
fn build_product_filter(params: &ProductQuery) -> (String, Vec<String>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<String> = Vec::new();

    if params.active_only() {
        conditions.push("is_active = TRUE".to_string());
    }

    if let Some(ref category) = params.category {
        conditions.push(format!("category = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(category.clone());
    }

    if let Some(ref search) = params.search {
        conditions.push(format!(
            "search_tsv @@ plainto_tsquery('simple', ${bind_idx})"
        ));
        bind_idx += 1;
        bind_values.push(search.clone());
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}
