//! Product entity model and DTOs.

use fenestra_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full product row from the `products` table.
///
/// `images` is an ordered JSON array of `{url, alt}` objects and
/// `specifications` a JSON object with free-form spec-sheet entries
/// (material, dimensions, weight, warranty). Both are stored and served
/// as given; the validation layer only covers the scalar fields.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Option<f64>,
    pub features: Vec<String>,
    pub images: serde_json::Value,
    pub is_active: bool,
    pub specifications: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a product or replacing one wholesale (PUT semantics:
/// omitted optional fields reset to their defaults).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "empty_array")]
    pub images: serde_json::Value,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default = "empty_object")]
    pub specifications: serde_json::Value,
}

fn default_is_active() -> bool {
    true
}

fn empty_array() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

/// Filter and pagination parameters for the public product listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    pub search: Option<String>,
    /// Any value other than the literal string "false" keeps the default
    /// active-only view; "false" includes inactive products.
    pub active: Option<String>,
}

impl ProductQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size, defaulting to 12 and capped at 100.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(12).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }

    /// Whether the listing is restricted to active products.
    pub fn active_only(&self) -> bool {
        self.active.as_deref() != Some("false")
    }
}
