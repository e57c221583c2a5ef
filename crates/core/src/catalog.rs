//! Product category constants.
//!
//! These must match the CHECK constraint on the `products.category` column.

pub const CATEGORY_WINDOW: &str = "window";
pub const CATEGORY_DOOR: &str = "door";
pub const CATEGORY_FACADE: &str = "facade";
pub const CATEGORY_SHUTTER: &str = "shutter";
pub const CATEGORY_OTHER: &str = "other";

/// All valid product category values.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_WINDOW,
    CATEGORY_DOOR,
    CATEGORY_FACADE,
    CATEGORY_SHUTTER,
    CATEGORY_OTHER,
];
