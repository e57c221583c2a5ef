//! Integration tests for the product repository: uniqueness, the active-only
//! default view, category filtering, full-text search, and full-document
//! updates.

use sqlx::PgPool;

use fenestra_core::catalog;
use fenestra_db::models::product::{ProductInput, ProductQuery};
use fenestra_db::repositories::ProductRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_product(name: &str, category: &str) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        description: format!("{name} with double glazing and a thermal break."),
        category: category.to_string(),
        price: Some(1250.0),
        features: vec!["double glazing".to_string()],
        images: serde_json::json!([{"url": "/img/default.jpg", "alt": name}]),
        is_active: true,
        specifications: serde_json::json!({"material": "aluminium"}),
    }
}

fn category_filter(category: &str) -> ProductQuery {
    ProductQuery {
        category: Some(category.to_string()),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Test: creation and uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_create_returns_row(pool: PgPool) {
    let product = ProductRepo::create(&pool, &new_product("Sliding Window", catalog::CATEGORY_WINDOW))
        .await
        .unwrap();

    assert_eq!(product.name, "Sliding Window");
    assert!(product.is_active);
    assert_eq!(product.price, Some(1250.0));
    assert_eq!(product.features, vec!["double glazing".to_string()]);
    assert_eq!(product.images[0]["url"], "/img/default.jpg");
    assert_eq!(product.specifications["material"], "aluminium");
}

#[sqlx::test]
async fn test_duplicate_name_hits_unique_constraint(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("Panorama Facade", catalog::CATEGORY_FACADE))
        .await
        .unwrap();

    let err = ProductRepo::create(&pool, &new_product("Panorama Facade", catalog::CATEGORY_FACADE))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_products_name"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Test: listing views
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_default_view_hides_inactive(pool: PgPool) {
    for i in 1..=3 {
        ProductRepo::create(&pool, &new_product(&format!("Window {i}"), catalog::CATEGORY_WINDOW))
            .await
            .unwrap();
    }
    let mut retired = new_product("Window Retired", catalog::CATEGORY_WINDOW);
    retired.is_active = false;
    ProductRepo::create(&pool, &retired).await.unwrap();

    let visible = ProductRepo::list(&pool, &category_filter(catalog::CATEGORY_WINDOW))
        .await
        .unwrap();
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|p| p.is_active));

    let total = ProductRepo::count(&pool, &category_filter(catalog::CATEGORY_WINDOW))
        .await
        .unwrap();
    assert_eq!(total, 3);

    // active=false opens up the full view.
    let all_query = ProductQuery {
        category: Some(catalog::CATEGORY_WINDOW.to_string()),
        active: Some("false".to_string()),
        ..Default::default()
    };
    assert_eq!(ProductRepo::list(&pool, &all_query).await.unwrap().len(), 4);
}

#[sqlx::test]
async fn test_full_text_search_matches_name_and_description(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("Panorama Facade", catalog::CATEGORY_FACADE))
        .await
        .unwrap();
    let mut shutter = new_product("Roller Shutter", catalog::CATEGORY_SHUTTER);
    shutter.description = "Motorized aluminium shutter with remote control.".to_string();
    ProductRepo::create(&pool, &shutter).await.unwrap();

    let by_name = ProductQuery {
        search: Some("panorama".to_string()),
        ..Default::default()
    };
    let matched = ProductRepo::list(&pool, &by_name).await.unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Panorama Facade");

    let by_description = ProductQuery {
        search: Some("motorized aluminium".to_string()),
        ..Default::default()
    };
    let matched = ProductRepo::list(&pool, &by_description).await.unwrap();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].name, "Roller Shutter");

    let no_hit = ProductQuery {
        search: Some("greenhouse".to_string()),
        ..Default::default()
    };
    assert!(ProductRepo::list(&pool, &no_hit).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: full-document update
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_update_replaces_whole_document(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Hinged Door", catalog::CATEGORY_DOOR))
        .await
        .unwrap();

    let replacement = ProductInput {
        name: "Hinged Door v2".to_string(),
        description: "Reinforced hinged door with triple lock.".to_string(),
        category: catalog::CATEGORY_DOOR.to_string(),
        price: None,
        features: Vec::new(),
        images: serde_json::json!([]),
        is_active: false,
        specifications: serde_json::json!({}),
    };
    let updated = ProductRepo::update(&pool, created.id, &replacement)
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.name, "Hinged Door v2");
    // PUT semantics: fields omitted from the payload reset, not persist.
    assert_eq!(updated.price, None);
    assert!(updated.features.is_empty());
    assert_eq!(updated.images, serde_json::json!([]));
    assert_eq!(updated.specifications, serde_json::json!({}));
    assert!(!updated.is_active);

    let missing = ProductRepo::update(&pool, 999_999, &replacement).await.unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: categories and dashboard counts
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_active_categories_are_distinct_and_sorted(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("Window A", catalog::CATEGORY_WINDOW))
        .await
        .unwrap();
    ProductRepo::create(&pool, &new_product("Window B", catalog::CATEGORY_WINDOW))
        .await
        .unwrap();
    ProductRepo::create(&pool, &new_product("Door A", catalog::CATEGORY_DOOR))
        .await
        .unwrap();
    let mut hidden = new_product("Shutter A", catalog::CATEGORY_SHUTTER);
    hidden.is_active = false;
    ProductRepo::create(&pool, &hidden).await.unwrap();

    let categories = ProductRepo::active_categories(&pool).await.unwrap();
    assert_eq!(categories, vec!["door".to_string(), "window".to_string()]);
}

#[sqlx::test]
async fn test_dashboard_counts(pool: PgPool) {
    ProductRepo::create(&pool, &new_product("Window A", catalog::CATEGORY_WINDOW))
        .await
        .unwrap();
    let mut hidden = new_product("Window B", catalog::CATEGORY_WINDOW);
    hidden.is_active = false;
    ProductRepo::create(&pool, &hidden).await.unwrap();

    assert_eq!(ProductRepo::count_all(&pool).await.unwrap(), 2);
    assert_eq!(ProductRepo::count_active(&pool).await.unwrap(), 1);

    let delete_target = ProductRepo::list(&pool, &ProductQuery::default())
        .await
        .unwrap()
        .pop()
        .unwrap();
    assert!(ProductRepo::delete(&pool, delete_target.id).await.unwrap());
    assert!(!ProductRepo::delete(&pool, delete_target.id).await.unwrap());
}
