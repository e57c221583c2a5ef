//! Integration tests for admin authentication, registration, profile, and
//! password management.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth, put_json_auth, seed_admin, token_for};
use serde_json::json;
use sqlx::PgPool;

/// Log in through the HTTP endpoint and return the bearer token.
async fn login_token(pool: &PgPool, identifier: &str, password: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/login",
        json!({ "username": identifier, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["data"]["token"].as_str().expect("token").to_string()
}

// ---------------------------------------------------------------------------
// Test: login succeeds with username, returns token and account data
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    seed_admin(&pool, "yonetici", "boss@example.com", "super-secret", "admin").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/admin/login",
        json!({ "username": "yonetici", "password": "super-secret" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Login successful");
    assert!(json["data"]["token"].is_string());

    let user = &json["data"]["user"];
    assert!(user["id"].is_number());
    assert_eq!(user["username"], "yonetici");
    assert_eq!(user["email"], "boss@example.com");
    assert_eq!(user["role"], "admin");
    // Login stamps the timestamp before answering.
    assert!(user["lastLogin"].is_string());
    // The hash must never appear in a response.
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("password_hash").is_none());
}

// ---------------------------------------------------------------------------
// Test: the email address works as the login identifier too
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_with_email_identifier(pool: PgPool) {
    seed_admin(&pool, "yonetici", "boss@example.com", "super-secret", "admin").await;
    let token = login_token(&pool, "boss@example.com", "super-secret").await;
    assert!(!token.is_empty());
}

// ---------------------------------------------------------------------------
// Test: wrong password, unknown account, and inactive account are
// indistinguishable
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_failures_share_one_message(pool: PgPool) {
    let admin = seed_admin(&pool, "yonetici", "boss@example.com", "super-secret", "admin").await;
    sqlx::query("UPDATE admins SET is_active = FALSE WHERE id = $1")
        .bind(admin.id)
        .execute(&pool)
        .await
        .unwrap();
    seed_admin(&pool, "active", "active@example.com", "super-secret", "admin").await;

    let attempts = [
        ("active", "wrong-password"),   // wrong password
        ("nobody", "super-secret"),     // unknown account
        ("yonetici", "super-secret"),   // deactivated account, right password
    ];

    for (identifier, password) in attempts {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/admin/login",
            json!({ "username": identifier, "password": password }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid username or password");
    }
}

// ---------------------------------------------------------------------------
// Test: login payload is validated before any lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_requires_both_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/admin/login", json!({ "username": "solo" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(json["errors"][0]["field"], "password");
    assert_eq!(json["errors"][0]["rule"], "required");
}

// ---------------------------------------------------------------------------
// Test: first registration is open, later anonymous calls are not
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_bootstrap_then_locks(pool: PgPool) {
    // Empty table: anonymous registration creates the first admin.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/register",
        json!({
            "username": "founder",
            "email": "Founder@Example.COM",
            "password": "first-password"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Admin account created");
    assert!(json["data"]["id"].is_number());
    assert_eq!(json["data"]["username"], "founder");
    // Email is normalized on the way in; role defaults to admin.
    assert_eq!(json["data"]["email"], "founder@example.com");
    assert_eq!(json["data"]["role"], "admin");
    // Registration answers with the identity alone.
    assert!(json["data"].get("createdAt").is_none());
    assert!(json["data"].get("lastLogin").is_none());

    // Now that an account exists, anonymous registration is rejected.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/register",
        json!({
            "username": "intruder",
            "email": "intruder@example.com",
            "password": "some-password"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Access denied. Token required");

    // The bootstrap account can log in.
    login_token(&pool, "founder", "first-password").await;
}

// ---------------------------------------------------------------------------
// Test: moderators cannot create accounts, admins can
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_requires_admin_role(pool: PgPool) {
    let boss = seed_admin(&pool, "boss", "boss@example.com", "super-secret", "admin").await;
    let helper =
        seed_admin(&pool, "helper", "helper@example.com", "super-secret", "moderator").await;

    let body = json!({
        "username": "recruit",
        "email": "recruit@example.com",
        "password": "recruit-password",
        "role": "moderator"
    });

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/admin/register", &token_for(&helper), body.clone()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Admin role required for this action");

    let app = common::build_test_app(pool);
    let response = post_json_auth(app, "/api/admin/register", &token_for(&boss), body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "moderator");
}

// ---------------------------------------------------------------------------
// Test: duplicate registration and weak passwords are rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_rejects_duplicates_and_weak_passwords(pool: PgPool) {
    let boss = seed_admin(&pool, "boss", "boss@example.com", "super-secret", "admin").await;
    let token = token_for(&boss);

    // Same email as the existing account.
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/admin/register",
        &token,
        json!({
            "username": "boss2",
            "email": "boss@example.com",
            "password": "valid-password"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "This username or email is already registered");

    // Password below the minimum length.
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/admin/register",
        &token,
        json!({
            "username": "weakling",
            "email": "weak@example.com",
            "password": "tiny"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["field"], "password");
    assert_eq!(json["errors"][0]["rule"], "min_length");
}

// ---------------------------------------------------------------------------
// Test: profile read and update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_profile_get_and_update(pool: PgPool) {
    let admin = seed_admin(&pool, "owner", "owner@example.com", "super-secret", "admin").await;
    let token = token_for(&admin);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/admin/profile", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "owner");
    assert_eq!(json["data"]["email"], "owner@example.com");
    // Seeded directly, so the account has never logged in.
    assert!(json["data"]["lastLogin"].is_null());

    // Change the email; normalization lowercases it first.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/admin/profile",
        &token,
        json!({ "email": "  Owner@NewDomain.COM " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Profile updated");
    assert_eq!(json["data"]["email"], "owner@newdomain.com");

    // An empty body is a no-op that echoes the profile back.
    let app = common::build_test_app(pool);
    let response = put_json_auth(app, "/api/admin/profile", &token, json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "owner@newdomain.com");
}

// ---------------------------------------------------------------------------
// Test: the profile email must stay unique
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_profile_update_rejects_taken_email(pool: PgPool) {
    seed_admin(&pool, "first", "first@example.com", "super-secret", "admin").await;
    let second = seed_admin(&pool, "second", "second@example.com", "super-secret", "admin").await;

    let app = common::build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/admin/profile",
        &token_for(&second),
        json!({ "email": "first@example.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "This username or email is already registered");
}

// ---------------------------------------------------------------------------
// Test: password change verifies the current password first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_password_change_flow(pool: PgPool) {
    seed_admin(&pool, "rotator", "rotator@example.com", "old-password", "admin").await;
    let token = login_token(&pool, "rotator", "old-password").await;

    // Wrong current password.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/admin/password",
        &token,
        json!({ "currentPassword": "not-it", "newPassword": "next-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Current password is incorrect");

    // Correct current password.
    let app = common::build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/admin/password",
        &token,
        json!({ "currentPassword": "old-password", "newPassword": "next-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Password updated successfully");

    // The old password no longer works; the new one does.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/login",
        json!({ "username": "rotator", "password": "old-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    login_token(&pool, "rotator", "next-password").await;
}

// ---------------------------------------------------------------------------
// Test: malformed credentials on protected routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_route_token_failures(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/admin/profile", "garbage-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Invalid or expired token");

    // A token signed with a different secret is just as invalid.
    let foreign = fenestra_api::auth::jwt::generate_token(
        1,
        "outsider",
        "admin",
        &fenestra_api::auth::jwt::JwtConfig {
            secret: "a-different-secret-entirely".to_string(),
            expiry_hours: 24,
        },
    )
    .unwrap();
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/admin/profile", &foreign).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
