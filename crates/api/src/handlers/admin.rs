//! Handlers for the `/admin` resource (login, registration, profile, password).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use fenestra_core::error::CoreError;
use fenestra_core::roles::ROLE_ADMIN;
use fenestra_core::types::{DbId, Timestamp};
use fenestra_core::validation::{evaluate_form, forms};
use fenestra_db::models::admin::{Admin, AdminResponse, CreateAdmin};
use fenestra_db::repositories::AdminRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthAdmin, MaybeAuthAdmin};
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Login body after validation. `username` may also carry an email address.
#[derive(Debug, Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

/// Registration body after validation.
#[derive(Debug, Deserialize)]
struct RegisterForm {
    username: String,
    email: String,
    password: String,
    #[serde(default)]
    role: Option<String>,
}

/// Profile update body after validation.
#[derive(Debug, Deserialize)]
struct ProfileForm {
    #[serde(default)]
    email: Option<String>,
}

/// Password change body after validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordForm {
    current_password: String,
    new_password: String,
}

/// Successful login payload: the bearer token plus the account it belongs to.
#[derive(Debug, Serialize)]
pub struct LoginData {
    pub token: String,
    pub user: LoginUser,
}

/// The slice of the account echoed back on login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub last_login: Option<Timestamp>,
}

impl From<Admin> for LoginUser {
    fn from(a: Admin) -> Self {
        LoginUser {
            id: a.id,
            username: a.username,
            email: a.email,
            role: a.role,
            last_login: a.last_login_at,
        }
    }
}

/// The slice of the account echoed back on registration.
#[derive(Debug, Serialize)]
pub struct RegisteredAdmin {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/admin/login
///
/// Authenticate with username or email plus password. Unknown, inactive,
/// and wrong-password accounts all fail with the same message so the
/// endpoint does not leak which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<ApiResponse<LoginData>>> {
    // 1. Validate the payload shape.
    let normalized = evaluate_form(forms::ADMIN_LOGIN, payload)
        .map_err(|violations| AppError::Core(CoreError::Validation(violations)))?;
    let form: LoginForm = serde_json::from_value(normalized)
        .map_err(|e| AppError::BadRequest(format!("Malformed request body: {e}")))?;

    // 2. Look up an active account. Inactive accounts are filtered out in
    //    the query, so they are indistinguishable from unknown ones.
    let admin = AdminRepo::find_active_by_identifier(&state.pool, &form.username)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            ))
        })?;

    // 3. Verify the password.
    let password_valid = verify_password(&form.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    }

    // 4. Stamp the login and issue a token.
    let admin = AdminRepo::record_login(&state.pool, admin.id).await?;
    let token = generate_token(admin.id, &admin.username, &admin.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(admin_id = admin.id, username = %admin.username, "admin logged in");
    Ok(Json(ApiResponse::with_message(
        "Login successful",
        LoginData {
            token,
            user: admin.into(),
        },
    )))
}

/// POST /api/admin/register
///
/// Create an admin account. While the admin table is empty the endpoint is
/// open, so the very first account can be created on a fresh install.
/// Afterwards it requires a token with the `admin` role; moderators cannot
/// create accounts.
pub async fn register(
    State(state): State<AppState>,
    MaybeAuthAdmin(caller): MaybeAuthAdmin,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<ApiResponse<RegisteredAdmin>>)> {
    // 1. Gate on the caller before looking at the payload.
    let existing = AdminRepo::count(&state.pool).await?;
    if existing > 0 {
        match &caller {
            Some(admin) if admin.role == ROLE_ADMIN => {}
            Some(_) => {
                return Err(AppError::Core(CoreError::Forbidden(
                    "Admin role required for this action".into(),
                )))
            }
            None => {
                return Err(AppError::Core(CoreError::Unauthorized(
                    "Access denied. Token required".into(),
                )))
            }
        }
    }

    // 2. Validate the payload.
    let normalized = evaluate_form(forms::ADMIN_REGISTRATION, payload)
        .map_err(|violations| AppError::Core(CoreError::Validation(violations)))?;
    let form: RegisterForm = serde_json::from_value(normalized)
        .map_err(|e| AppError::BadRequest(format!("Malformed request body: {e}")))?;

    // 3. Hash the password and insert. Duplicate username or email surfaces
    //    as a unique violation and maps to 400.
    let password_hash = hash_password(&form.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let input = CreateAdmin {
        username: form.username,
        email: form.email,
        password_hash,
        role: form.role.unwrap_or_else(|| ROLE_ADMIN.to_string()),
    };
    let admin = AdminRepo::create(&state.pool, &input).await?;

    tracing::info!(admin_id = admin.id, username = %admin.username, "admin account created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Admin account created",
            RegisteredAdmin {
                id: admin.id,
                username: admin.username,
                email: admin.email,
                role: admin.role,
            },
        )),
    ))
}

/// GET /api/admin/profile
pub async fn get_profile(
    State(state): State<AppState>,
    admin: AuthAdmin,
) -> AppResult<Json<ApiResponse<AdminResponse>>> {
    let row = AdminRepo::find_by_id(&state.pool, admin.admin_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Admin",
            id: admin.admin_id,
        }))?;
    Ok(Json(ApiResponse::data(row.into())))
}

/// PUT /api/admin/profile
///
/// Currently only the email address can be changed. An absent or empty
/// email leaves the profile untouched and just echoes it back.
pub async fn update_profile(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<ApiResponse<AdminResponse>>> {
    let normalized = evaluate_form(forms::PROFILE_UPDATE, payload)
        .map_err(|violations| AppError::Core(CoreError::Validation(violations)))?;
    let form: ProfileForm = serde_json::from_value(normalized)
        .map_err(|e| AppError::BadRequest(format!("Malformed request body: {e}")))?;

    let row = match form.email.filter(|email| !email.is_empty()) {
        Some(email) => AdminRepo::update_email(&state.pool, admin.admin_id, &email).await?,
        None => AdminRepo::find_by_id(&state.pool, admin.admin_id).await?,
    }
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Admin",
        id: admin.admin_id,
    }))?;

    Ok(Json(ApiResponse::with_message("Profile updated", row.into())))
}

/// PUT /api/admin/password
///
/// Requires the current password before accepting the new one.
pub async fn change_password(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<ApiResponse<()>>> {
    let normalized = evaluate_form(forms::PASSWORD_CHANGE, payload)
        .map_err(|violations| AppError::Core(CoreError::Validation(violations)))?;
    let form: PasswordForm = serde_json::from_value(normalized)
        .map_err(|e| AppError::BadRequest(format!("Malformed request body: {e}")))?;

    let row = AdminRepo::find_by_id(&state.pool, admin.admin_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Admin",
            id: admin.admin_id,
        }))?;

    let current_valid = verify_password(&form.current_password, &row.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !current_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Current password is incorrect".into(),
        )));
    }

    let new_hash = hash_password(&form.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    AdminRepo::update_password_hash(&state.pool, admin.admin_id, &new_hash).await?;

    tracing::info!(admin_id = admin.admin_id, "admin password changed");
    Ok(Json(ApiResponse::message("Password updated successfully")))
}
