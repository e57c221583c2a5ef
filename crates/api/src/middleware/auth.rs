//! Bearer-token extractors for handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use fenestra_core::error::CoreError;
use fenestra_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The admin identity carried by a valid `Authorization: Bearer` token.
///
/// Taking this as a handler argument makes the route require a login:
///
/// ```ignore
/// async fn my_handler(admin: AuthAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = admin.admin_id, role = %admin.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Any valid token passes, moderators included. Routes restricted to the
/// `admin` role take [`crate::middleware::rbac::RequireAdmin`] instead.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    /// Database id from `claims.sub`.
    pub admin_id: DbId,
    /// Login name carried in the token.
    pub username: String,
    /// Role name (`"admin"` or `"moderator"`).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Three failure modes, three messages: absent header, wrong scheme,
        // and a token that does not validate. Invalid and expired tokens are
        // deliberately indistinguishable to the caller.
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("Access denied. Token required"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        Ok(AuthAdmin {
            admin_id: claims.sub,
            username: claims.username,
            role: claims.role,
        })
    }
}

/// Like [`AuthAdmin`] but tolerates a missing `Authorization` header.
///
/// The register route accepts anonymous calls while the admin table is
/// empty (first-run bootstrap) and requires an admin token afterwards, so
/// it needs to distinguish "no credentials" from "bad credentials": a
/// missing header yields `Ok(None)`, while a header that is present but
/// malformed or carries an invalid token still rejects with 401.
pub struct MaybeAuthAdmin(pub Option<AuthAdmin>);

impl FromRequestParts<AppState> for MaybeAuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(MaybeAuthAdmin(None));
        }
        let admin = AuthAdmin::from_request_parts(parts, state).await?;
        Ok(MaybeAuthAdmin(Some(admin)))
    }
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}
