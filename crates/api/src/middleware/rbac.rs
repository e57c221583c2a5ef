//! Role gate on top of the auth extractor.
//!
//! [`RequireAdmin`] nests [`AuthAdmin`], so taking it as a handler argument
//! both authenticates the request and pins the role: a moderator token gets
//! a 403 before the handler body ever runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use fenestra_core::error::CoreError;
use fenestra_core::roles::ROLE_ADMIN;

use super::auth::AuthAdmin;
use crate::error::AppError;
use crate::state::AppState;

/// Admin-role gate; anything else is 403 Forbidden.
///
/// ```ignore
/// async fn delete_things(RequireAdmin(admin): RequireAdmin) -> AppResult<StatusCode> {
///     // admin.role is "admin", checked
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
pub struct RequireAdmin(pub AuthAdmin);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = AuthAdmin::from_request_parts(parts, state).await?;
        if admin.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required for this action".into(),
            )));
        }
        Ok(RequireAdmin(admin))
    }
}
