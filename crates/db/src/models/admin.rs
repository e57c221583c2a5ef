//! Admin account entity model and DTOs.

use fenestra_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full admin row from the `admins` table.
///
/// Carries the Argon2 password hash, so it must stay server-side.
/// Convert to [`AdminResponse`] before handing data to clients.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Client-facing view of an admin, with the hash stripped.
///
/// The login timestamp serializes as `lastLogin`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub last_login: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<Admin> for AdminResponse {
    fn from(a: Admin) -> Self {
        AdminResponse {
            id: a.id,
            username: a.username,
            email: a.email,
            role: a.role,
            is_active: a.is_active,
            last_login: a.last_login_at,
            created_at: a.created_at,
        }
    }
}

/// Insert payload for a new admin account. The password arrives pre-hashed.
#[derive(Debug, Clone)]
pub struct CreateAdmin {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
