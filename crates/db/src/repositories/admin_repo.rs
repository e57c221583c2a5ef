//! Repository for the `admins` table.

use sqlx::PgPool;

use fenestra_core::types::DbId;

use crate::models::admin::{Admin, CreateAdmin};

/// One column list, spliced into every query.
const COLUMNS: &str = "\
    id, username, email, password_hash, role, is_active, \
    last_login_at, created_at, updated_at";

/// Account operations for admins.
pub struct AdminRepo;

impl AdminRepo {
    /// Insert a new admin account and return the stored row.
    ///
    /// Duplicate usernames or emails surface as database errors on the
    /// `uq_admins_username` / `uq_admins_email` constraints.
    pub async fn create(pool: &PgPool, input: &CreateAdmin) -> Result<Admin, sqlx::Error> {
        let query = format!(
            "INSERT INTO admins (username, email, password_hash, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admin>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Look up an admin by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE id = $1");
        sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active admin whose username or email equals `identifier`.
    ///
    /// Inactive accounts are invisible here so login treats them exactly
    /// like unknown accounts.
    pub async fn find_active_by_identifier(
        pool: &PgPool,
        identifier: &str,
    ) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM admins \
             WHERE (username = $1 OR email = $1) AND is_active = TRUE"
        );
        sqlx::query_as::<_, Admin>(&query)
            .bind(identifier)
            .fetch_optional(pool)
            .await
    }

    /// Total number of admin accounts, active or not.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*)::BIGINT FROM admins")
            .fetch_one(pool)
            .await
    }

    /// Stamp a successful login and return the refreshed row.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<Admin, sqlx::Error> {
        let query =
            format!("UPDATE admins SET last_login_at = now() WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Change an admin's email address.
    ///
    /// Yields `None` when `id` matches no row.
    pub async fn update_email(
        pool: &PgPool,
        id: DbId,
        email: &str,
    ) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("UPDATE admins SET email = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Replace an admin's password hash. Returns `true` if a row was updated.
    pub async fn update_password_hash(
        pool: &PgPool,
        id: DbId,
        password_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE admins SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
