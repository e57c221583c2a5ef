//! Repository for the `contacts` table.

use sqlx::PgPool;

use fenestra_core::types::DbId;

use crate::models::contact::{
    Contact, ContactQuery, ContactSummary, CreateContact, StatusCount,
};

/// Column list shared across queries to avoid repetition. Excludes nothing:
/// redaction of client metadata happens at the response-mapping layer.
const COLUMNS: &str = "\
    id, name, email, phone, subject, message, status, \
    ip_address, user_agent, created_at, updated_at";

/// Provides CRUD and triage operations for contact messages.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact message, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, phone, subject, message, ip_address, user_agent)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.subject)
            .bind(&input.message)
            .bind(&input.ip_address)
            .bind(&input.user_agent)
            .fetch_one(pool)
            .await
    }

    /// Find a contact message by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List contact messages matching `params`, newest first.
    pub async fn list(pool: &PgPool, params: &ContactQuery) -> Result<Vec<Contact>, sqlx::Error> {
        let (where_clause, bind_values, bind_idx) = build_contact_filter(params);

        let query = format!(
            "SELECT {COLUMNS} FROM contacts {where_clause} \
             ORDER BY created_at DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );

        let mut q = sqlx::query_as::<_, Contact>(&query);
        for value in &bind_values {
            q = q.bind(value.as_str());
        }
        q.bind(params.limit()).bind(params.offset()).fetch_all(pool).await
    }

    /// Count contact messages matching `params` (for pagination metadata).
    pub async fn count(pool: &PgPool, params: &ContactQuery) -> Result<i64, sqlx::Error> {
        let (where_clause, bind_values, _) = build_contact_filter(params);

        let query = format!("SELECT COUNT(*)::BIGINT FROM contacts {where_clause}");

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        for value in &bind_values {
            q = q.bind(value.as_str());
        }
        q.fetch_one(pool).await
    }

    /// Set the triage status of a message.
    ///
    /// Returns `None` if no row with the given `id` exists. The caller is
    /// responsible for rejecting status values outside the vocabulary.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a contact message. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The most recent messages, for the dashboard panel.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<ContactSummary>, sqlx::Error> {
        sqlx::query_as::<_, ContactSummary>(
            "SELECT id, name, email, subject, status, created_at \
             FROM contacts ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Message counts grouped by status. Statuses with no messages are
    /// absent from the result.
    pub async fn count_by_status(pool: &PgPool) -> Result<Vec<StatusCount>, sqlx::Error> {
        sqlx::query_as::<_, StatusCount>(
            "SELECT status, COUNT(*)::BIGINT AS count \
             FROM contacts GROUP BY status ORDER BY status",
        )
        .fetch_all(pool)
        .await
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Build a WHERE clause and bind values from `ContactQuery` filters.
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The clause is
/// empty when no filters are active, or starts with `WHERE `. All bind
/// values are text.
fn build_contact_filter(params: &ContactQuery) -> (String, Vec<String>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<String> = Vec::new();

    if let Some(ref status) = params.status {
        conditions.push(format!("status = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(status.clone());
    }

    if let Some(ref search) = params.search {
        // One bind reused across the three columns.
        conditions.push(format!(
            "(name ILIKE ${bind_idx} OR email ILIKE ${bind_idx} OR subject ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
        bind_values.push(format!("%{search}%"));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}
