//! Contact message entity model and DTOs.

use fenestra_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full contact row from the `contacts` table.
///
/// Carries the sender's IP address and user agent. The admin detail view
/// serializes this row as-is; listings go through [`ContactResponse`],
/// which drops the client metadata.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Listing projection for the triage table: everything except the client
/// metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Contact> for ContactResponse {
    fn from(c: Contact) -> Self {
        ContactResponse {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            subject: c.subject,
            message: c.message,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Submission receipt returned to the public sender. Echoes just enough
/// for a confirmation screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub created_at: Timestamp,
}

impl From<&Contact> for ContactReceipt {
    fn from(c: &Contact) -> Self {
        ContactReceipt {
            id: c.id,
            name: c.name.clone(),
            email: c.email.clone(),
            subject: c.subject.clone(),
            created_at: c.created_at,
        }
    }
}

/// Compact row for the dashboard's recent-messages panel.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSummary {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub status: String,
    pub created_at: Timestamp,
}

/// One row of the dashboard's per-status breakdown.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

/// DTO for inserting a new contact message. Field values are already
/// normalized and validated.
#[derive(Debug, Clone)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub ip_address: String,
    pub user_agent: Option<String>,
}

/// Filter and pagination parameters for the admin contact listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl ContactQuery {
    /// 1-based page, defaulting to the first.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size, defaulting to 10 and capped at 100.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(10).clamp(1, 100)
    }

    pub fn offset(&self) -> i64 {
        (self.page() - 1) * self.limit()
    }
}
