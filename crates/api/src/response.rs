//! Response envelope shared by every endpoint.
//!
//! Success and failure responses carry the same outer shape so clients can
//! branch on `success` alone:
//!
//! ```json
//! { "success": true, "message": "...", "data": ..., "pagination": ... }
//! { "success": false, "message": "...", "errors": [ ... ] }
//! ```
//!
//! Absent fields are omitted from the JSON rather than serialized as null.

use fenestra_core::validation::FieldViolation;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success with a payload and nothing else.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            errors: None,
            pagination: None,
        }
    }

    /// Success with both a human-readable message and a payload.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            errors: None,
            pagination: None,
        }
    }

    /// Success with a payload plus paging metadata for list endpoints.
    pub fn paginated(data: T, pagination: Pagination) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            errors: None,
            pagination: Some(pagination),
        }
    }
}

impl ApiResponse<()> {
    /// Success with only a message, for deletes and other ack-style replies.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            errors: None,
            pagination: None,
        }
    }
}

/// Paging metadata attached to list responses.
#[derive(Debug, Serialize, PartialEq)]
pub struct Pagination {
    /// 1-based page that was served.
    pub current: i64,
    /// Total number of pages at this limit.
    pub pages: i64,
    /// Total matching rows across all pages.
    pub total: i64,
}

impl Pagination {
    pub fn new(current: i64, limit: i64, total: i64) -> Self {
        let pages = if total == 0 { 0 } else { (total + limit - 1) / limit };
        Self {
            current,
            pages,
            total,
        }
    }
}
