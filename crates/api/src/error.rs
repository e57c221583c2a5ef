use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fenestra_core::error::CoreError;
use fenestra_core::validation::FieldViolation;
use serde_json::json;

/// Error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain failures and adds the HTTP-side cases.
/// [`IntoResponse`] turns every value into the uniform envelope
/// `{"success": false, "message": ..., "errors": [...]}` -- `errors` only
/// appears on validation failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain failure surfaced from `fenestra_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Anything sqlx reports; classified into a response by
    /// [`classify_sqlx_error`].
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Client sent something unusable, with a message it can show.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Server-side failure; the message is logged, never sent.
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, violations) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"), None)
                }
                CoreError::Validation(errors) => (
                    StatusCode::BAD_REQUEST,
                    "Validation failed".to_string(),
                    Some(errors.clone()),
                ),
                CoreError::Duplicate(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone(), None),
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone(), None),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Core-layer internal error");
                    server_error()
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Unhandled internal error");
                server_error()
            }
        };

        let mut body = json!({
            "success": false,
            "message": message,
        });
        if let Some(errors) = violations {
            body["errors"] = json!(errors);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Map a sqlx error onto a status, client message, and optional violations.
///
/// `RowNotFound` is a 404. Unique violations (Postgres code 23505 on a
/// constraint named `uq_*`) become 400s with a message a client form can
/// show verbatim. Everything else is a sanitized 500; the real error goes
/// to the log only.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String, Option<Vec<FieldViolation>>) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "Resource not found".to_string(),
            None,
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                (
                    StatusCode::BAD_REQUEST,
                    duplicate_message(constraint).to_string(),
                    None,
                )
            } else {
                tracing::error!(error = %db_err, "Unique violation on unrecognized constraint");
                server_error()
            }
        }
        other => {
            tracing::error!(error = %other, "Unclassified database error");
            server_error()
        }
    }
}

/// Client-facing text for a named unique constraint.
fn duplicate_message(constraint: &str) -> &'static str {
    match constraint {
        "uq_products_name" => "A product with this name already exists",
        "uq_admins_username" | "uq_admins_email" => "This username or email is already registered",
        _ => "Duplicate value",
    }
}

fn server_error() -> (StatusCode, String, Option<Vec<FieldViolation>>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Server error".to_string(),
        None,
    )
}
