//! Handlers for the `/contact` resource (public submission + admin triage).

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fenestra_core::contact::VALID_STATUSES;
use fenestra_core::error::CoreError;
use fenestra_core::types::DbId;
use fenestra_core::validation::{evaluate_form, forms};
use fenestra_db::models::contact::{
    Contact, ContactQuery, ContactReceipt, ContactResponse, CreateContact,
};
use fenestra_db::repositories::ContactRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::client_info::ClientInfo;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{ApiResponse, Pagination};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Contact form fields, deserialized from the payload after validation and
/// normalization have run.
#[derive(Debug, Deserialize)]
struct ContactForm {
    name: String,
    email: String,
    #[serde(default)]
    phone: Option<String>,
    subject: String,
    message: String,
}

/// Request body for `PUT /api/contact/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/contact
///
/// Public endpoint. Validates the submission, persists it together with the
/// caller's network identity, and kicks off a best-effort notification email.
pub async fn submit_contact(
    State(state): State<AppState>,
    client: ClientInfo,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<ApiResponse<ContactReceipt>>)> {
    // 1. Validate and normalize the raw payload.
    let normalized = evaluate_form(forms::CONTACT_SUBMISSION, payload)
        .map_err(|violations| AppError::Core(CoreError::Validation(violations)))?;
    let form: ContactForm = serde_json::from_value(normalized)
        .map_err(|e| AppError::BadRequest(format!("Malformed request body: {e}")))?;

    // 2. Persist. The IP and user agent are stamped server-side; client
    //    fields of the same name are ignored.
    let input = CreateContact {
        name: form.name,
        email: form.email,
        phone: form.phone.filter(|p| !p.is_empty()),
        subject: form.subject,
        message: form.message,
        ip_address: client
            .ip_address
            .unwrap_or_else(|| "unknown".to_string()),
        user_agent: client.user_agent,
    };
    let contact = ContactRepo::create(&state.pool, &input).await?;
    tracing::info!(contact_id = contact.id, "contact message received");

    // 3. Notify the site owner without holding up the response. A delivery
    //    failure is logged and otherwise invisible to the sender.
    if let Some(mailer) = &state.mailer {
        let mailer = Arc::clone(mailer);
        let snapshot = contact.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send_contact_notification(&snapshot).await {
                tracing::warn!(contact_id = snapshot.id, error = %e, "contact notification failed");
            }
        });
    }

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Your message has been received. We will get back to you as soon as possible.",
            ContactReceipt::from(&contact),
        )),
    ))
}

/// GET /api/contact
///
/// Admin triage list with status / search filters and pagination. The
/// listing drops IP and user agent; the detail view below keeps them.
pub async fn list_contacts(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Query(params): Query<ContactQuery>,
) -> AppResult<Json<ApiResponse<Vec<ContactResponse>>>> {
    let rows = ContactRepo::list(&state.pool, &params).await?;
    let total = ContactRepo::count(&state.pool, &params).await?;

    let data: Vec<ContactResponse> = rows.into_iter().map(ContactResponse::from).collect();
    let pagination = Pagination::new(params.page(), params.limit(), total);
    Ok(Json(ApiResponse::paginated(data, pagination)))
}

/// GET /api/contact/{id}
///
/// Full record, client metadata included.
pub async fn get_contact(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<Contact>>> {
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact message",
            id,
        }))?;
    Ok(Json(ApiResponse::data(contact)))
}

/// PUT /api/contact/{id}/status
///
/// Move a message to any point of the triage lifecycle.
pub async fn update_status(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<StatusUpdate>,
) -> AppResult<Json<ApiResponse<Contact>>> {
    if !VALID_STATUSES.contains(&input.status.as_str()) {
        return Err(AppError::BadRequest("Invalid status value".into()));
    }

    let contact = ContactRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contact message",
            id,
        }))?;

    Ok(Json(ApiResponse::with_message("Status updated", contact)))
}

/// DELETE /api/contact/{id}
pub async fn delete_contact(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<ApiResponse<()>>> {
    let deleted = ContactRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Contact message",
            id,
        }));
    }
    Ok(Json(ApiResponse::message("Contact message deleted")))
}
