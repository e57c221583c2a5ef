use crate::types::DbId;
use crate::validation::FieldViolation;

/// Domain error taxonomy shared by every layer above the database.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// One or more request fields failed validation. Carries every
    /// violation so clients can fix the whole form in one round trip.
    #[error("Validation failed")]
    Validation(Vec<FieldViolation>),

    /// A uniqueness constraint was hit. The message is safe to show to
    /// the caller.
    #[error("{0}")]
    Duplicate(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
