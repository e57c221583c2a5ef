//! HTTP API for the fenestra backend.
//!
//! Exposes the public contact and catalog endpoints together with the
//! token-protected admin surface. Route handlers stay thin: validation
//! lives in `fenestra-core`, persistence in `fenestra-db`, and this crate
//! wires the two together behind an axum router.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod notifications;
pub mod response;
pub mod routes;
pub mod state;

pub use error::{AppError, AppResult};
pub use state::AppState;
