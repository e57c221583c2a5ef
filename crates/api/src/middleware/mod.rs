//! Request extractors for authentication, authorization, and client metadata.
//!
//! - [`auth::AuthAdmin`] -- Extracts the authenticated admin from a JWT Bearer token.
//! - [`auth::MaybeAuthAdmin`] -- Optional variant for the bootstrap-aware register route.
//! - [`rbac::RequireAdmin`] -- [`auth::AuthAdmin`] plus an `admin`-role check.
//! - [`client_info::ClientInfo`] -- Best-effort capture of the caller's IP and user agent.

pub mod auth;
pub mod client_info;
pub mod rbac;
