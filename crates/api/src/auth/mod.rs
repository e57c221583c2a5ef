//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- HS256 token generation and validation for admin sessions.

pub mod jwt;
pub mod password;
