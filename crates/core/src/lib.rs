//! Pure domain types for the fenestra backend: the error taxonomy, id and
//! timestamp aliases, role constants, status/category vocabularies, and the
//! declarative request validation layer.
//!
//! Nothing in this crate performs I/O. Web- and database-facing code lives in
//! `fenestra-api` and `fenestra-db`.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod roles;
pub mod types;
pub mod validation;

pub use error::CoreError;
