//! HTTP request handlers, grouped by resource.

pub mod admin;
pub mod contact;
pub mod dashboard;
pub mod products;
