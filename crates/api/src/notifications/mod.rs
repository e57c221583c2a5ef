//! Outbound email notifications.
//!
//! Delivery is strictly best-effort: a contact submission succeeds whether
//! or not the notification email goes out, and failures are only logged.

pub mod mailer;

pub use mailer::{EmailConfig, Mailer};
