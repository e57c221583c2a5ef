//! Well-known admin role constants.
//!
//! These must match the CHECK constraint on the `admins.role` column.

/// Full access, including admin account management.
pub const ROLE_ADMIN: &str = "admin";

/// Triage and catalog access without account management.
pub const ROLE_MODERATOR: &str = "moderator";

/// All valid role values.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MODERATOR];
