//! Contact message status constants.
//!
//! These must match the CHECK constraint on the `contacts.status` column.

/// Submitted and not yet looked at by anyone.
pub const STATUS_NEW: &str = "new";

/// An admin has opened the message.
pub const STATUS_READ: &str = "read";

/// The sender has been answered.
pub const STATUS_REPLIED: &str = "replied";

/// Triage is finished; no further action planned.
pub const STATUS_CLOSED: &str = "closed";

/// All valid contact status values, in lifecycle order. Any transition
/// between them is allowed.
pub const VALID_STATUSES: &[&str] = &[STATUS_NEW, STATUS_READ, STATUS_REPLIED, STATUS_CLOSED];
