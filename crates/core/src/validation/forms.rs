//! Static rule tables, one per request form.
//!
//! Bounds here are the public API contract; the corresponding database
//! CHECK constraints are deliberately looser so the table stays the single
//! place these limits are tuned.

use crate::catalog::VALID_CATEGORIES;
use crate::roles::VALID_ROLES;

use super::rules::{FieldRules, Normalize, Rule};

const TRIM: &[Normalize] = &[Normalize::Trim];
const TRIM_LOWER: &[Normalize] = &[Normalize::Trim, Normalize::Lowercase];

/// Public contact form submission.
pub const CONTACT_SUBMISSION: &[FieldRules] = &[
    FieldRules {
        field: "name",
        normalize: TRIM,
        rules: &[Rule::Required, Rule::MinLength(2), Rule::MaxLength(100)],
    },
    FieldRules {
        field: "email",
        normalize: TRIM_LOWER,
        rules: &[Rule::Required, Rule::Email],
    },
    FieldRules {
        field: "phone",
        normalize: TRIM,
        rules: &[Rule::MaxLength(20)],
    },
    FieldRules {
        field: "subject",
        normalize: TRIM,
        rules: &[Rule::Required, Rule::MinLength(5), Rule::MaxLength(200)],
    },
    FieldRules {
        field: "message",
        normalize: TRIM,
        rules: &[Rule::Required, Rule::MinLength(10), Rule::MaxLength(1000)],
    },
];

/// Product create and full-document update.
pub const PRODUCT_PAYLOAD: &[FieldRules] = &[
    FieldRules {
        field: "name",
        normalize: TRIM,
        rules: &[Rule::Required, Rule::MinLength(3), Rule::MaxLength(100)],
    },
    FieldRules {
        field: "description",
        normalize: TRIM,
        rules: &[Rule::Required, Rule::MinLength(10), Rule::MaxLength(1000)],
    },
    FieldRules {
        field: "category",
        normalize: TRIM,
        rules: &[Rule::Required, Rule::OneOf(VALID_CATEGORIES)],
    },
    FieldRules {
        field: "price",
        normalize: &[],
        rules: &[Rule::Number, Rule::MinValue(0.0)],
    },
];

/// Admin account registration.
pub const ADMIN_REGISTRATION: &[FieldRules] = &[
    FieldRules {
        field: "username",
        normalize: TRIM,
        rules: &[Rule::Required, Rule::MinLength(3), Rule::MaxLength(50)],
    },
    FieldRules {
        field: "email",
        normalize: TRIM_LOWER,
        rules: &[Rule::Required, Rule::Email],
    },
    FieldRules {
        field: "password",
        normalize: &[],
        rules: &[Rule::Required, Rule::MinLength(6)],
    },
    FieldRules {
        field: "role",
        normalize: TRIM,
        rules: &[Rule::OneOf(VALID_ROLES)],
    },
];

/// Admin login. Either the username or the email may be supplied in
/// `username`, so only presence is checked.
pub const ADMIN_LOGIN: &[FieldRules] = &[
    FieldRules {
        field: "username",
        normalize: TRIM,
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "password",
        normalize: &[],
        rules: &[Rule::Required],
    },
];

/// Admin profile update. Every field is optional.
pub const PROFILE_UPDATE: &[FieldRules] = &[FieldRules {
    field: "email",
    normalize: TRIM_LOWER,
    rules: &[Rule::Email],
}];

/// Admin password change.
pub const PASSWORD_CHANGE: &[FieldRules] = &[
    FieldRules {
        field: "currentPassword",
        normalize: &[],
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "newPassword",
        normalize: &[],
        rules: &[Rule::Required, Rule::MinLength(6)],
    },
];
