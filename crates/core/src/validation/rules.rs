//! Validation rule and result types.

use serde::Serialize;

/// Normalization applied to a string field before any rule runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalize {
    /// Strip leading and trailing whitespace.
    Trim,
    /// Lowercase the whole value (used for email addresses).
    Lowercase,
}

/// A single rule applied to one field of a request payload.
///
/// Every rule except [`Rule::Required`] passes when the field is absent or
/// null; optional fields simply omit the `Required` entry.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Field must be present, non-null, and (for strings) non-empty.
    Required,
    /// String length lower bound, counted in characters.
    MinLength(usize),
    /// String length upper bound, counted in characters.
    MaxLength(usize),
    /// Value must look like an email address.
    Email,
    /// Value must be one of the listed strings.
    OneOf(&'static [&'static str]),
    /// Value must be a JSON number.
    Number,
    /// Numeric lower bound (inclusive).
    MinValue(f64),
}

/// The rules and normalization steps for one payload field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    pub normalize: &'static [Normalize],
    pub rules: &'static [Rule],
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
    pub message: String,
}
