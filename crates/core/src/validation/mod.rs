//! Declarative request validation.
//!
//! Each request form is described by a static table of [`FieldRules`]; the
//! pure-logic [`evaluate_form`] pass normalizes the payload and collects
//! every rule violation without touching the database.

pub mod evaluator;
pub mod forms;
pub mod rules;

pub use evaluator::evaluate_form;
pub use rules::{FieldRules, FieldViolation, Normalize, Rule};
