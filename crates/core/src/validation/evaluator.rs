//! Form evaluator -- pure logic, no database or framework types.

use serde_json::{Map, Value};
use validator::ValidateEmail;

use super::rules::{FieldRules, FieldViolation, Normalize, Rule};

/// Normalize `payload` in place, then evaluate every rule of every field.
///
/// Returns the normalized payload when everything passes, or the full list
/// of violations in table order. A payload that is not a JSON object fails
/// every `Required` rule.
pub fn evaluate_form(form: &[FieldRules], mut payload: Value) -> Result<Value, Vec<FieldViolation>> {
    if let Some(map) = payload.as_object_mut() {
        for field in form {
            normalize_field(map, field);
        }
    }

    let empty = Map::new();
    let map = payload.as_object().unwrap_or(&empty);

    let mut violations = Vec::new();
    for field in form {
        let value = map.get(field.field);
        for rule in field.rules {
            if let Some(violation) = evaluate_rule(field.field, rule, value) {
                violations.push(violation);
            }
        }
    }

    if violations.is_empty() {
        Ok(payload)
    } else {
        Err(violations)
    }
}

fn normalize_field(map: &mut Map<String, Value>, field: &FieldRules) {
    if let Some(Value::String(s)) = map.get_mut(field.field) {
        for step in field.normalize {
            match step {
                Normalize::Trim => *s = s.trim().to_string(),
                Normalize::Lowercase => *s = s.to_lowercase(),
            }
        }
    }
}

fn evaluate_rule(field: &str, rule: &Rule, value: Option<&Value>) -> Option<FieldViolation> {
    match rule {
        Rule::Required => evaluate_required(field, value),
        Rule::MinLength(min) => evaluate_min_length(field, *min, value),
        Rule::MaxLength(max) => evaluate_max_length(field, *max, value),
        Rule::Email => evaluate_email(field, value),
        Rule::OneOf(allowed) => evaluate_one_of(field, allowed, value),
        Rule::Number => evaluate_number(field, value),
        Rule::MinValue(min) => evaluate_min_value(field, *min, value),
    }
}

fn violation(field: &str, rule: &str, message: String) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        rule: rule.to_string(),
        message,
    }
}

fn evaluate_required(field: &str, value: Option<&Value>) -> Option<FieldViolation> {
    match value {
        None | Some(Value::Null) => Some(violation(
            field,
            "required",
            format!("{field} is required"),
        )),
        Some(Value::String(s)) if s.is_empty() => Some(violation(
            field,
            "required",
            format!("{field} is required"),
        )),
        _ => None,
    }
}

fn evaluate_min_length(field: &str, min: usize, value: Option<&Value>) -> Option<FieldViolation> {
    let s = value.and_then(|v| v.as_str())?;
    // Empty strings are reported by the `required` rule alone, so a field
    // that is both required and length-bounded yields one violation, not two.
    if !s.is_empty() && s.chars().count() < min {
        Some(violation(
            field,
            "min_length",
            format!("{field} must be at least {min} characters"),
        ))
    } else {
        None
    }
}

fn evaluate_max_length(field: &str, max: usize, value: Option<&Value>) -> Option<FieldViolation> {
    let s = value.and_then(|v| v.as_str())?;
    if s.chars().count() > max {
        Some(violation(
            field,
            "max_length",
            format!("{field} must be at most {max} characters"),
        ))
    } else {
        None
    }
}

fn evaluate_email(field: &str, value: Option<&Value>) -> Option<FieldViolation> {
    let s = value.and_then(|v| v.as_str())?;
    if s.is_empty() || s.validate_email() {
        None
    } else {
        Some(violation(
            field,
            "email",
            format!("{field} must be a valid email address"),
        ))
    }
}

fn evaluate_one_of(
    field: &str,
    allowed: &[&str],
    value: Option<&Value>,
) -> Option<FieldViolation> {
    let value = match value {
        Some(v) if !v.is_null() => v,
        _ => return None,
    };
    match value.as_str() {
        Some(s) if allowed.contains(&s) => None,
        _ => Some(violation(
            field,
            "one_of",
            format!("{field} must be one of: {}", allowed.join(", ")),
        )),
    }
}

fn evaluate_number(field: &str, value: Option<&Value>) -> Option<FieldViolation> {
    let value = match value {
        Some(v) if !v.is_null() => v,
        _ => return None,
    };
    if value.is_number() {
        None
    } else {
        Some(violation(
            field,
            "number",
            format!("{field} must be a number"),
        ))
    }
}

fn evaluate_min_value(field: &str, min: f64, value: Option<&Value>) -> Option<FieldViolation> {
    let num = value.and_then(|v| v.as_f64())?;
    if num < min {
        Some(violation(
            field,
            "min_value",
            format!("{field} must be at least {min}"),
        ))
    } else {
        None
    }
}
