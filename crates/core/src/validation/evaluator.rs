//! Shape checks -- pure logic over a raw JSON body.
//!
//! Runs before typed decoding so that every missing or mistyped field is
//! reported at once, instead of stopping at the first serde error.

use serde_json::{Map, Value};

use super::rules::{FieldKind, FieldRule, FieldViolation};
use crate::genre::Genre;

/// Whether required fields must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Create: every required field must be present.
    Full,
    /// Update: any subset of fields, including none.
    Partial,
}

/// Check `body` against `rules`, returning the object on success.
///
/// Keys not named by any rule are ignored here; typed decoding drops them.
pub fn check_shape<'a>(
    rules: &[FieldRule],
    body: &'a Value,
    mode: Mode,
) -> Result<&'a Map<String, Value>, Vec<FieldViolation>> {
    let Some(object) = body.as_object() else {
        return Err(vec![FieldViolation::new(
            "",
            "invalid_type",
            format!("Expected object, received {}", type_name(body)),
        )
        .expecting("object")]);
    };

    let mut violations = Vec::new();
    for rule in rules {
        match object.get(rule.name) {
            None if mode == Mode::Full && rule.required => {
                violations.push(
                    FieldViolation::new(rule.name, "required", format!("{} is required", rule.name))
                        .expecting(rule.kind.describe()),
                );
            }
            None => {}
            Some(value) => check_kind(rule, value, &mut violations),
        }
    }

    if violations.is_empty() {
        Ok(object)
    } else {
        Err(violations)
    }
}

fn check_kind(rule: &FieldRule, value: &Value, out: &mut Vec<FieldViolation>) {
    let matches = match rule.kind {
        FieldKind::Text => value.is_string(),
        FieldKind::Number => value.is_number(),
        FieldKind::GenreList => value.is_array(),
        FieldKind::Integer => match value.as_i64() {
            Some(n) if i32::try_from(n).is_err() => {
                out.push(
                    FieldViolation::new(
                        rule.name,
                        "out_of_range",
                        format!("{} is out of range", rule.name),
                    )
                    .expecting("32-bit integer"),
                );
                return;
            }
            Some(_) => true,
            None => false,
        },
    };

    if !matches {
        out.push(mistyped(rule.name, rule.kind.describe(), value));
        return;
    }

    if rule.kind == FieldKind::GenreList {
        check_genres(rule.name, value, out);
    }
}

fn check_genres(field: &str, value: &Value, out: &mut Vec<FieldViolation>) {
    let Some(items) = value.as_array() else {
        return;
    };
    for (index, item) in items.iter().enumerate() {
        let path = format!("{field}.{index}");
        match item.as_str() {
            None => out.push(mistyped(&path, "string", item)),
            Some(name) if name.parse::<Genre>().is_err() => out.push(
                FieldViolation::new(
                    path,
                    "invalid_enum_value",
                    format!("Invalid genre '{name}'"),
                )
                .expecting(Genre::options()),
            ),
            Some(_) => {}
        }
    }
}

fn mistyped(field: &str, expected: &str, value: &Value) -> FieldViolation {
    FieldViolation::new(
        field,
        "invalid_type",
        format!("Expected {expected}, received {}", type_name(value)),
    )
    .expecting(expected)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
