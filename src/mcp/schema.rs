//! Minimal JSON Schema validation for tool arguments.
//!
//! Covers exactly the subset the tool schemas use: object `properties`,
//! `required`, `type` (string/boolean/array), `minLength`, `enum`, and
//! array `items`. Every violation is collected; nothing short-circuits,
//! so a caller sees all offending fields at once.

use serde_json::Value;

/// One violated field, as a path plus a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub path: String,
    pub message: String,
}

impl SchemaViolation {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// Validate `args` against an object schema, returning every violation.
pub fn validate_args(schema: &Value, args: &Value) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();

    let args_obj = match args.as_object() {
        Some(map) => map,
        None => {
            violations.push(SchemaViolation::new("arguments", "must be an object"));
            return violations;
        }
    };

    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for field in required.iter().filter_map(Value::as_str) {
            if !args_obj.contains_key(field) {
                violations.push(SchemaViolation::new(field, "is required"));
            }
        }
    }

    let properties = match schema.get("properties").and_then(Value::as_object) {
        Some(props) => props,
        None => return violations,
    };

    for (field, value) in args_obj {
        // Unknown fields are ignored, matching the permissive tool surface.
        if let Some(prop) = properties.get(field) {
            check_value(field, prop, value, &mut violations);
        }
    }
    violations
}

fn check_value(path: &str, prop: &Value, value: &Value, out: &mut Vec<SchemaViolation>) {
    match prop.get("type").and_then(Value::as_str) {
        Some("string") => {
            let s = match value.as_str() {
                Some(s) => s,
                None => {
                    out.push(SchemaViolation::new(path, "must be a string"));
                    return;
                }
            };
            let min_len = prop.get("minLength").and_then(Value::as_u64).unwrap_or(0);
            if (s.len() as u64) < min_len {
                out.push(SchemaViolation::new(path, "must not be empty"));
            }
            check_enum(path, prop, value, out);
        }
        Some("boolean") => {
            if !value.is_boolean() {
                out.push(SchemaViolation::new(path, "must be a boolean"));
            }
        }
        Some("array") => {
            let items = match value.as_array() {
                Some(items) => items,
                None => {
                    out.push(SchemaViolation::new(path, "must be an array"));
                    return;
                }
            };
            if let Some(item_schema) = prop.get("items") {
                for (i, item) in items.iter().enumerate() {
                    check_value(&format!("{}[{}]", path, i), item_schema, item, out);
                }
            }
        }
        _ => check_enum(path, prop, value, out),
    }
}

fn check_enum(path: &str, prop: &Value, value: &Value, out: &mut Vec<SchemaViolation>) {
    let allowed = match prop.get("enum").and_then(Value::as_array) {
        Some(allowed) => allowed,
        None => return,
    };
    if !allowed.contains(value) {
        let names: Vec<&str> = allowed.iter().filter_map(Value::as_str).collect();
        out.push(SchemaViolation::new(
            path,
            format!("must be one of: {}", names.join(", ")),
        ));
    }
}

/// Render violations as the error text returned to the caller: one
/// `- <path>: <message>` line per violation.
pub fn format_violations(tool_name: &str, violations: &[SchemaViolation]) -> String {
    let lines: Vec<String> = violations
        .iter()
        .map(|v| format!("- {}: {}", v.path, v.message))
        .collect();
    format!("Invalid arguments for {}:\n{}", tool_name, lines.join("\n"))
}
