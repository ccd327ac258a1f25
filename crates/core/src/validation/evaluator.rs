//! Rule evaluator — pure logic, no database access.

use serde_json::Value;

use super::rules::{FieldRule, FieldViolation, ViolationKind};

/// Evaluate every rule against a single record, collecting all violations.
///
/// A record that is not a JSON object is treated as having no fields.
pub fn evaluate_record(rules: &[FieldRule], record: &Value) -> Vec<FieldViolation> {
    let fields = record.as_object();
    let mut violations = Vec::new();

    for rule in rules {
        let value = fields.and_then(|map| map.get(rule.field));
        evaluate_field(rule, value, &mut violations);
    }

    violations
}

/// Evaluate one rule against one field value, appending any violations.
pub fn evaluate_field(rule: &FieldRule, value: Option<&Value>, out: &mut Vec<FieldViolation>) {
    let violation = |kind| FieldViolation {
        field: rule.field,
        kind,
    };

    let value = match value {
        None | Some(Value::Null) => {
            if rule.required {
                out.push(violation(ViolationKind::Required));
            }
            return;
        }
        Some(Value::String(s)) if s.is_empty() && rule.required => {
            out.push(violation(ViolationKind::Required));
            return;
        }
        Some(v) => v,
    };

    if !rule.field_type.matches(value) {
        out.push(violation(ViolationKind::WrongType(rule.field_type)));
    }

    match value {
        Value::String(s) => {
            if let Some(max) = rule.max_length {
                if s.chars().count() > max {
                    out.push(violation(ViolationKind::TooLong { max }));
                }
            }
            if let Some(allowed) = rule.allowed {
                if !allowed.contains(&s.as_str()) {
                    out.push(violation(ViolationKind::NotAllowed { allowed }));
                }
            }
        }
        Value::Number(n) => {
            let Some(num) = n.as_f64() else { return };
            if let Some(min) = rule.min {
                if num < min {
                    out.push(violation(ViolationKind::BelowMin(min)));
                }
            }
            if let Some(max) = rule.max {
                if num > max {
                    out.push(violation(ViolationKind::AboveMax(max)));
                }
            }
        }
        _ => {}
    }
}
