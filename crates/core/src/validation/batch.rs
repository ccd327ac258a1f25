//! Batch validation: split a candidate array into accepted records and
//! per-record error messages.

use serde::Serialize;
use serde_json::Value;

use super::evaluator::evaluate_record;
use super::rules::{FieldRule, BUSINESS_RULES};
use crate::error::CoreError;

/// Result of validating a batch of candidate records.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    /// Records that passed every rule, in input order.
    pub valid_businesses: Vec<Value>,
    /// One `"Business <n>: ..."` entry per rejected record, `n` 1-based.
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    pub fn rejected_count(&self) -> usize {
        self.errors.len()
    }
}

/// Validate candidate business records against [`BUSINESS_RULES`].
pub fn validate_businesses(input: Value) -> Result<ValidationOutcome, CoreError> {
    validate_batch(BUSINESS_RULES, input)
}

/// Validate a JSON array of records against `rules`.
///
/// Fails with [`CoreError::InputShape`] if `input` is not an array. Otherwise
/// every record is checked and the call always completes.
pub fn validate_batch(rules: &[FieldRule], input: Value) -> Result<ValidationOutcome, CoreError> {
    let records = match input {
        Value::Array(records) => records,
        other => {
            return Err(CoreError::InputShape {
                found: json_kind(&other),
            })
        }
    };

    let mut outcome = ValidationOutcome {
        valid_businesses: Vec::with_capacity(records.len()),
        errors: Vec::new(),
    };

    for (index, record) in records.into_iter().enumerate() {
        let violations = evaluate_record(rules, &record);
        if violations.is_empty() {
            outcome.valid_businesses.push(record);
        } else {
            let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
            outcome
                .errors
                .push(format!("Business {}: {}", index + 1, reasons.join(", ")));
        }
    }

    Ok(outcome)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
