//! Field rule and violation types, plus the fixed business rule set.

use std::fmt;

use serde_json::Value;

/// Allowed values for a business `type`, in the order they are reported.
pub const BUSINESS_TYPES: &[&str] = &["retail", "commercial", "service"];

/// Rules every candidate business record must satisfy.
pub const BUSINESS_RULES: &[FieldRule] = &[
    FieldRule::text("name").max_length(255),
    FieldRule::text("category").max_length(100),
    FieldRule::text("type").one_of(BUSINESS_TYPES),
    FieldRule::text("city").max_length(100),
    FieldRule::number("rating").range(0.0, 5.0),
    FieldRule::number("latitude").range(-90.0, 90.0),
    FieldRule::number("longitude").range(-180.0, 180.0),
];

/// The JSON kind a field is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
        }
    }

    /// Whether `value` has this run-time kind.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
        }
    }
}

/// Declarative constraints for a single field.
///
/// Constraints that do not apply to the value's run-time kind are skipped:
/// `max_length` and `allowed` only look at strings, `min` and `max` only at
/// numbers. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub max_length: Option<usize>,
    pub allowed: Option<&'static [&'static str]>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldRule {
    /// A required text field with no further constraints.
    pub const fn text(field: &'static str) -> Self {
        Self::new(field, FieldType::String)
    }

    /// A required numeric field with no further constraints.
    pub const fn number(field: &'static str) -> Self {
        Self::new(field, FieldType::Number)
    }

    const fn new(field: &'static str, field_type: FieldType) -> Self {
        Self {
            field,
            field_type,
            required: true,
            max_length: None,
            allowed: None,
            min: None,
            max: None,
        }
    }

    pub const fn optional(self) -> Self {
        let mut rule = self;
        rule.required = false;
        rule
    }

    pub const fn max_length(self, max: usize) -> Self {
        let mut rule = self;
        rule.max_length = Some(max);
        rule
    }

    pub const fn one_of(self, allowed: &'static [&'static str]) -> Self {
        let mut rule = self;
        rule.allowed = Some(allowed);
        rule
    }

    pub const fn range(self, min: f64, max: f64) -> Self {
        let mut rule = self;
        rule.min = Some(min);
        rule.max = Some(max);
        rule
    }
}

/// What went wrong with a field.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    Required,
    WrongType(FieldType),
    TooLong { max: usize },
    NotAllowed { allowed: &'static [&'static str] },
    BelowMin(f64),
    AboveMax(f64),
}

/// A single rule failure on one field of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: ViolationKind,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field;
        match &self.kind {
            ViolationKind::Required => write!(f, "{field} is required"),
            ViolationKind::WrongType(expected) => {
                write!(f, "{field} must be {}", expected.as_str())
            }
            ViolationKind::TooLong { max } => write!(f, "{field} too long (max {max})"),
            ViolationKind::NotAllowed { allowed } => {
                write!(f, "{field} must be one of: {}", allowed.join(", "))
            }
            ViolationKind::BelowMin(min) => write!(f, "{field} must be >= {min}"),
            ViolationKind::AboveMax(max) => write!(f, "{field} must be <= {max}"),
        }
    }
}
