use std::fmt;

use serde::Serialize;

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    Missing,
    NotAString,
    Empty,
    NotAnObject,
    NotOneOf { allowed: Vec<String> },
    TooLong { max: usize },
    TooManyEntries { max: usize },
}

impl ViolationKind {
    /// Machine-readable reason code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::NotAString => "not_a_string",
            Self::Empty => "empty",
            Self::NotAnObject => "not_an_object",
            Self::NotOneOf { .. } => "not_one_of",
            Self::TooLong { .. } => "too_long",
            Self::TooManyEntries { .. } => "too_many_entries",
        }
    }
}

/// A rejected request field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    pub fn message(&self) -> String {
        let field = &self.field;
        match &self.kind {
            ViolationKind::Missing => format!("{field} is required"),
            ViolationKind::NotAString => format!("{field} must be a string"),
            ViolationKind::Empty => format!("{field} should not be empty"),
            ViolationKind::NotAnObject => format!("{field} must be an object"),
            ViolationKind::NotOneOf { allowed } => {
                format!("{field} must be one of: {}", allowed.join(", "))
            }
            ViolationKind::TooLong { max } => {
                format!("{field} must not exceed {max} characters")
            }
            ViolationKind::TooManyEntries { max } => {
                format!("{field} must not contain more than {max} entries")
            }
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Serialized form of a violation in error responses
#[derive(Debug, Serialize)]
pub struct FieldViolationBody {
    pub field: String,
    pub reason: &'static str,
    pub message: String,
}

impl From<&FieldViolation> for FieldViolationBody {
    fn from(v: &FieldViolation) -> Self {
        Self {
            field: v.field.clone(),
            reason: v.kind.code(),
            message: v.message(),
        }
    }
}

/// Every violation found in one request body, in field order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn first_field(&self) -> Option<&str> {
        self.violations.first().map(|v| v.field.as_str())
    }

    pub fn has_violation(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    pub fn details(&self) -> Vec<FieldViolationBody> {
        self.violations.iter().map(FieldViolationBody::from).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.violations.iter().map(|v| v.message()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
