use crate::{FieldViolation, ValidationErrors, ViolationKind};

use std::str::FromStr;

use serde_json::{Map, Value};

/// Field-by-field checker over an untyped JSON request body.
///
/// Each accessor records a violation instead of returning early, so a
/// single pass reports every offending field. `null` counts as absent.
pub struct BodyValidator<'a> {
    body: Option<&'a Map<String, Value>>,
    violations: Vec<FieldViolation>,
}

impl<'a> BodyValidator<'a> {
    pub fn new(body: &'a Value) -> Self {
        let mut violations = Vec::new();
        let body = match body {
            Value::Object(map) => Some(map),
            _ => {
                violations.push(FieldViolation::new("body", ViolationKind::NotAnObject));
                None
            }
        };

        Self { body, violations }
    }

    fn present(&self, field: &str) -> Option<&'a Value> {
        self.body
            .and_then(|map| map.get(field))
            .filter(|value| !value.is_null())
    }

    fn reject(&mut self, field: &str, kind: ViolationKind) {
        self.violations.push(FieldViolation::new(field, kind));
    }

    fn string_value(&mut self, field: &str, value: &Value, max_length: usize) -> Option<String> {
        let Some(s) = value.as_str() else {
            self.reject(field, ViolationKind::NotAString);
            return None;
        };

        if s.chars().count() > max_length {
            self.reject(field, ViolationKind::TooLong { max: max_length });
            return None;
        }

        Some(s.to_string())
    }

    /// Required string; empty strings are accepted
    pub fn required_string(&mut self, field: &str, max_length: usize) -> Option<String> {
        match self.present(field) {
            Some(value) => self.string_value(field, value, max_length),
            None => {
                if self.body.is_some() {
                    self.reject(field, ViolationKind::Missing);
                }
                None
            }
        }
    }

    /// Required string that must contain at least one character
    pub fn required_non_empty_string(&mut self, field: &str, max_length: usize) -> Option<String> {
        let value = self.required_string(field, max_length)?;
        if value.is_empty() {
            self.reject(field, ViolationKind::Empty);
            return None;
        }
        Some(value)
    }

    pub fn optional_string(&mut self, field: &str, max_length: usize) -> Option<String> {
        let value = self.present(field)?;
        self.string_value(field, value, max_length)
    }

    /// Required string that must parse as one of `allowed`
    pub fn required_enum<T: FromStr>(&mut self, field: &str, allowed: &[&str]) -> Option<T> {
        let Some(value) = self.present(field) else {
            if self.body.is_some() {
                self.reject(field, ViolationKind::Missing);
            }
            return None;
        };

        let Some(s) = value.as_str() else {
            self.reject(field, ViolationKind::NotAString);
            return None;
        };

        let parsed = s.parse::<T>().ok();
        if parsed.is_none() {
            self.reject(
                field,
                ViolationKind::NotOneOf {
                    allowed: allowed.iter().map(|s| s.to_string()).collect(),
                },
            );
        }
        parsed
    }

    /// Optional JSON object with unconstrained values
    pub fn optional_object(
        &mut self,
        field: &str,
        max_entries: usize,
    ) -> Option<Map<String, Value>> {
        let value = self.present(field)?;

        let Some(map) = value.as_object() else {
            self.reject(field, ViolationKind::NotAnObject);
            return None;
        };

        if map.len() > max_entries {
            self.reject(field, ViolationKind::TooManyEntries { max: max_entries });
            return None;
        }

        Some(map.clone())
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_errors(self) -> ValidationErrors {
        ValidationErrors::new(self.violations)
    }
}
