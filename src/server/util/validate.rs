//! Field validation for incoming request payloads.
//!
//! `Validator` accumulates every field error of a payload rather than stopping at the
//! first one. Parameter models call it from their `from_dto` constructors and finish
//! with `Validator::finish()`, which yields a `ValidationError` listing all failures.

use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::validation::{FieldError, ValidationError};

/// Letters, at most two inner space/apostrophe/hyphen separators, optional trailing period.
static PERSON_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{L}+([ '\-]\p{L}+){0,2}\.?$").expect("person name pattern is valid")
});

pub struct Validator {
    object_name: &'static str,
    errors: Vec<FieldError>,
}

impl Validator {
    /// Creates a validator for the payload object with the given wire name.
    pub fn new(object_name: &'static str) -> Self {
        Self {
            object_name,
            errors: Vec::new(),
        }
    }

    /// Records a field error.
    pub fn reject(&mut self, field: &str, value: Option<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            object_name: self.object_name.to_string(),
            field_name: field.to_string(),
            field_value: value,
            error_message: message.into(),
        });
    }

    /// Validates required text of `1..=max_len` characters.
    ///
    /// Missing, null and blank values are rejected. Returns the value unchanged, or an
    /// empty string when it was rejected as missing.
    pub fn text(&mut self, field: &str, value: Option<String>, max_len: usize) -> String {
        match value {
            None => {
                self.reject(field, None, "must not be null");
                String::new()
            }
            Some(value) if value.trim().is_empty() => {
                self.reject(field, Some(value.clone()), "must not be blank");
                value
            }
            Some(value) if value.chars().count() > max_len => {
                self.reject(
                    field,
                    Some(value.clone()),
                    format!("size must be between 1 and {}", max_len),
                );
                value
            }
            Some(value) => value,
        }
    }

    /// Validates a person's first or last name.
    ///
    /// Applies the `text` rules and then requires letters with at most two inner
    /// space, apostrophe or hyphen separators and an optional trailing period.
    pub fn person_name(&mut self, field: &str, value: Option<String>, max_len: usize) -> String {
        let before = self.errors.len();
        let value = self.text(field, value, max_len);

        if self.errors.len() == before && !PERSON_NAME.is_match(&value) {
            self.reject(
                field,
                Some(value.clone()),
                "must contain only letters with optional space, apostrophe or hyphen separators",
            );
        }

        value
    }

    /// Validates a required string of `1..=max_len` ASCII digits.
    pub fn digits(&mut self, field: &str, value: Option<String>, max_len: usize) -> String {
        let before = self.errors.len();
        let value = self.text(field, value, max_len);

        if self.errors.len() == before && !value.chars().all(|c| c.is_ascii_digit()) {
            self.reject(
                field,
                Some(value.clone()),
                format!("must contain between 1 and {} digits", max_len),
            );
        }

        value
    }

    /// Validates that a non-text value is present.
    ///
    /// Returns the value, or `T::default()` when it was missing.
    pub fn required<T: Default>(&mut self, field: &str, value: Option<T>) -> T {
        match value {
            Some(value) => value,
            None => {
                self.reject(field, None, "must not be null");
                T::default()
            }
        }
    }

    /// Completes validation.
    ///
    /// # Returns
    /// - `Ok(())` - No field error was recorded
    /// - `Err(ValidationError)` - Every recorded field error, in recording order
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}
