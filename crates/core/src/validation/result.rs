//! Validation outcome types.
//!
//! Validation failures are data, not errors: a [`ValidationResult`] carries
//! the ordered list of [`ValidationEvent`]s produced while checking a
//! candidate, and its status derives from that list. Consumers decide what a
//! failed result means for them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether an event blocks the operation or is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warn,
    Error,
}

/// A single violation found while validating a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub severity: Severity,
    /// Stable machine-readable code, e.g. `MOVIE_ID_NOT_NULL`.
    pub code: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationEvent {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warn,
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Overall outcome of a validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// Ordered collection of validation events, in the order checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    events: Vec<ValidationEvent>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event.
    pub fn add(&mut self, event: ValidationEvent) {
        self.events.push(event);
    }

    /// Append all events of `other`, preserving their order.
    pub fn merge(&mut self, other: ValidationResult) {
        self.events.extend(other.events);
    }

    /// `Status::Error` iff at least one error-severity event is present.
    pub fn status(&self) -> Status {
        if self.events.iter().any(|e| e.severity == Severity::Error) {
            Status::Error
        } else {
            Status::Ok
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status() == Status::Ok
    }

    pub fn events(&self) -> &[ValidationEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ValidationEvent> {
        self.events
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.events.is_empty() {
            return write!(f, "ok");
        }
        let codes: Vec<&str> = self.events.iter().map(|e| e.code.as_str()).collect();
        write!(f, "{}", codes.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_ok() {
        let result = ValidationResult::new();
        assert_eq!(result.status(), Status::Ok);
        assert!(result.is_ok());
        assert!(result.events().is_empty());
    }

    #[test]
    fn error_event_flips_status() {
        let mut result = ValidationResult::new();
        result.add(ValidationEvent::error("GENRE_NULL", "Genre must not be null."));
        assert_eq!(result.status(), Status::Error);
        assert!(!result.is_ok());
    }

    #[test]
    fn warning_alone_keeps_status_ok() {
        let mut result = ValidationResult::new();
        result.add(ValidationEvent::warning("MOVIE_NOTE", "Note is unusual."));
        assert_eq!(result.status(), Status::Ok);
    }

    #[test]
    fn merge_preserves_event_order() {
        let mut first = ValidationResult::new();
        first.add(ValidationEvent::error("A", "first"));
        let mut second = ValidationResult::new();
        second.add(ValidationEvent::error("B", "second"));
        second.add(ValidationEvent::error("C", "third"));

        first.merge(second);
        let codes: Vec<_> = first.events().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["A", "B", "C"]);
    }

    #[test]
    fn results_compare_structurally() {
        let mut a = ValidationResult::new();
        a.add(ValidationEvent::error("X", "x"));
        let mut b = ValidationResult::new();
        b.add(ValidationEvent::error("X", "x"));
        assert_eq!(a, b);
    }

    #[test]
    fn display_lists_codes() {
        let mut result = ValidationResult::new();
        result.add(ValidationEvent::error("SONG_NAME_EMPTY", "Name must not be empty."));
        result.add(ValidationEvent::error("SONG_LENGTH_NEGATIVE", "Length must not be negative."));
        assert_eq!(result.to_string(), "SONG_NAME_EMPTY, SONG_LENGTH_NEGATIVE");
    }
}
