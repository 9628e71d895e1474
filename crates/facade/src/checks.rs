//! Shared building blocks for entity field checks.
//!
//! Each helper appends at most one event, so a check function composed of
//! these reports every violation in its own declaration order.

use chrono::{Datelike, Utc};
use shelf_core::validation::ValidationEvent;

/// Earliest year a catalogued release can carry.
pub const MIN_YEAR: i32 = 1930;

/// Upper bound for year fields.
pub fn max_year() -> i32 {
    Utc::now().year()
}

pub fn non_empty(value: &str, code: &str, field: &str, events: &mut Vec<ValidationEvent>) {
    if value.trim().is_empty() {
        events.push(ValidationEvent::error(
            code,
            format!("{field} must not be empty."),
        ));
    }
}

pub fn positive(value: i32, code: &str, field: &str, events: &mut Vec<ValidationEvent>) {
    if value <= 0 {
        events.push(ValidationEvent::error(
            code,
            format!("{field} must be positive."),
        ));
    }
}

pub fn non_negative(value: i32, code: &str, field: &str, events: &mut Vec<ValidationEvent>) {
    if value < 0 {
        events.push(ValidationEvent::error(
            code,
            format!("{field} must not be negative."),
        ));
    }
}

pub fn year_in_range(year: i32, code: &str, field: &str, events: &mut Vec<ValidationEvent>) {
    let max = max_year();
    if !(MIN_YEAR..=max).contains(&year) {
        events.push(ValidationEvent::error(
            code,
            format!("{field} must be between {MIN_YEAR} and {max}."),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_rejects_blank_strings() {
        let mut events = Vec::new();
        non_empty("   ", "X_NAME_EMPTY", "Name", &mut events);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].code, "X_NAME_EMPTY");
    }

    #[test]
    fn non_empty_accepts_text() {
        let mut events = Vec::new();
        non_empty("Solaris", "X_NAME_EMPTY", "Name", &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn positive_rejects_zero() {
        let mut events = Vec::new();
        positive(0, "X_COUNT_NOT_POSITIVE", "Count", &mut events);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn non_negative_accepts_zero() {
        let mut events = Vec::new();
        non_negative(0, "X_LENGTH_NEGATIVE", "Length", &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn year_bounds_are_inclusive() {
        let mut events = Vec::new();
        year_in_range(MIN_YEAR, "X_YEAR_INVALID", "Year", &mut events);
        year_in_range(max_year(), "X_YEAR_INVALID", "Year", &mut events);
        assert!(events.is_empty());

        year_in_range(MIN_YEAR - 1, "X_YEAR_INVALID", "Year", &mut events);
        year_in_range(max_year() + 1, "X_YEAR_INVALID", "Year", &mut events);
        assert_eq!(events.len(), 2);
    }
}
