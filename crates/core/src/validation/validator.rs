//! Structural validation for ordered entities. Pure logic, no database
//! access.
//!
//! One validator instance serves one entity type. Structural checks (identity
//! and position presence matching the operation) always run first; the
//! entity-specific field checks supplied at construction run exactly once
//! afterwards, and their events are appended in the order the checks declare
//! them. Checks accumulate: a candidate violating several rules reports all
//! of them.

use crate::movable::Movable;
use crate::mover::{self, Direction};

use super::result::{ValidationEvent, ValidationResult};

/// Entity-specific field checks, supplied by the entity's facade module.
pub type FieldChecks<T> = Box<dyn Fn(&T) -> Vec<ValidationEvent> + Send + Sync>;

/// Validates create, update, existence and move operations for one entity
/// type.
pub struct MovableValidator<T> {
    /// Display name used in messages, e.g. "Movie".
    name: &'static str,
    /// Event-code prefix, e.g. "MOVIE".
    prefix: &'static str,
    checks: FieldChecks<T>,
}

impl<T: Movable> MovableValidator<T> {
    pub fn new(
        name: &'static str,
        prefix: &'static str,
        checks: impl Fn(&T) -> Vec<ValidationEvent> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            prefix,
            checks: Box::new(checks),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Validate a candidate for insertion.
    ///
    /// A missing candidate yields the single `<PREFIX>_NULL` event. Otherwise
    /// identifier and position must both be unset (the persistence layer
    /// assigns them), and the field checks run on top.
    pub fn validate_for_create(&self, candidate: Option<&T>) -> ValidationResult {
        let mut result = ValidationResult::new();
        let Some(candidate) = candidate else {
            result.add(self.error("NULL", format!("{} must not be null.", self.name)));
            return result;
        };
        if candidate.id().is_some() {
            result.add(self.error(
                "ID_NOT_NULL",
                format!("{} identifier must be null.", self.name),
            ));
        }
        if candidate.position().is_some() {
            result.add(self.error(
                "POSITION_NOT_NULL",
                format!("{} position must be null.", self.name),
            ));
        }
        self.run_field_checks(candidate, &mut result);
        result
    }

    /// Validate a candidate for an update of an existing row.
    ///
    /// Mirror image of [`validate_for_create`](Self::validate_for_create):
    /// identifier and position must both be set.
    pub fn validate_for_update(&self, candidate: Option<&T>) -> ValidationResult {
        let mut result = ValidationResult::new();
        let Some(candidate) = candidate else {
            result.add(self.error("NULL", format!("{} must not be null.", self.name)));
            return result;
        };
        if candidate.id().is_none() {
            result.add(self.error(
                "ID_NULL",
                format!("{} identifier must not be null.", self.name),
            ));
        }
        if candidate.position().is_none() {
            result.add(self.error(
                "POSITION_NULL",
                format!("{} position must not be null.", self.name),
            ));
        }
        self.run_field_checks(candidate, &mut result);
        result
    }

    /// Confirm a looked-up entity is still present.
    ///
    /// Guards update, delete and move operations against concurrent deletion
    /// of their target.
    pub fn validate_exists(&self, entity: Option<&T>) -> ValidationResult {
        let mut result = ValidationResult::new();
        if entity.is_none() {
            result.add(self.error("NOT_EXIST", format!("{} does not exist.", self.name)));
        }
        result
    }

    /// Check whether `target` may move one slot in `direction`.
    ///
    /// Moving is purely positional: the only rule is that the target is not
    /// already at the boundary it is moving towards. `siblings` must be the
    /// target's sibling list in position order.
    ///
    /// # Panics
    ///
    /// Panics if `target` is missing from `siblings`; the caller is expected
    /// to have drawn the target from that list.
    pub fn validate_moving(
        &self,
        target: &T,
        siblings: &[T],
        direction: Direction,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();
        let index = mover::index_of(target, siblings);
        let movable = match direction {
            Direction::Up => index > 0,
            Direction::Down => index + 1 < siblings.len(),
        };
        if !movable {
            let way = match direction {
                Direction::Up => "up",
                Direction::Down => "down",
            };
            result.add(self.error(
                "NOT_MOVABLE",
                format!("{} can't be moved {}.", self.name, way),
            ));
        }
        result
    }

    fn run_field_checks(&self, candidate: &T, result: &mut ValidationResult) {
        for event in (self.checks)(candidate) {
            result.add(event);
        }
    }

    fn error(&self, suffix: &str, message: String) -> ValidationEvent {
        ValidationEvent::error(format!("{}_{}", self.prefix, suffix), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DbId;
    use crate::validation::result::Status;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: Option<DbId>,
        position: Option<i32>,
        name: String,
        length: i32,
    }

    impl Item {
        fn unsaved(name: &str) -> Self {
            Self {
                id: None,
                position: None,
                name: name.to_string(),
                length: 10,
            }
        }

        fn saved(id: DbId, position: i32, name: &str) -> Self {
            Self {
                id: Some(id),
                position: Some(position),
                name: name.to_string(),
                length: 10,
            }
        }
    }

    impl Movable for Item {
        fn id(&self) -> Option<DbId> {
            self.id
        }

        fn position(&self) -> Option<i32> {
            self.position
        }

        fn with_position(&self, position: i32) -> Self {
            Self {
                position: Some(position),
                ..self.clone()
            }
        }

        fn with_identity(&self, id: DbId, position: i32) -> Self {
            Self {
                id: Some(id),
                position: Some(position),
                ..self.clone()
            }
        }

        fn as_new(&self) -> Self {
            Self {
                id: None,
                position: None,
                ..self.clone()
            }
        }
    }

    /// Two independent checks, declared name-first.
    fn item_checks(item: &Item) -> Vec<ValidationEvent> {
        let mut events = Vec::new();
        if item.name.trim().is_empty() {
            events.push(ValidationEvent::error(
                "ITEM_NAME_EMPTY",
                "Name must not be empty.",
            ));
        }
        if item.length < 0 {
            events.push(ValidationEvent::error(
                "ITEM_LENGTH_NEGATIVE",
                "Length must not be negative.",
            ));
        }
        events
    }

    fn validator() -> MovableValidator<Item> {
        MovableValidator::new("Item", "ITEM", item_checks)
    }

    fn codes(result: &ValidationResult) -> Vec<&str> {
        result.events().iter().map(|e| e.code.as_str()).collect()
    }

    // -- create --------------------------------------------------------------

    #[test]
    fn create_accepts_fresh_valid_candidate() {
        let result = validator().validate_for_create(Some(&Item::unsaved("Quiet City")));
        assert_eq!(result.status(), Status::Ok);
        assert!(result.events().is_empty());
    }

    #[test]
    fn create_rejects_missing_candidate_with_single_event() {
        let result = validator().validate_for_create(None);
        assert_eq!(codes(&result), ["ITEM_NULL"]);
    }

    #[test]
    fn create_rejects_assigned_identifier() {
        let candidate = Item {
            id: Some(4),
            ..Item::unsaved("Quiet City")
        };
        let result = validator().validate_for_create(Some(&candidate));
        assert_eq!(codes(&result), ["ITEM_ID_NOT_NULL"]);
    }

    #[test]
    fn create_rejects_assigned_position() {
        let candidate = Item {
            position: Some(0),
            ..Item::unsaved("Quiet City")
        };
        let result = validator().validate_for_create(Some(&candidate));
        assert_eq!(codes(&result), ["ITEM_POSITION_NOT_NULL"]);
    }

    #[test]
    fn create_accumulates_structural_and_field_events_in_order() {
        let candidate = Item {
            id: Some(4),
            position: None,
            name: String::new(),
            length: -3,
        };
        let result = validator().validate_for_create(Some(&candidate));
        assert_eq!(
            codes(&result),
            ["ITEM_ID_NOT_NULL", "ITEM_NAME_EMPTY", "ITEM_LENGTH_NEGATIVE"]
        );
    }

    #[test]
    fn create_is_idempotent_over_the_same_candidate() {
        let candidate = Item {
            id: Some(4),
            ..Item::unsaved("")
        };
        let v = validator();
        let first = v.validate_for_create(Some(&candidate));
        let second = v.validate_for_create(Some(&candidate));
        assert_eq!(first, second);
    }

    // -- update --------------------------------------------------------------

    #[test]
    fn update_accepts_saved_valid_candidate() {
        let result = validator().validate_for_update(Some(&Item::saved(4, 0, "Quiet City")));
        assert!(result.is_ok());
        assert!(result.events().is_empty());
    }

    #[test]
    fn update_rejects_missing_candidate() {
        let result = validator().validate_for_update(None);
        assert_eq!(codes(&result), ["ITEM_NULL"]);
    }

    #[test]
    fn update_requires_identifier_and_position() {
        let result = validator().validate_for_update(Some(&Item::unsaved("Quiet City")));
        assert_eq!(codes(&result), ["ITEM_ID_NULL", "ITEM_POSITION_NULL"]);
    }

    #[test]
    fn update_runs_field_checks_after_structural_checks() {
        let candidate = Item {
            id: None,
            position: Some(2),
            name: String::new(),
            length: 5,
        };
        let result = validator().validate_for_update(Some(&candidate));
        assert_eq!(codes(&result), ["ITEM_ID_NULL", "ITEM_NAME_EMPTY"]);
    }

    // -- exists --------------------------------------------------------------

    #[test]
    fn exists_rejects_absent_entity_with_single_event() {
        let result = validator().validate_exists(None);
        assert_eq!(codes(&result), ["ITEM_NOT_EXIST"]);
        assert_eq!(result.events().len(), 1);
    }

    #[test]
    fn exists_accepts_present_entity() {
        let entity = Item::saved(4, 0, "Quiet City");
        let result = validator().validate_exists(Some(&entity));
        assert!(result.is_ok());
        assert!(result.events().is_empty());
    }

    // -- moving --------------------------------------------------------------

    fn pair() -> Vec<Item> {
        vec![Item::saved(1, 0, "first"), Item::saved(2, 1, "second")]
    }

    #[test]
    fn first_entity_cannot_move_up() {
        let siblings = pair();
        let result = validator().validate_moving(&siblings[0], &siblings, Direction::Up);
        assert_eq!(codes(&result), ["ITEM_NOT_MOVABLE"]);
        assert_eq!(result.events()[0].message, "Item can't be moved up.");
    }

    #[test]
    fn second_entity_can_move_up() {
        let siblings = pair();
        let result = validator().validate_moving(&siblings[1], &siblings, Direction::Up);
        assert!(result.is_ok());
    }

    #[test]
    fn first_entity_can_move_down() {
        let siblings = pair();
        let result = validator().validate_moving(&siblings[0], &siblings, Direction::Down);
        assert!(result.is_ok());
    }

    #[test]
    fn last_entity_cannot_move_down() {
        let siblings = pair();
        let result = validator().validate_moving(&siblings[1], &siblings, Direction::Down);
        assert_eq!(codes(&result), ["ITEM_NOT_MOVABLE"]);
        assert_eq!(result.events()[0].message, "Item can't be moved down.");
    }

    #[test]
    fn moving_ignores_field_validity() {
        let mut siblings = pair();
        siblings[1].name = String::new();
        siblings[1].length = -1;
        let result = validator().validate_moving(&siblings[1], &siblings, Direction::Up);
        assert!(result.is_ok());
    }

    #[test]
    #[should_panic(expected = "missing from its sibling list")]
    fn moving_a_foreign_target_panics() {
        let siblings = pair();
        let stranger = Item::saved(99, 7, "stranger");
        let _ = validator().validate_moving(&stranger, &siblings, Direction::Up);
    }
}
