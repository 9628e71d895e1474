//! Program validation and facade wiring.

use shelf_core::repository::MovableRepository;
use shelf_core::validation::{MovableValidator, ValidationEvent};
use shelf_db::models::program::Program;

use crate::checks;
use crate::facade::MovableFacade;

pub fn field_checks(program: &Program) -> Vec<ValidationEvent> {
    let mut events = Vec::new();
    checks::non_empty(&program.name, "PROGRAM_NAME_EMPTY", "Name", &mut events);
    checks::positive(program.media_count, "PROGRAM_MEDIA_COUNT_NOT_POSITIVE", "Media count", &mut events);
    events
}

pub fn validator() -> MovableValidator<Program> {
    MovableValidator::new("Program", "PROGRAM", field_checks)
}

/// Facade for programs backed by the given repository.
pub fn facade<R: MovableRepository<Program>>(repo: R) -> MovableFacade<Program, R> {
    MovableFacade::new(validator(), repo)
}
