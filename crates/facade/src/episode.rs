//! Episode validation and facade wiring.

use shelf_core::repository::MovableRepository;
use shelf_core::validation::{MovableValidator, ValidationEvent};
use shelf_db::models::episode::Episode;

use crate::checks;
use crate::facade::MovableFacade;

pub fn field_checks(episode: &Episode) -> Vec<ValidationEvent> {
    let mut events = Vec::new();
    checks::positive(episode.number, "EPISODE_NUMBER_NOT_POSITIVE", "Number", &mut events);
    checks::non_empty(&episode.name, "EPISODE_NAME_EMPTY", "Name", &mut events);
    checks::non_negative(episode.length, "EPISODE_LENGTH_NEGATIVE", "Length", &mut events);
    events
}

pub fn validator() -> MovableValidator<Episode> {
    MovableValidator::new("Episode", "EPISODE", field_checks)
}

/// Facade for episodes backed by the given repository. Episodes of one
/// season form one sibling list; the repository resolves the scope.
pub fn facade<R: MovableRepository<Episode>>(repo: R) -> MovableFacade<Episode, R> {
    MovableFacade::new(validator(), repo)
}
