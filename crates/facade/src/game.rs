//! Game validation and facade wiring.

use shelf_core::repository::MovableRepository;
use shelf_core::validation::{MovableValidator, ValidationEvent};
use shelf_db::models::game::Game;

use crate::checks;
use crate::facade::MovableFacade;

pub fn field_checks(game: &Game) -> Vec<ValidationEvent> {
    let mut events = Vec::new();
    checks::non_empty(&game.name, "GAME_NAME_EMPTY", "Name", &mut events);
    checks::positive(game.media_count, "GAME_MEDIA_COUNT_NOT_POSITIVE", "Media count", &mut events);
    events
}

pub fn validator() -> MovableValidator<Game> {
    MovableValidator::new("Game", "GAME", field_checks)
}

/// Facade for games backed by the given repository.
pub fn facade<R: MovableRepository<Game>>(repo: R) -> MovableFacade<Game, R> {
    MovableFacade::new(validator(), repo)
}
