//! Music validation and facade wiring.

use shelf_core::repository::MovableRepository;
use shelf_core::validation::{MovableValidator, ValidationEvent};
use shelf_db::models::music::Music;

use crate::checks;
use crate::facade::MovableFacade;

pub fn field_checks(music: &Music) -> Vec<ValidationEvent> {
    let mut events = Vec::new();
    checks::non_empty(&music.name, "MUSIC_NAME_EMPTY", "Name", &mut events);
    checks::positive(music.media_count, "MUSIC_MEDIA_COUNT_NOT_POSITIVE", "Media count", &mut events);
    events
}

pub fn validator() -> MovableValidator<Music> {
    MovableValidator::new("Music", "MUSIC", field_checks)
}

/// Facade for music entries backed by the given repository.
pub fn facade<R: MovableRepository<Music>>(repo: R) -> MovableFacade<Music, R> {
    MovableFacade::new(validator(), repo)
}
