//! Song validation and facade wiring.

use shelf_core::repository::MovableRepository;
use shelf_core::validation::{MovableValidator, ValidationEvent};
use shelf_db::models::song::Song;

use crate::checks;
use crate::facade::MovableFacade;

pub fn field_checks(song: &Song) -> Vec<ValidationEvent> {
    let mut events = Vec::new();
    checks::non_empty(&song.name, "SONG_NAME_EMPTY", "Name", &mut events);
    checks::non_negative(song.length, "SONG_LENGTH_NEGATIVE", "Length", &mut events);
    events
}

pub fn validator() -> MovableValidator<Song> {
    MovableValidator::new("Song", "SONG", field_checks)
}

/// Facade for songs backed by the given repository. Songs of one music entry
/// form one sibling list; the repository resolves the scope.
pub fn facade<R: MovableRepository<Song>>(repo: R) -> MovableFacade<Song, R> {
    MovableFacade::new(validator(), repo)
}
