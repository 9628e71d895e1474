//! Genre validation and facade wiring.

use std::collections::HashSet;

use shelf_core::movable::Movable;
use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use shelf_core::validation::{MovableValidator, ValidationEvent, ValidationResult};
use shelf_db::models::genre::Genre;

use crate::checks;
use crate::error::FacadeResult;
use crate::facade::MovableFacade;

pub fn field_checks(genre: &Genre) -> Vec<ValidationEvent> {
    let mut events = Vec::new();
    checks::non_empty(&genre.name, "GENRE_NAME_EMPTY", "Name", &mut events);
    events
}

pub fn validator() -> MovableValidator<Genre> {
    MovableValidator::new("Genre", "GENRE", field_checks)
}

/// Facade for genres backed by the given repository.
pub fn facade<R: MovableRepository<Genre>>(repo: R) -> MovableFacade<Genre, R> {
    MovableFacade::new(validator(), repo)
}

/// Check that every referenced genre id is present in the repository.
///
/// Works off a full snapshot rather than per-id lookups, so one call costs
/// one query regardless of how many ids are referenced.
pub async fn references_exist<R: MovableRepository<Genre>>(
    repo: &R,
    genre_ids: &[DbId],
) -> FacadeResult<ValidationResult> {
    let known: HashSet<DbId> = repo.find_all().await?.iter().filter_map(|g| g.id()).collect();
    let mut result = ValidationResult::new();
    for genre_id in genre_ids {
        if !known.contains(genre_id) {
            result.add(ValidationEvent::error(
                "GENRE_NOT_EXIST",
                format!("Genre {genre_id} does not exist."),
            ));
        }
    }
    Ok(result)
}
