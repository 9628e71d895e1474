//! Season validation and facade wiring.

use shelf_core::repository::MovableRepository;
use shelf_core::validation::{MovableValidator, ValidationEvent};
use shelf_db::models::season::Season;

use crate::checks;
use crate::facade::MovableFacade;

pub fn field_checks(season: &Season) -> Vec<ValidationEvent> {
    let mut events = Vec::new();
    checks::positive(season.number, "SEASON_NUMBER_NOT_POSITIVE", "Number", &mut events);
    checks::year_in_range(season.start_year, "SEASON_START_YEAR_INVALID", "Start year", &mut events);
    checks::year_in_range(season.end_year, "SEASON_END_YEAR_INVALID", "End year", &mut events);
    if season.start_year > season.end_year {
        events.push(ValidationEvent::error(
            "SEASON_YEARS_ORDER",
            "Start year must not be after end year.",
        ));
    }
    checks::non_empty(&season.language, "SEASON_LANGUAGE_EMPTY", "Language", &mut events);
    events
}

pub fn validator() -> MovableValidator<Season> {
    MovableValidator::new("Season", "SEASON", field_checks)
}

/// Facade for seasons backed by the given repository. Seasons of one show
/// form one sibling list; the repository resolves the scope.
pub fn facade<R: MovableRepository<Season>>(repo: R) -> MovableFacade<Season, R> {
    MovableFacade::new(validator(), repo)
}
