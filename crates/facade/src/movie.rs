//! Movie validation and facade wiring.

use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use shelf_core::validation::{MovableValidator, ValidationEvent};
use shelf_db::models::genre::Genre;
use shelf_db::models::movie::Movie;

use crate::checks;
use crate::error::{FacadeError, FacadeResult};
use crate::facade::MovableFacade;
use crate::genre;

pub fn field_checks(movie: &Movie) -> Vec<ValidationEvent> {
    let mut events = Vec::new();
    checks::non_empty(&movie.name, "MOVIE_NAME_EMPTY", "Name", &mut events);
    checks::non_empty(
        &movie.original_name,
        "MOVIE_ORIGINAL_NAME_EMPTY",
        "Original name",
        &mut events,
    );
    checks::year_in_range(movie.year, "MOVIE_YEAR_INVALID", "Year", &mut events);
    checks::non_empty(&movie.language, "MOVIE_LANGUAGE_EMPTY", "Language", &mut events);
    for length in &movie.media {
        checks::positive(*length, "MOVIE_MEDIUM_NOT_POSITIVE", "Medium length", &mut events);
    }
    events
}

pub fn validator() -> MovableValidator<Movie> {
    MovableValidator::new("Movie", "MOVIE", field_checks)
}

/// Movie facade: the generic operations plus the check that every referenced
/// genre exists.
pub struct MovieFacade<R, G> {
    inner: MovableFacade<Movie, R>,
    genres: G,
}

impl<R, G> MovieFacade<R, G>
where
    R: MovableRepository<Movie>,
    G: MovableRepository<Genre>,
{
    pub fn new(repo: R, genres: G) -> Self {
        Self {
            inner: MovableFacade::new(validator(), repo),
            genres,
        }
    }

    pub async fn get_all(&self) -> FacadeResult<Vec<Movie>> {
        self.inner.get_all().await
    }

    pub async fn get(&self, id: DbId) -> FacadeResult<Option<Movie>> {
        self.inner.get(id).await
    }

    pub async fn add(&self, candidate: Option<Movie>) -> FacadeResult<Movie> {
        let mut result = self.inner.validator().validate_for_create(candidate.as_ref());
        if let Some(movie) = candidate.as_ref() {
            result.merge(genre::references_exist(&self.genres, &movie.genre_ids).await?);
        }
        match (candidate, result.is_ok()) {
            (Some(movie), true) => Ok(self.inner.repository().insert(&movie).await?),
            _ => Err(FacadeError::Invalid(result)),
        }
    }

    pub async fn update(&self, candidate: Option<Movie>) -> FacadeResult<Movie> {
        let mut result = self.inner.validator().validate_for_update(candidate.as_ref());
        if let Some(movie) = candidate.as_ref() {
            result.merge(genre::references_exist(&self.genres, &movie.genre_ids).await?);
        }
        if !result.is_ok() {
            return Err(FacadeError::Invalid(result));
        }
        self.inner.update(candidate).await
    }

    pub async fn remove(&self, id: DbId) -> FacadeResult<()> {
        self.inner.remove(id).await
    }

    pub async fn duplicate(&self, id: DbId) -> FacadeResult<Movie> {
        self.inner.duplicate(id).await
    }

    pub async fn move_up(&self, id: DbId) -> FacadeResult<()> {
        self.inner.move_up(id).await
    }

    pub async fn move_down(&self, id: DbId) -> FacadeResult<()> {
        self.inner.move_down(id).await
    }

    pub async fn update_positions(&self) -> FacadeResult<()> {
        self.inner.update_positions().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            id: None,
            position: None,
            name: "Stalker".to_string(),
            original_name: "Сталкер".to_string(),
            year: 1979,
            language: "RU".to_string(),
            media: vec![161],
            genre_ids: vec![],
        }
    }

    fn codes(events: &[ValidationEvent]) -> Vec<&str> {
        events.iter().map(|e| e.code.as_str()).collect()
    }

    #[test]
    fn valid_movie_produces_no_events() {
        assert!(field_checks(&movie()).is_empty());
    }

    #[test]
    fn blank_names_are_rejected_in_declaration_order() {
        let candidate = Movie {
            name: String::new(),
            original_name: "  ".to_string(),
            ..movie()
        };
        assert_eq!(
            codes(&field_checks(&candidate)),
            ["MOVIE_NAME_EMPTY", "MOVIE_ORIGINAL_NAME_EMPTY"]
        );
    }

    #[test]
    fn year_before_catalog_era_is_rejected() {
        let candidate = Movie {
            year: 1915,
            ..movie()
        };
        assert_eq!(codes(&field_checks(&candidate)), ["MOVIE_YEAR_INVALID"]);
    }

    #[test]
    fn every_bad_medium_gets_its_own_event() {
        let candidate = Movie {
            media: vec![0, 90, -5],
            ..movie()
        };
        assert_eq!(
            codes(&field_checks(&candidate)),
            ["MOVIE_MEDIUM_NOT_POSITIVE", "MOVIE_MEDIUM_NOT_POSITIVE"]
        );
    }
}
