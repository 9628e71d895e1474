//! Show validation and facade wiring.

use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;
use shelf_core::validation::{MovableValidator, ValidationEvent};
use shelf_db::models::genre::Genre;
use shelf_db::models::show::Show;

use crate::checks;
use crate::error::{FacadeError, FacadeResult};
use crate::facade::MovableFacade;
use crate::genre;

pub fn field_checks(show: &Show) -> Vec<ValidationEvent> {
    let mut events = Vec::new();
    checks::non_empty(&show.name, "SHOW_NAME_EMPTY", "Name", &mut events);
    checks::non_empty(
        &show.original_name,
        "SHOW_ORIGINAL_NAME_EMPTY",
        "Original name",
        &mut events,
    );
    events
}

pub fn validator() -> MovableValidator<Show> {
    MovableValidator::new("Show", "SHOW", field_checks)
}

/// Show facade: the generic operations plus the check that every referenced
/// genre exists.
pub struct ShowFacade<R, G> {
    inner: MovableFacade<Show, R>,
    genres: G,
}

impl<R, G> ShowFacade<R, G>
where
    R: MovableRepository<Show>,
    G: MovableRepository<Genre>,
{
    pub fn new(repo: R, genres: G) -> Self {
        Self {
            inner: MovableFacade::new(validator(), repo),
            genres,
        }
    }

    pub async fn get_all(&self) -> FacadeResult<Vec<Show>> {
        self.inner.get_all().await
    }

    pub async fn get(&self, id: DbId) -> FacadeResult<Option<Show>> {
        self.inner.get(id).await
    }

    pub async fn add(&self, candidate: Option<Show>) -> FacadeResult<Show> {
        let mut result = self.inner.validator().validate_for_create(candidate.as_ref());
        if let Some(show) = candidate.as_ref() {
            result.merge(genre::references_exist(&self.genres, &show.genre_ids).await?);
        }
        match (candidate, result.is_ok()) {
            (Some(show), true) => Ok(self.inner.repository().insert(&show).await?),
            _ => Err(FacadeError::Invalid(result)),
        }
    }

    pub async fn update(&self, candidate: Option<Show>) -> FacadeResult<Show> {
        let mut result = self.inner.validator().validate_for_update(candidate.as_ref());
        if let Some(show) = candidate.as_ref() {
            result.merge(genre::references_exist(&self.genres, &show.genre_ids).await?);
        }
        if !result.is_ok() {
            return Err(FacadeError::Invalid(result));
        }
        self.inner.update(candidate).await
    }

    pub async fn remove(&self, id: DbId) -> FacadeResult<()> {
        self.inner.remove(id).await
    }

    pub async fn duplicate(&self, id: DbId) -> FacadeResult<Show> {
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

    #[test]
    fn blank_name_is_rejected() {
        let show = Show {
            id: None,
            position: None,
            name: String::new(),
            original_name: "The Wire".to_string(),
            genre_ids: vec![],
        };
        let events = field_checks(&show);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].code, "SHOW_NAME_EMPTY");
    }
}
