//! Picture validation and facade wiring.

use shelf_core::repository::MovableRepository;
use shelf_core::validation::{MovableValidator, ValidationEvent};
use shelf_db::models::picture::Picture;

use crate::facade::MovableFacade;

pub fn field_checks(picture: &Picture) -> Vec<ValidationEvent> {
    let mut events = Vec::new();
    if picture.content.is_empty() {
        events.push(ValidationEvent::error(
            "PICTURE_CONTENT_EMPTY",
            "Content must not be empty.",
        ));
    }
    events
}

pub fn validator() -> MovableValidator<Picture> {
    MovableValidator::new("Picture", "PICTURE", field_checks)
}

/// Facade for pictures backed by the given repository.
pub fn facade<R: MovableRepository<Picture>>(repo: R) -> MovableFacade<Picture, R> {
    MovableFacade::new(validator(), repo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_is_rejected() {
        let picture = Picture {
            id: None,
            position: None,
            content: Vec::new(),
        };
        assert_eq!(field_checks(&picture)[0].code, "PICTURE_CONTENT_EMPTY");
    }
}
