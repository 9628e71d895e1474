//! Position arithmetic for ordered sibling lists.
//!
//! Pure functions over a sibling list that is already sorted by position,
//! with positions forming a contiguous zero-based sequence. Callers load the
//! list, check legality with the validator, apply one of these functions and
//! persist the returned rows in one unit; interleaving two moves against the
//! same list without external serialization can leave duplicate positions.

use crate::movable::Movable;

/// Direction of an adjacent move within a sibling list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Index of `target` within `siblings`, matched by identifier.
///
/// # Panics
///
/// Panics if no sibling carries the target's identifier.
pub(crate) fn index_of<T: Movable>(target: &T, siblings: &[T]) -> usize {
    siblings
        .iter()
        .position(|s| s.id() == target.id())
        .unwrap_or_else(|| {
            panic!(
                "entity with id {:?} is missing from its sibling list",
                target.id()
            )
        })
}

/// Exchange positions between `target` and its neighbor in the given
/// direction.
///
/// Returns the updated target and the updated neighbor, in that order, as new
/// values; the inputs and every other sibling are untouched. The two returned
/// positions are the two input positions swapped, so they stay distinct.
///
/// Legality must have been established beforehand via
/// [`validate_moving`](crate::validation::MovableValidator::validate_moving).
///
/// # Panics
///
/// Panics if `target` is missing from `siblings`, if it is already first
/// (`Up`) or last (`Down`), or if either affected row has no position
/// assigned.
pub fn swap_with_neighbor<T: Movable>(target: &T, siblings: &[T], direction: Direction) -> (T, T) {
    let index = index_of(target, siblings);
    let neighbor_index = match direction {
        Direction::Up => {
            assert!(index > 0, "first entity in its list cannot move up");
            index - 1
        }
        Direction::Down => {
            assert!(
                index + 1 < siblings.len(),
                "last entity in its list cannot move down"
            );
            index + 1
        }
    };

    let neighbor = &siblings[neighbor_index];
    let target_position = target
        .position()
        .expect("moved entity must have an assigned position");
    let neighbor_position = neighbor
        .position()
        .expect("neighbor must have an assigned position");

    (
        target.with_position(neighbor_position),
        neighbor.with_position(target_position),
    )
}

/// Reassign positions 0..n following list order.
///
/// Returns new values for every sibling; used to repair a list whose
/// positions drifted (gaps after deletes, imports with arbitrary ranks).
pub fn renumber<T: Movable>(siblings: &[T]) -> Vec<T> {
    siblings
        .iter()
        .enumerate()
        .map(|(index, entity)| entity.with_position(index as i32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DbId;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: Option<DbId>,
        position: Option<i32>,
    }

    impl Item {
        fn saved(id: DbId, position: i32) -> Self {
            Self {
                id: Some(id),
                position: Some(position),
            }
        }
    }

    impl Movable for Item {
        fn id(&self) -> Option<DbId> {
            self.id
        }

        fn position(&self) -> Option<i32> {
            self.position
        }

        fn with_position(&self, position: i32) -> Self {
            Self {
                position: Some(position),
                ..self.clone()
            }
        }

        fn with_identity(&self, id: DbId, position: i32) -> Self {
            Self {
                id: Some(id),
                position: Some(position),
            }
        }

        fn as_new(&self) -> Self {
            Self {
                id: None,
                position: None,
            }
        }
    }

    fn pair() -> Vec<Item> {
        vec![Item::saved(1, 0), Item::saved(2, 1)]
    }

    #[test]
    fn swap_up_exchanges_the_two_positions() {
        let siblings = pair();
        let (target, neighbor) = swap_with_neighbor(&siblings[1], &siblings, Direction::Up);
        assert_eq!(target.id, Some(2));
        assert_eq!(target.position, Some(0));
        assert_eq!(neighbor.id, Some(1));
        assert_eq!(neighbor.position, Some(1));
    }

    #[test]
    fn swap_down_is_symmetric() {
        let siblings = pair();
        let (target, neighbor) = swap_with_neighbor(&siblings[0], &siblings, Direction::Down);
        assert_eq!(target.id, Some(1));
        assert_eq!(target.position, Some(1));
        assert_eq!(neighbor.id, Some(2));
        assert_eq!(neighbor.position, Some(0));
    }

    #[test]
    fn swap_leaves_inputs_untouched() {
        let siblings = pair();
        let _ = swap_with_neighbor(&siblings[1], &siblings, Direction::Up);
        assert_eq!(siblings[0].position, Some(0));
        assert_eq!(siblings[1].position, Some(1));
    }

    #[test]
    fn swap_in_longer_list_only_touches_the_pair() {
        let siblings = vec![Item::saved(1, 0), Item::saved(2, 1), Item::saved(3, 2)];
        let (target, neighbor) = swap_with_neighbor(&siblings[1], &siblings, Direction::Down);
        assert_eq!(target.position, Some(2));
        assert_eq!(neighbor.id, Some(3));
        assert_eq!(neighbor.position, Some(1));
    }

    #[test]
    #[should_panic(expected = "cannot move up")]
    fn swap_up_on_first_entity_panics() {
        let siblings = pair();
        let _ = swap_with_neighbor(&siblings[0], &siblings, Direction::Up);
    }

    #[test]
    #[should_panic(expected = "cannot move down")]
    fn swap_down_on_last_entity_panics() {
        let siblings = pair();
        let _ = swap_with_neighbor(&siblings[1], &siblings, Direction::Down);
    }

    #[test]
    #[should_panic(expected = "missing from its sibling list")]
    fn swap_with_foreign_target_panics() {
        let siblings = pair();
        let stranger = Item::saved(99, 5);
        let _ = swap_with_neighbor(&stranger, &siblings, Direction::Up);
    }

    #[test]
    fn renumber_assigns_sequential_positions() {
        let siblings = vec![Item::saved(7, 3), Item::saved(8, 9), Item::saved(9, 40)];
        let renumbered = renumber(&siblings);
        let positions: Vec<_> = renumbered.iter().map(|i| i.position).collect();
        assert_eq!(positions, [Some(0), Some(1), Some(2)]);
        let ids: Vec<_> = renumbered.iter().map(|i| i.id).collect();
        assert_eq!(ids, [Some(7), Some(8), Some(9)]);
    }

    #[test]
    fn renumber_of_empty_list_is_empty() {
        let siblings: Vec<Item> = Vec::new();
        assert!(renumber(&siblings).is_empty());
    }
}
