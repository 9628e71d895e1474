//! Shared test support: an in-memory repository standing in for PostgreSQL.

use std::sync::Mutex;

use async_trait::async_trait;
use shelf_core::error::CoreError;
use shelf_core::movable::Movable;
use shelf_core::repository::MovableRepository;
use shelf_core::types::DbId;

pub struct InMemoryRepo<T> {
    state: Mutex<State<T>>,
}

struct State<T> {
    rows: Vec<T>,
    next_id: DbId,
}

impl<T: Movable + Clone> InMemoryRepo<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait]
impl<T> MovableRepository<T> for InMemoryRepo<T>
where
    T: Movable + Clone + Send + Sync,
{
    async fn find_all(&self) -> Result<Vec<T>, CoreError> {
        let state = self.state.lock().unwrap();
        let mut rows = state.rows.clone();
        rows.sort_by_key(|r| (r.scope(), r.position()));
        Ok(rows)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<T>, CoreError> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().find(|r| r.id() == Some(id)).cloned())
    }

    async fn siblings(&self, entity: &T) -> Result<Vec<T>, CoreError> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<T> = state
            .rows
            .iter()
            .filter(|r| r.scope() == entity.scope())
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.position());
        Ok(rows)
    }

    async fn insert(&self, candidate: &T) -> Result<T, CoreError> {
        let mut state = self.state.lock().unwrap();
        let position = state
            .rows
            .iter()
            .filter(|r| r.scope() == candidate.scope())
            .filter_map(|r| r.position())
            .max()
            .map_or(0, |p| p + 1);
        let id = state.next_id;
        state.next_id += 1;
        let stored = candidate.with_identity(id, position);
        state.rows.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, entity: &T) -> Result<T, CoreError> {
        let mut state = self.state.lock().unwrap();
        match state.rows.iter_mut().find(|r| r.id() == entity.id()) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity.clone())
            }
            None => Err(CoreError::Repository(format!(
                "no row with id {:?}",
                entity.id()
            ))),
        }
    }

    async fn update_all(&self, entities: &[T]) -> Result<(), CoreError> {
        let mut state = self.state.lock().unwrap();
        for entity in entities {
            if let Some(row) = state.rows.iter_mut().find(|r| r.id() == entity.id()) {
                *row = entity.clone();
            }
        }
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<bool, CoreError> {
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|r| r.id() != Some(id));
        Ok(state.rows.len() < before)
    }
}
