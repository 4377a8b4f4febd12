use async_trait::async_trait;
use domain::repository::{Result, missing_ids_key};
use domain::{CIRCLE_ENTITY, Circle, CircleId, CircleKey, CircleRepository, RepositoryError};

use super::InMemoryStore;

/// [`CircleRepository`] over an [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryCircleRepository {
    store: InMemoryStore,
}

impl InMemoryCircleRepository {
    /// Creates a repository reading and writing `store`.
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CircleRepository for InMemoryCircleRepository {
    async fn create(&self, circle: &Circle) -> Result<()> {
        let mut state = self.store.state.write().await;

        if state.circles.contains_key(circle.id()) {
            return Err(RepositoryError::duplicate(
                CIRCLE_ENTITY,
                CircleKey::Id(circle.id().clone()),
            ));
        }
        if state
            .circles
            .values()
            .any(|other| other.name() == circle.name())
        {
            return Err(RepositoryError::duplicate(
                CIRCLE_ENTITY,
                CircleKey::Name(circle.name().clone()),
            ));
        }

        state.circles.insert(circle.id().clone(), circle.clone());
        Ok(())
    }

    async fn get(&self, key: &CircleKey) -> Result<Circle> {
        let state = self.store.state.read().await;

        let found = match key {
            CircleKey::Id(id) => state.circles.get(id),
            CircleKey::Name(name) => state.circles.values().find(|c| c.name() == name),
        };

        found
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(CIRCLE_ENTITY, key))
    }

    async fn update(&self, circle: &Circle) -> Result<()> {
        let mut state = self.store.state.write().await;

        if !state.circles.contains_key(circle.id()) {
            return Err(RepositoryError::not_found(
                CIRCLE_ENTITY,
                CircleKey::Id(circle.id().clone()),
            ));
        }
        if state
            .circles
            .values()
            .any(|other| other.id() != circle.id() && other.name() == circle.name())
        {
            return Err(RepositoryError::duplicate(
                CIRCLE_ENTITY,
                CircleKey::Name(circle.name().clone()),
            ));
        }

        state.circles.insert(circle.id().clone(), circle.clone());
        Ok(())
    }

    async fn delete(&self, id: &CircleId) -> Result<()> {
        let mut state = self.store.state.write().await;

        state
            .circles
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(CIRCLE_ENTITY, CircleKey::Id(id.clone())))
    }

    async fn batch_get(&self, ids: &[CircleId]) -> Result<Vec<Circle>> {
        let state = self.store.state.read().await;

        let missing: Vec<&CircleId> = ids
            .iter()
            .filter(|id| !state.circles.contains_key(*id))
            .collect();
        if !missing.is_empty() {
            return Err(RepositoryError::not_found(
                CIRCLE_ENTITY,
                missing_ids_key(&missing),
            ));
        }

        Ok(ids
            .iter()
            .filter_map(|id| state.circles.get(id).cloned())
            .collect())
    }
}
