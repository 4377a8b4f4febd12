use async_trait::async_trait;
use domain::repository::{Result, missing_ids_key};
use domain::{RepositoryError, USER_ENTITY, User, UserId, UserKey, UserRepository};

use super::InMemoryStore;

/// [`UserRepository`] over an [`InMemoryStore`].
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    store: InMemoryStore,
}

impl InMemoryUserRepository {
    /// Creates a repository reading and writing `store`.
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

fn matches_key(user: &User, key: &UserKey) -> bool {
    match key {
        UserKey::Id(id) => user.id() == id,
        UserKey::Name(name) => user.name() == name,
        UserKey::MailAddress(address) => user.mail_address() == address,
    }
}

/// Returns the first unique key of `user` already held by a different user.
fn conflicting_key<'a>(
    existing: impl Iterator<Item = &'a User>,
    user: &User,
) -> Option<UserKey> {
    for other in existing.filter(|other| other.id() != user.id()) {
        if other.name() == user.name() {
            return Some(UserKey::Name(user.name().clone()));
        }
        if other.mail_address() == user.mail_address() {
            return Some(UserKey::MailAddress(user.mail_address().clone()));
        }
    }
    None
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<()> {
        let mut state = self.store.state.write().await;

        if state.users.contains_key(user.id()) {
            return Err(RepositoryError::duplicate(
                USER_ENTITY,
                UserKey::Id(user.id().clone()),
            ));
        }
        if let Some(key) = conflicting_key(state.users.values(), user) {
            return Err(RepositoryError::duplicate(USER_ENTITY, key));
        }

        state.users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn get(&self, key: &UserKey) -> Result<User> {
        let state = self.store.state.read().await;

        let found = match key {
            UserKey::Id(id) => state.users.get(id),
            _ => state.users.values().find(|user| matches_key(user, key)),
        };

        found
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(USER_ENTITY, key))
    }

    async fn update(&self, user: &User) -> Result<()> {
        let mut state = self.store.state.write().await;

        if !state.users.contains_key(user.id()) {
            return Err(RepositoryError::not_found(
                USER_ENTITY,
                UserKey::Id(user.id().clone()),
            ));
        }
        if let Some(key) = conflicting_key(state.users.values(), user) {
            return Err(RepositoryError::duplicate(USER_ENTITY, key));
        }

        state.users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<()> {
        let mut state = self.store.state.write().await;

        state
            .users
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(USER_ENTITY, UserKey::Id(id.clone())))
    }

    async fn batch_get(&self, ids: &[UserId]) -> Result<Vec<User>> {
        let state = self.store.state.read().await;

        let missing: Vec<&UserId> = ids
            .iter()
            .filter(|id| !state.users.contains_key(*id))
            .collect();
        if !missing.is_empty() {
            return Err(RepositoryError::not_found(
                USER_ENTITY,
                missing_ids_key(&missing),
            ));
        }

        Ok(ids
            .iter()
            .filter_map(|id| state.users.get(id).cloned())
            .collect())
    }
}
