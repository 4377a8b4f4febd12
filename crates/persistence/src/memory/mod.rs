//! In-memory repositories for tests and local runs.
//!
//! Both repositories read and write an explicit [`InMemoryStore`] handed to
//! their constructors, so the caller owns the store's lifetime and two
//! stores never see each other's data.

mod circle;
mod user;

use std::collections::HashMap;
use std::sync::Arc;

use domain::{Circle, CircleId, User, UserId};
use tokio::sync::RwLock;

pub use circle::InMemoryCircleRepository;
pub use user::InMemoryUserRepository;

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<UserId, User>,
    circles: HashMap<CircleId, Circle>,
}

/// Backing store shared by the in-memory repositories.
///
/// Each repository call takes the lock once, so single calls are atomic.
/// A read-check-write sequence spanning several calls is not.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored users.
    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }

    /// Returns the number of stored circles.
    pub async fn circle_count(&self) -> usize {
        self.state.read().await.circles.len()
    }

    /// Removes every user and circle.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.users.clear();
        state.circles.clear();
    }
}

#[cfg(test)]
mod tests {
    use domain::{
        CircleName, CircleRepository, MailAddress, UserName, UserRepository, UserRepositoryExt,
    };

    use super::*;

    #[tokio::test]
    async fn clear_empties_both_collections_for_every_handle() {
        let store = InMemoryStore::new();
        let users = InMemoryUserRepository::new(store.clone());
        let circles = InMemoryCircleRepository::new(store.clone());
        let owner = User::register(
            UserName::new("owner_1").unwrap(),
            MailAddress::new("owner@example.com").unwrap(),
        );
        users.create(&owner).await.unwrap();
        circles
            .create(&Circle::create(
                CircleName::new("chess club").unwrap(),
                owner.id().clone(),
            ))
            .await
            .unwrap();

        store.clone().clear().await;

        assert_eq!(store.user_count().await, 0);
        assert_eq!(store.circle_count().await, 0);
        assert!(users.find_by_id(owner.id()).await.unwrap_err().is_not_found());
    }
}
