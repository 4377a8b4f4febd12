//! Uniqueness checks for circles.

use crate::repository::{CircleKey, CircleRepository, RepositoryError};

use super::CircleName;

/// Decides whether a circle name is still available.
#[derive(Debug, Clone)]
pub struct CircleUniquenessService<R: CircleRepository> {
    repository: R,
}

impl<R: CircleRepository> CircleUniquenessService<R> {
    /// Creates a uniqueness service backed by the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns `true` when no circle holds `name`.
    ///
    /// A `NotFound` from the repository means the name is free; any other
    /// repository error is returned unchanged.
    pub async fn unique_name(&self, name: &CircleName) -> Result<bool, RepositoryError> {
        match self.repository.get(&CircleKey::Name(name.clone())).await {
            Ok(_) => Ok(false),
            Err(RepositoryError::NotFound { .. }) => Ok(true),
            Err(e) => Err(e),
        }
    }
}
