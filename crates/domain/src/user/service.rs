//! Uniqueness checks for users.

use crate::repository::{RepositoryError, UserKey, UserRepository};

use super::{MailAddress, UserName};

/// Decides whether a user name or mail address is still available.
///
/// Uniqueness needs the whole population, so it lives outside the
/// aggregate and asks the repository.
#[derive(Debug, Clone)]
pub struct UserUniquenessService<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> UserUniquenessService<R> {
    /// Creates a uniqueness service backed by the given repository.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns `true` when no user holds `name`.
    pub async fn unique_name(&self, name: &UserName) -> Result<bool, RepositoryError> {
        self.unique(&UserKey::Name(name.clone())).await
    }

    /// Returns `true` when no user holds `mail_address`.
    pub async fn unique_mail_address(
        &self,
        mail_address: &MailAddress,
    ) -> Result<bool, RepositoryError> {
        self.unique(&UserKey::MailAddress(mail_address.clone()))
            .await
    }

    async fn unique(&self, key: &UserKey) -> Result<bool, RepositoryError> {
        match self.repository.get(key).await {
            Ok(_) => Ok(false),
            Err(RepositoryError::NotFound { .. }) => Ok(true),
            Err(e) => Err(e),
        }
    }
}
