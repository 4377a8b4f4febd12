use domain::{RepositoryError, UserId, UserRepository};

use crate::error::Result;

use super::DeleteUserCommand;

/// Deletes a user. Deleting a user that does not exist succeeds.
pub struct DeleteUserService<R: UserRepository> {
    users: R,
}

impl<R: UserRepository> DeleteUserService<R> {
    /// Creates the service over the given user repository.
    pub fn new(users: R) -> Self {
        Self { users }
    }

    /// Removes the user if present.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: DeleteUserCommand) -> Result<()> {
        let id = UserId::new(command.id)?;

        match self.users.delete(&id).await {
            Ok(()) => {
                metrics::counter!("entity_deletes_total", "entity" => "user", "outcome" => "deleted")
                    .increment(1);
                tracing::info!(user_id = %id, "user deleted");
                Ok(())
            }
            Err(RepositoryError::NotFound { .. }) => {
                metrics::counter!("entity_deletes_total", "entity" => "user", "outcome" => "absent")
                    .increment(1);
                tracing::warn!(user_id = %id, "user already absent, nothing to delete");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
