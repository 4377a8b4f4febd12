use domain::UserRepository;

use crate::error::Result;

use super::{GetUserCommand, UserData};

/// Looks a user up by id, name or mail address.
pub struct GetUserService<R: UserRepository> {
    users: R,
}

impl<R: UserRepository> GetUserService<R> {
    /// Creates the service over the given user repository.
    pub fn new(users: R) -> Self {
        Self { users }
    }

    /// Returns the matching user or `NotFound`.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: GetUserCommand) -> Result<UserData> {
        let key = command.into_key()?;
        let user = self.users.get(&key).await?;
        Ok(UserData::from(&user))
    }
}
