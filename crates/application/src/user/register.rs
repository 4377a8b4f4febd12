use domain::{MailAddress, USER_ENTITY, User, UserKey, UserName, UserRepository, UserUniquenessService};

use crate::error::{ApplicationError, Result};

use super::{RegisterUserCommand, UserData};

/// Registers a new user after checking name and mail address are free.
pub struct RegisterUserService<R: UserRepository> {
    users: R,
    uniqueness: UserUniquenessService<R>,
}

impl<R: UserRepository + Clone> RegisterUserService<R> {
    /// Creates the service over the given user repository.
    pub fn new(users: R) -> Self {
        Self {
            uniqueness: UserUniquenessService::new(users.clone()),
            users,
        }
    }

    /// Registers the user and returns its read model.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: RegisterUserCommand) -> Result<UserData> {
        let name = UserName::new(command.name)?;
        let mail_address = MailAddress::new(command.mail_address)?;

        if !self.uniqueness.unique_name(&name).await? {
            return Err(ApplicationError::duplicate(USER_ENTITY, UserKey::Name(name)));
        }
        if !self.uniqueness.unique_mail_address(&mail_address).await? {
            return Err(ApplicationError::duplicate(
                USER_ENTITY,
                UserKey::MailAddress(mail_address),
            ));
        }

        let user = User::register(name, mail_address);
        self.users.create(&user).await?;

        metrics::counter!("users_registered_total").increment(1);
        tracing::info!(user_id = %user.id(), "user registered");

        Ok(UserData::from(&user))
    }
}
