use domain::{
    MailAddress, USER_ENTITY, UserId, UserKey, UserName, UserRepository, UserRepositoryExt,
    UserUniquenessService,
};

use crate::error::{ApplicationError, Result};

use super::{UpdateUserCommand, UserData};

/// Changes a user's name and/or mail address.
///
/// Uniqueness is checked before the aggregate is touched, and the whole
/// user is written back in one update.
pub struct UpdateUserService<R: UserRepository> {
    users: R,
    uniqueness: UserUniquenessService<R>,
}

impl<R: UserRepository + Clone> UpdateUserService<R> {
    /// Creates the service over the given user repository.
    pub fn new(users: R) -> Self {
        Self {
            uniqueness: UserUniquenessService::new(users.clone()),
            users,
        }
    }

    /// Applies the requested changes and returns the updated read model.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: UpdateUserCommand) -> Result<UserData> {
        let id = UserId::new(command.id)?;
        let name = command.name.map(UserName::new).transpose()?;
        let mail_address = command.mail_address.map(MailAddress::new).transpose()?;

        let mut user = self.users.find_by_id(&id).await?;

        if let Some(name) = name
            && name != *user.name()
        {
            if !self.uniqueness.unique_name(&name).await? {
                return Err(ApplicationError::duplicate(USER_ENTITY, UserKey::Name(name)));
            }
            user.change_name(name);
        }

        if let Some(mail_address) = mail_address
            && mail_address != *user.mail_address()
        {
            if !self.uniqueness.unique_mail_address(&mail_address).await? {
                return Err(ApplicationError::duplicate(
                    USER_ENTITY,
                    UserKey::MailAddress(mail_address),
                ));
            }
            user.change_mail_address(mail_address);
        }

        self.users.update(&user).await?;
        tracing::info!(user_id = %id, "user updated");

        Ok(UserData::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use domain::User;
    use persistence::{InMemoryStore, InMemoryUserRepository};

    use super::*;

    async fn seeded() -> (InMemoryUserRepository, User, User) {
        let users = InMemoryUserRepository::new(InMemoryStore::new());
        let bob = User::register(
            UserName::new("bob_1").unwrap(),
            MailAddress::new("bob@example.com").unwrap(),
        );
        let alice = User::register(
            UserName::new("alice_1").unwrap(),
            MailAddress::new("alice@example.com").unwrap(),
        );
        users.create(&bob).await.unwrap();
        users.create(&alice).await.unwrap();
        (users, bob, alice)
    }

    #[tokio::test]
    async fn updates_name_and_mail_address_together() {
        let (users, bob, _) = seeded().await;
        let service = UpdateUserService::new(users.clone());

        let data = service
            .handle(
                UpdateUserCommand::new(bob.id().value())
                    .with_name("robert_1")
                    .with_mail_address("robert@example.com"),
            )
            .await
            .unwrap();

        let stored = users.find_by_id(bob.id()).await.unwrap();
        assert_eq!(stored.name().value(), "robert_1");
        assert_eq!(stored.mail_address().value(), "robert@example.com");
        assert_eq!(data, UserData::from(&stored));
    }

    #[tokio::test]
    async fn taken_mail_address_leaves_user_untouched() {
        let (users, bob, _) = seeded().await;
        let service = UpdateUserService::new(users.clone());

        let result = service
            .handle(
                UpdateUserCommand::new(bob.id().value())
                    .with_name("robert_1")
                    .with_mail_address("alice@example.com"),
            )
            .await;

        assert!(matches!(result, Err(ApplicationError::Duplicate { .. })));
        assert_eq!(users.find_by_id(bob.id()).await.unwrap(), bob);
    }

    #[tokio::test]
    async fn unchanged_values_skip_the_uniqueness_check() {
        let (users, bob, _) = seeded().await;
        let service = UpdateUserService::new(users);

        let data = service
            .handle(
                UpdateUserCommand::new(bob.id().value())
                    .with_name("bob_1")
                    .with_mail_address("bob@example.com"),
            )
            .await
            .unwrap();

        assert_eq!(data, UserData::from(&bob));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let (users, _, _) = seeded().await;
        let service = UpdateUserService::new(users);

        let result = service
            .handle(UpdateUserCommand::new("ghost").with_name("ghost_1"))
            .await;

        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }
}
