use domain::{
    CIRCLE_ENTITY, CircleId, CircleKey, CircleName, CircleRepository, CircleRepositoryExt,
    CircleUniquenessService, UserId, UserRepository, UserRepositoryExt,
};

use crate::error::{ApplicationError, Result};

use super::{CircleData, UpdateCircleCommand};

/// Renames a circle, hands it to another owner and/or adds members.
///
/// Every referenced user is resolved and every rule checked on a working
/// copy; the circle is written back only if all of it succeeds.
pub struct UpdateCircleService<U: UserRepository, C: CircleRepository> {
    users: U,
    circles: C,
    uniqueness: CircleUniquenessService<C>,
}

impl<U: UserRepository, C: CircleRepository + Clone> UpdateCircleService<U, C> {
    /// Creates the service over the given repositories.
    pub fn new(users: U, circles: C) -> Self {
        Self {
            users,
            uniqueness: CircleUniquenessService::new(circles.clone()),
            circles,
        }
    }

    /// Applies the requested changes and returns the updated read model.
    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, command: UpdateCircleCommand) -> Result<CircleData> {
        let id = CircleId::new(command.id)?;
        let name = command.name.map(CircleName::new).transpose()?;
        let owner_id = command.owner_id.map(UserId::new).transpose()?;
        let member_ids = command
            .member_ids
            .into_iter()
            .map(UserId::new)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut circle = self.circles.find_by_id(&id).await?;

        if let Some(name) = name
            && name != *circle.name()
        {
            if !self.uniqueness.unique_name(&name).await? {
                return Err(ApplicationError::duplicate(
                    CIRCLE_ENTITY,
                    CircleKey::Name(name),
                ));
            }
            circle.change_name(name);
        }

        if let Some(owner_id) = owner_id
            && owner_id != *circle.owner_id()
        {
            let owner = self
                .users
                .find_by_id(&owner_id)
                .await
                .map_err(|e| ApplicationError::from(e).for_entity("owner"))?;
            circle.change_owner(owner.id().clone());
        }

        if !member_ids.is_empty() {
            let members = self.users.batch_get(&member_ids).await?;
            for member in members {
                circle.join(member.id().clone())?;
            }
        }

        self.circles.update(&circle).await?;
        tracing::info!(
            circle_id = %id,
            occupancy = circle.occupancy(),
            "circle updated"
        );

        Ok(CircleData::from(&circle))
    }
}

#[cfg(test)]
mod tests {
    use domain::{Circle, DomainError, MailAddress, User, UserName};
    use persistence::{InMemoryCircleRepository, InMemoryStore, InMemoryUserRepository};

    use super::*;

    struct Fixture {
        users: InMemoryUserRepository,
        circles: InMemoryCircleRepository,
        service: UpdateCircleService<InMemoryUserRepository, InMemoryCircleRepository>,
        owner: User,
        circle: Circle,
    }

    async fn user(users: &InMemoryUserRepository, tag: &str) -> User {
        let user = User::register(
            UserName::new(format!("user_{tag}")).unwrap(),
            MailAddress::new(format!("{tag}@example.com")).unwrap(),
        );
        users.create(&user).await.unwrap();
        user
    }

    async fn fixture() -> Fixture {
        let store = InMemoryStore::new();
        let users = InMemoryUserRepository::new(store.clone());
        let circles = InMemoryCircleRepository::new(store);
        let owner = user(&users, "owner").await;
        let circle = Circle::create(
            CircleName::new("chess club").unwrap(),
            owner.id().clone(),
        );
        circles.create(&circle).await.unwrap();
        let service = UpdateCircleService::new(users.clone(), circles.clone());
        Fixture {
            users,
            circles,
            service,
            owner,
            circle,
        }
    }

    #[tokio::test]
    async fn renames_and_adds_members_in_order() {
        let f = fixture().await;
        let first = user(&f.users, "first").await;
        let second = user(&f.users, "second").await;

        let data = f
            .service
            .handle(
                UpdateCircleCommand::new(f.circle.id().value())
                    .with_name("go club")
                    .with_members([first.id().value(), second.id().value()]),
            )
            .await
            .unwrap();

        assert_eq!(data.name(), "go club");
        assert_eq!(
            data.member_ids(),
            &[first.id().value().to_string(), second.id().value().to_string()]
        );
        let stored = f.circles.find_by_id(f.circle.id()).await.unwrap();
        assert_eq!(stored.members(), &[first.id().clone(), second.id().clone()]);
    }

    #[tokio::test]
    async fn changes_owner_to_existing_user() {
        let f = fixture().await;
        let next = user(&f.users, "next").await;

        let data = f
            .service
            .handle(UpdateCircleCommand::new(f.circle.id().value()).with_owner(next.id().value()))
            .await
            .unwrap();

        assert_eq!(data.owner_id(), next.id().value());
        assert_ne!(data.owner_id(), f.owner.id().value());
    }

    #[tokio::test]
    async fn unknown_owner_leaves_circle_untouched() {
        let f = fixture().await;

        let err = f
            .service
            .handle(
                UpdateCircleCommand::new(f.circle.id().value())
                    .with_name("go club")
                    .with_owner("ghost"),
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "owner not found: id ghost");
        let stored = f.circles.find_by_id(f.circle.id()).await.unwrap();
        assert_eq!(stored, f.circle);
    }

    #[tokio::test]
    async fn unknown_member_is_not_found() {
        let f = fixture().await;
        let known = user(&f.users, "known").await;

        let err = f
            .service
            .handle(
                UpdateCircleCommand::new(f.circle.id().value())
                    .with_members([known.id().value(), "ghost"]),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { entity: "user", .. }));
        let stored = f.circles.find_by_id(f.circle.id()).await.unwrap();
        assert!(stored.members().is_empty());
    }

    #[tokio::test]
    async fn taken_name_is_a_duplicate() {
        let f = fixture().await;
        let other = Circle::create(CircleName::new("go club").unwrap(), f.owner.id().clone());
        f.circles.create(&other).await.unwrap();

        let result = f
            .service
            .handle(UpdateCircleCommand::new(f.circle.id().value()).with_name("go club"))
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Duplicate { entity: "circle", .. })
        ));
    }

    #[tokio::test]
    async fn keeping_the_same_name_is_not_a_duplicate() {
        let f = fixture().await;

        let data = f
            .service
            .handle(UpdateCircleCommand::new(f.circle.id().value()).with_name("chess club"))
            .await
            .unwrap();

        assert_eq!(data.name(), "chess club");
    }

    #[tokio::test]
    async fn overfilling_is_rejected_without_partial_joins() {
        let f = fixture().await;
        let mut newcomers = Vec::new();
        for i in 0..30 {
            newcomers.push(user(&f.users, &format!("m{i}")).await);
        }

        let err = f
            .service
            .handle(
                UpdateCircleCommand::new(f.circle.id().value())
                    .with_members(newcomers.iter().map(|u| u.id().value())),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Rule(DomainError::CircleFull { .. })
        ));
        let stored = f.circles.find_by_id(f.circle.id()).await.unwrap();
        assert!(stored.members().is_empty());
    }

    #[tokio::test]
    async fn unknown_circle_is_not_found() {
        let f = fixture().await;

        let err = f
            .service
            .handle(UpdateCircleCommand::new("missing").with_name("go club"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "circle not found: id missing");
    }
}
