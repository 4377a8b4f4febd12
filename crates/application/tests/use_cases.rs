//! End-to-end use case tests over the in-memory store.

use application::{
    ApplicationError, DeleteCircleCommand, DeleteCircleService, DeleteUserCommand,
    DeleteUserService, GetCircleCommand, GetCircleService, GetUserCommand, GetUserService,
    JoinCircleCommand, JoinCircleService, RegisterCircleCommand, RegisterCircleService,
    RegisterUserCommand, RegisterUserService, UpdateUserCommand, UpdateUserService, UserData,
};
use async_trait::async_trait;
use domain::repository::Result as RepositoryResult;
use domain::{
    CIRCLE_CAPACITY, DomainError, MailAddress, RepositoryError, User, UserId, UserKey,
    UserRepository, UserRepositoryExt,
};
use persistence::{InMemoryCircleRepository, InMemoryStore, InMemoryUserRepository};

/// Repository double whose every call fails the way a dropped connection would.
#[derive(Clone)]
struct UnreachableUsers;

#[async_trait]
impl UserRepository for UnreachableUsers {
    async fn create(&self, _user: &User) -> RepositoryResult<()> {
        Err(RepositoryError::Backend("connection refused".into()))
    }

    async fn get(&self, _key: &UserKey) -> RepositoryResult<User> {
        Err(RepositoryError::Backend("connection refused".into()))
    }

    async fn update(&self, _user: &User) -> RepositoryResult<()> {
        Err(RepositoryError::Backend("connection refused".into()))
    }

    async fn delete(&self, _id: &UserId) -> RepositoryResult<()> {
        Err(RepositoryError::Backend("connection refused".into()))
    }

    async fn batch_get(&self, _ids: &[UserId]) -> RepositoryResult<Vec<User>> {
        Err(RepositoryError::Backend("connection refused".into()))
    }
}

async fn register_user(store: &InMemoryStore, name: &str, mail: &str) -> UserData {
    RegisterUserService::new(InMemoryUserRepository::new(store.clone()))
        .handle(RegisterUserCommand::new(name, mail))
        .await
        .unwrap()
}

#[tokio::test]
async fn lookup_by_any_key_projects_the_same_user() {
    let store = InMemoryStore::new();
    let registered = register_user(&store, "bob_1", "bob@example.com").await;
    let service = GetUserService::new(InMemoryUserRepository::new(store));

    let by_id = service
        .handle(GetUserCommand::by_id(registered.id()))
        .await
        .unwrap();
    let by_name = service
        .handle(GetUserCommand::by_name("bob_1"))
        .await
        .unwrap();
    let by_mail = service
        .handle(GetUserCommand::by_mail_address("bob@example.com"))
        .await
        .unwrap();

    assert_eq!(by_id, registered);
    assert_eq!(by_name, registered);
    assert_eq!(by_mail, registered);
}

#[tokio::test]
async fn second_registration_with_same_mail_leaves_one_record() {
    let store = InMemoryStore::new();
    register_user(&store, "bob_1", "bob@example.com").await;
    let users = InMemoryUserRepository::new(store.clone());

    let result = RegisterUserService::new(users.clone())
        .handle(RegisterUserCommand::new("robert_2", "bob@example.com"))
        .await;

    assert!(matches!(result, Err(ApplicationError::Duplicate { .. })));
    assert_eq!(store.user_count().await, 1);
    let holder = users
        .find_by_mail_address(&MailAddress::new("bob@example.com").unwrap())
        .await
        .unwrap();
    assert_eq!(holder.name().value(), "bob_1");
}

#[tokio::test]
async fn update_of_both_fields_is_observed_together() {
    let store = InMemoryStore::new();
    let bob = register_user(&store, "bob_1", "bob@example.com").await;
    let users = InMemoryUserRepository::new(store);

    UpdateUserService::new(users.clone())
        .handle(
            UpdateUserCommand::new(bob.id())
                .with_name("robert_1")
                .with_mail_address("robert@example.com"),
        )
        .await
        .unwrap();

    let fetched = GetUserService::new(users)
        .handle(GetUserCommand::by_id(bob.id()))
        .await
        .unwrap();
    assert_eq!(fetched.name(), "robert_1");
    assert_eq!(fetched.mail_address(), "robert@example.com");
}

#[tokio::test]
async fn deleting_missing_entities_succeeds_and_changes_nothing() {
    let store = InMemoryStore::new();
    let bob = register_user(&store, "bob_1", "bob@example.com").await;

    DeleteUserService::new(InMemoryUserRepository::new(store.clone()))
        .handle(DeleteUserCommand::new(UserId::generate().value()))
        .await
        .unwrap();
    DeleteCircleService::new(InMemoryCircleRepository::new(store.clone()))
        .handle(DeleteCircleCommand::new("no-such-circle"))
        .await
        .unwrap();

    assert_eq!(store.user_count().await, 1);
    assert_eq!(store.circle_count().await, 0);
    GetUserService::new(InMemoryUserRepository::new(store))
        .handle(GetUserCommand::by_id(bob.id()))
        .await
        .unwrap();
}

#[tokio::test]
async fn circle_fills_up_to_capacity_through_joins() {
    let store = InMemoryStore::new();
    let users = InMemoryUserRepository::new(store.clone());
    let circles = InMemoryCircleRepository::new(store.clone());
    let owner = register_user(&store, "owner_1", "owner@example.com").await;

    let circle = RegisterCircleService::new(users.clone(), circles.clone())
        .handle(RegisterCircleCommand::new(owner.id(), "chess club"))
        .await
        .unwrap();

    let join = JoinCircleService::new(users.clone(), circles.clone());
    for i in 1..CIRCLE_CAPACITY {
        let member =
            register_user(&store, &format!("member_{i}"), &format!("m{i}@example.com")).await;
        join.handle(JoinCircleCommand::new(circle.id(), member.id()))
            .await
            .unwrap();
    }

    let late = register_user(&store, "late_1", "late@example.com").await;
    let err = join
        .handle(JoinCircleCommand::new(circle.id(), late.id()))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Rule(DomainError::CircleFull { capacity: 30, .. })
    ));

    let stored = GetCircleService::new(circles)
        .handle(GetCircleCommand::new(circle.id()))
        .await
        .unwrap();
    assert_eq!(stored.member_ids().len(), CIRCLE_CAPACITY - 1);
    assert!(!stored.member_ids().iter().any(|id| id == late.id()));
}

#[tokio::test]
async fn backend_failures_surface_as_unknown() {
    let register = RegisterUserService::new(UnreachableUsers)
        .handle(RegisterUserCommand::new("bob_1", "bob@example.com"))
        .await;
    let get = GetUserService::new(UnreachableUsers)
        .handle(GetUserCommand::by_id("u-1"))
        .await;

    assert!(matches!(register, Err(ApplicationError::Unknown(_))));
    assert!(matches!(get, Err(ApplicationError::Unknown(_))));
}

#[tokio::test]
async fn delete_does_not_hide_backend_failures() {
    let result = DeleteUserService::new(UnreachableUsers)
        .handle(DeleteUserCommand::new("u-1"))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, ApplicationError::Unknown(_)));
    assert_eq!(
        std::error::Error::source(&err).unwrap().to_string(),
        "Storage backend error: connection refused"
    );
}
