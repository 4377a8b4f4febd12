//! Repository contracts for users and circles.
//!
//! Lookups are polymorphic over the identity used: callers pass a
//! [`UserKey`] or [`CircleKey`] and each implementation dispatches to the
//! matching index (primary key or one of the unique business keys).

use async_trait::async_trait;
use thiserror::Error;

use crate::circle::{Circle, CircleId, CircleName};
use crate::user::{MailAddress, User, UserId, UserName};

/// Entity label used in repository errors for users.
pub const USER_ENTITY: &str = "user";

/// Entity label used in repository errors for circles.
pub const CIRCLE_ENTITY: &str = "circle";

/// Errors raised by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No entity matches the requested identity.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// An entity with the same id or unique business key already exists.
    #[error("{entity} already exists: {key}")]
    Duplicate { entity: &'static str, key: String },

    /// The adapter refused the request as malformed.
    #[error("Invalid repository argument: {0}")]
    Argument(String),

    /// Stored data could not be turned back into an aggregate.
    #[error("Stored {entity} could not be decoded: {reason}")]
    Type { entity: &'static str, reason: String },

    /// The storage backend failed.
    #[error("Storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Builds a `NotFound` error for the given entity label and key.
    pub fn not_found(entity: &'static str, key: impl std::fmt::Display) -> Self {
        RepositoryError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    /// Builds a `Duplicate` error for the given entity label and key.
    pub fn duplicate(entity: &'static str, key: impl std::fmt::Display) -> Self {
        RepositoryError::Duplicate {
            entity,
            key: key.to_string(),
        }
    }

    /// Returns true for the `NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Identity a user can be looked up by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserKey {
    /// Surrogate id (primary key).
    Id(UserId),
    /// Unique user name.
    Name(UserName),
    /// Unique mail address.
    MailAddress(MailAddress),
}

impl std::fmt::Display for UserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserKey::Id(id) => write!(f, "id {id}"),
            UserKey::Name(name) => write!(f, "name {name}"),
            UserKey::MailAddress(address) => write!(f, "mail address {address}"),
        }
    }
}

impl From<UserId> for UserKey {
    fn from(id: UserId) -> Self {
        UserKey::Id(id)
    }
}

impl From<UserName> for UserKey {
    fn from(name: UserName) -> Self {
        UserKey::Name(name)
    }
}

impl From<MailAddress> for UserKey {
    fn from(address: MailAddress) -> Self {
        UserKey::MailAddress(address)
    }
}

/// Identity a circle can be looked up by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CircleKey {
    /// Surrogate id (primary key).
    Id(CircleId),
    /// Unique circle name.
    Name(CircleName),
}

impl std::fmt::Display for CircleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CircleKey::Id(id) => write!(f, "id {id}"),
            CircleKey::Name(name) => write!(f, "name {name}"),
        }
    }
}

impl From<CircleId> for CircleKey {
    fn from(id: CircleId) -> Self {
        CircleKey::Id(id)
    }
}

impl From<CircleName> for CircleKey {
    fn from(name: CircleName) -> Self {
        CircleKey::Name(name)
    }
}

/// Persistence contract for users.
///
/// Implementations must hand out independent copies: mutating a returned
/// [`User`] never changes stored state.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// Fails with `Duplicate` if the id, name or mail address is taken.
    async fn create(&self, user: &User) -> Result<()>;

    /// Retrieves a user by any of its identities.
    ///
    /// Fails with `NotFound` when nothing matches.
    async fn get(&self, key: &UserKey) -> Result<User>;

    /// Overwrites an existing user.
    ///
    /// Fails with `NotFound` if the id is unknown and with `Duplicate` if the
    /// new name or mail address belongs to another user.
    async fn update(&self, user: &User) -> Result<()>;

    /// Removes a user.
    ///
    /// Fails with `NotFound` if the id is unknown; callers decide whether
    /// that matters.
    async fn delete(&self, id: &UserId) -> Result<()>;

    /// Retrieves several users by id, in the order requested.
    ///
    /// Fails with `NotFound` listing every id that did not resolve.
    async fn batch_get(&self, ids: &[UserId]) -> Result<Vec<User>>;
}

/// Named lookups on top of [`UserRepository::get`].
#[async_trait]
pub trait UserRepositoryExt: UserRepository {
    /// Looks a user up by surrogate id.
    async fn find_by_id(&self, id: &UserId) -> Result<User> {
        self.get(&UserKey::Id(id.clone())).await
    }

    /// Looks a user up by name.
    async fn find_by_name(&self, name: &UserName) -> Result<User> {
        self.get(&UserKey::Name(name.clone())).await
    }

    /// Looks a user up by mail address.
    async fn find_by_mail_address(&self, mail_address: &MailAddress) -> Result<User> {
        self.get(&UserKey::MailAddress(mail_address.clone())).await
    }
}

impl<T: UserRepository + ?Sized> UserRepositoryExt for T {}

/// Persistence contract for circles.
///
/// Same copy semantics as [`UserRepository`]; the member list of a returned
/// [`Circle`] is never shared with the store.
#[async_trait]
pub trait CircleRepository: Send + Sync {
    /// Stores a new circle. Fails with `Duplicate` if the id or name is taken.
    async fn create(&self, circle: &Circle) -> Result<()>;

    /// Retrieves a circle by id or name.
    async fn get(&self, key: &CircleKey) -> Result<Circle>;

    /// Overwrites an existing circle.
    async fn update(&self, circle: &Circle) -> Result<()>;

    /// Removes a circle. Fails with `NotFound` if the id is unknown.
    async fn delete(&self, id: &CircleId) -> Result<()>;

    /// Retrieves several circles by id, in the order requested.
    async fn batch_get(&self, ids: &[CircleId]) -> Result<Vec<Circle>>;
}

/// Named lookups on top of [`CircleRepository::get`].
#[async_trait]
pub trait CircleRepositoryExt: CircleRepository {
    /// Looks a circle up by surrogate id.
    async fn find_by_id(&self, id: &CircleId) -> Result<Circle> {
        self.get(&CircleKey::Id(id.clone())).await
    }

    /// Looks a circle up by name.
    async fn find_by_name(&self, name: &CircleName) -> Result<Circle> {
        self.get(&CircleKey::Name(name.clone())).await
    }
}

impl<T: CircleRepository + ?Sized> CircleRepositoryExt for T {}

/// Formats ids that failed to resolve in a batch lookup.
pub fn missing_ids_key<I: std::fmt::Display>(missing: &[I]) -> String {
    let ids: Vec<String> = missing.iter().map(ToString::to_string).collect();
    format!("ids [{}]", ids.join(", "))
}
