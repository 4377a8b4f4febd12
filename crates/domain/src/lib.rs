//! Domain layer for the users and circles service.
//!
//! This crate provides:
//! - Self-validating value objects (ids, names, mail addresses)
//! - The `User` and `Circle` aggregates with their local invariants
//! - Repository contracts with lookup by id or unique business key
//! - Uniqueness services that need a repository round trip

pub mod circle;
pub mod error;
pub mod repository;
pub mod user;
mod validation;

pub use circle::{
    CIRCLE_CAPACITY, Circle, CircleId, CircleName, CircleUniquenessService,
};
pub use error::DomainError;
pub use repository::{
    CIRCLE_ENTITY, CircleKey, CircleRepository, CircleRepositoryExt, RepositoryError, USER_ENTITY,
    UserKey, UserRepository, UserRepositoryExt,
};
pub use user::{MailAddress, User, UserId, UserName, UserUniquenessService};
