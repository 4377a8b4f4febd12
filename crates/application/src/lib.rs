//! Application layer for the users and circles service.
//!
//! One service per use case. Each service validates its command into
//! domain types, checks every rule before touching storage, and translates
//! domain and repository failures into [`ApplicationError`].
//!
//! Deletes are idempotent: removing an entity that is already gone is
//! reported as success.

pub mod circle;
pub mod error;
pub mod user;

pub use circle::{
    CircleData, DeleteCircleCommand, DeleteCircleService, GetCircleCommand, GetCircleService,
    JoinCircleCommand, JoinCircleService, RegisterCircleCommand, RegisterCircleService,
    UpdateCircleCommand, UpdateCircleService,
};
pub use error::{ApplicationError, Result};
pub use user::{
    DeleteUserCommand, DeleteUserService, GetUserCommand, GetUserService, RegisterUserCommand,
    RegisterUserService, UpdateUserCommand, UpdateUserService, UserData,
};
