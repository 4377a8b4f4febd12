//! User use cases.

mod commands;
mod data;
mod delete;
mod get;
mod register;
mod update;

pub use commands::{DeleteUserCommand, GetUserCommand, RegisterUserCommand, UpdateUserCommand};
pub use data::UserData;
pub use delete::DeleteUserService;
pub use get::GetUserService;
pub use register::RegisterUserService;
pub use update::UpdateUserService;
