//! Circle use cases.

mod commands;
mod data;
mod delete;
mod get;
mod join;
mod register;
mod update;

pub use commands::{
    DeleteCircleCommand, GetCircleCommand, JoinCircleCommand, RegisterCircleCommand,
    UpdateCircleCommand,
};
pub use data::CircleData;
pub use delete::DeleteCircleService;
pub use get::GetCircleService;
pub use join::JoinCircleService;
pub use register::RegisterCircleService;
pub use update::UpdateCircleService;
