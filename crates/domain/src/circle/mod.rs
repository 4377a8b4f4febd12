//! Circle aggregate and related types.

mod aggregate;
mod service;
mod value_objects;

pub use aggregate::{CIRCLE_CAPACITY, Circle};
pub use service::CircleUniquenessService;
pub use value_objects::{CIRCLE_NAME_MAX_LEN, CIRCLE_NAME_MIN_LEN, CircleId, CircleName};
