//! User aggregate and related types.

mod aggregate;
mod service;
mod value_objects;

pub use aggregate::User;
pub use service::UserUniquenessService;
pub use value_objects::{
    MAIL_ADDRESS_MIN_LEN, MailAddress, USER_NAME_MAX_LEN, USER_NAME_MIN_LEN, UserId, UserName,
};
