//! User aggregate implementation.

use serde::{Deserialize, Serialize};

use super::{MailAddress, UserId, UserName};

/// User aggregate root.
///
/// Equality is structural: two users are equal when id, name and mail
/// address all match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: UserName,
    mail_address: MailAddress,
}

impl User {
    /// Registers a new user under a freshly generated id.
    pub fn register(name: UserName, mail_address: MailAddress) -> Self {
        Self::rehydrate(UserId::generate(), name, mail_address)
    }

    /// Rebuilds a user that already exists in storage.
    pub fn rehydrate(id: UserId, name: UserName, mail_address: MailAddress) -> Self {
        Self {
            id,
            name,
            mail_address,
        }
    }

    /// Returns the user id.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the user name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Returns the mail address.
    pub fn mail_address(&self) -> &MailAddress {
        &self.mail_address
    }

    /// Replaces the user name. Uniqueness is the caller's concern.
    pub fn change_name(&mut self, name: UserName) {
        self.name = name;
    }

    /// Replaces the mail address. Uniqueness is the caller's concern.
    pub fn change_mail_address(&mut self, mail_address: MailAddress) {
        self.mail_address = mail_address;
    }
}
