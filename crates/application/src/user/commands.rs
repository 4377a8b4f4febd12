//! User commands.
//!
//! Commands carry raw strings; validation into value objects happens in the
//! service that handles them.

use domain::{MailAddress, UserId, UserKey, UserName};

use crate::error::{ApplicationError, Result};

/// Command to register a new user.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    /// Requested user name.
    pub name: String,

    /// Requested mail address.
    pub mail_address: String,
}

impl RegisterUserCommand {
    /// Creates a new RegisterUserCommand.
    pub fn new(name: impl Into<String>, mail_address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mail_address: mail_address.into(),
        }
    }
}

/// Command to look a user up. Exactly one field must be set.
#[derive(Debug, Clone, Default)]
pub struct GetUserCommand {
    /// Surrogate id.
    pub id: Option<String>,

    /// Unique user name.
    pub name: Option<String>,

    /// Unique mail address.
    pub mail_address: Option<String>,
}

impl GetUserCommand {
    /// Looks the user up by id.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Looks the user up by name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Looks the user up by mail address.
    pub fn by_mail_address(mail_address: impl Into<String>) -> Self {
        Self {
            mail_address: Some(mail_address.into()),
            ..Self::default()
        }
    }

    /// Validates the command into the repository key it designates.
    pub fn into_key(self) -> Result<UserKey> {
        match (self.id, self.name, self.mail_address) {
            (Some(id), None, None) => Ok(UserKey::Id(UserId::new(id)?)),
            (None, Some(name), None) => Ok(UserKey::Name(UserName::new(name)?)),
            (None, None, Some(address)) => Ok(UserKey::MailAddress(MailAddress::new(address)?)),
            _ => Err(ApplicationError::Argument(
                "exactly one of id, name or mail address must be given".to_string(),
            )),
        }
    }
}

/// Command to change a user's name and/or mail address.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    /// The user to update.
    pub id: String,

    /// New name, if it should change.
    pub name: Option<String>,

    /// New mail address, if it should change.
    pub mail_address: Option<String>,
}

impl UpdateUserCommand {
    /// Creates an update that changes nothing yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            mail_address: None,
        }
    }

    /// Sets the new name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new mail address.
    pub fn with_mail_address(mut self, mail_address: impl Into<String>) -> Self {
        self.mail_address = Some(mail_address.into());
        self
    }
}

/// Command to delete a user.
#[derive(Debug, Clone)]
pub struct DeleteUserCommand {
    /// The user to delete.
    pub id: String,
}

impl DeleteUserCommand {
    /// Creates a new DeleteUserCommand.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_user_command_resolves_single_key() {
        let key = GetUserCommand::by_mail_address("bob@example.com")
            .into_key()
            .unwrap();
        assert_eq!(
            key,
            UserKey::MailAddress(MailAddress::new("bob@example.com").unwrap())
        );

        let key = GetUserCommand::by_id("42").into_key().unwrap();
        assert_eq!(key, UserKey::Id(UserId::new("42").unwrap()));
    }

    #[test]
    fn test_get_user_command_rejects_zero_or_many_keys() {
        assert!(matches!(
            GetUserCommand::default().into_key(),
            Err(ApplicationError::Argument(_))
        ));

        let both = GetUserCommand {
            id: Some("42".to_string()),
            mail_address: Some("bob@example.com".to_string()),
            ..GetUserCommand::default()
        };
        assert!(matches!(both.into_key(), Err(ApplicationError::Argument(_))));
    }

    #[test]
    fn test_get_user_command_validates_value() {
        assert!(matches!(
            GetUserCommand::by_name("ab").into_key(),
            Err(ApplicationError::Argument(_))
        ));
    }

    #[test]
    fn test_update_user_command_builder() {
        let cmd = UpdateUserCommand::new("42").with_name("bob_2");
        assert_eq!(cmd.id, "42");
        assert_eq!(cmd.name.as_deref(), Some("bob_2"));
        assert!(cmd.mail_address.is_none());
    }
}
