use domain::User;
use serde::Serialize;

/// Read model of a user handed to callers.
///
/// Built only from a hydrated [`User`]; fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    id: String,
    name: String,
    mail_address: String,
}

impl UserData {
    /// Returns the user id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the user name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the mail address.
    pub fn mail_address(&self) -> &str {
        &self.mail_address
    }
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value().to_string(),
            name: user.name().value().to_string(),
            mail_address: user.mail_address().value().to_string(),
        }
    }
}
