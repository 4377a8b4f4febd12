//! Value objects for the user domain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, Result};
use crate::validation;

/// Minimum number of characters in a [`UserName`].
pub const USER_NAME_MIN_LEN: usize = 3;

/// Maximum number of characters in a [`UserName`].
pub const USER_NAME_MAX_LEN: usize = 20;

/// Minimum number of characters in a [`MailAddress`].
pub const MAIL_ADDRESS_MIN_LEN: usize = 3;

/// Unique identifier for a user.
///
/// Wraps the textual form of a UUID. Any non-empty string is accepted when
/// rehydrating so ids minted by other systems survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validates and wraps an existing user id.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validation::non_empty("user id", &id)?;
        Ok(Self(id))
    }

    /// Creates a fresh random user id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the wrapped id.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Display name of a user.
///
/// Between 3 and 20 characters. A name made only of ASCII letters is
/// rejected; see [`UserName::is_only_ascii_letters`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validates and wraps a user name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validation::char_length("user name", &name, USER_NAME_MIN_LEN, USER_NAME_MAX_LEN)?;
        if Self::is_only_ascii_letters(&name) {
            return Err(DomainError::invalid(
                "user name",
                "must contain at least one character that is not an ASCII letter",
            ));
        }
        Ok(Self(name))
    }

    /// Character policy for user names: true when every character is `a-z`/`A-Z`.
    ///
    /// Such names are refused. Kept in one place so the rule can be flipped
    /// once the business owner confirms the intended direction.
    pub fn is_only_ascii_letters(name: &str) -> bool {
        name.chars().all(|c| c.is_ascii_alphabetic())
    }

    /// Returns the wrapped name.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

/// Contact address of a user.
///
/// Only a minimum length is enforced; this is not an RFC 5322 check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MailAddress(String);

impl MailAddress {
    /// Validates and wraps a mail address.
    pub fn new(address: impl Into<String>) -> Result<Self> {
        let address = address.into();
        validation::char_length("mail address", &address, MAIL_ADDRESS_MIN_LEN, usize::MAX)?;
        Ok(Self(address))
    }

    /// Returns the wrapped address.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for MailAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MailAddress> for String {
    fn from(address: MailAddress) -> Self {
        address.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid<T: std::fmt::Debug>(result: Result<T>) {
        assert!(
            matches!(result, Err(DomainError::ArgumentInvalid { .. })),
            "expected ArgumentInvalid, got {result:?}"
        );
    }

    #[test]
    fn test_user_id_generate_creates_unique_ids() {
        let id1 = UserId::generate();
        let id2 = UserId::generate();
        assert_ne!(id1, id2);
        assert!(Uuid::parse_str(id1.value()).is_ok());
    }

    #[test]
    fn test_user_id_rejects_empty() {
        assert_invalid(UserId::new(""));
    }

    #[test]
    fn test_user_name_round_trips_value() {
        for name in ["bob_1", "a-b", "山田太郎", "user 42", "x1234567890123456789"] {
            let user_name = UserName::new(name).unwrap();
            assert_eq!(user_name.value(), name);
        }
    }

    #[test]
    fn test_user_name_length_bounds() {
        assert_invalid(UserName::new(""));
        assert_invalid(UserName::new("a1"));
        assert_invalid(UserName::new("1".repeat(21)));
        assert!(UserName::new("a_1").is_ok());
        assert!(UserName::new("1".repeat(20)).is_ok());
    }

    #[test]
    fn test_user_name_rejects_pure_ascii_letters() {
        assert_invalid(UserName::new("alice"));
        assert_invalid(UserName::new("ALICEsmith"));
        assert!(UserName::new("alice2").is_ok());
        assert!(UserName::new("アリス").is_ok());
    }

    #[test]
    fn test_mail_address_minimum_length() {
        assert_invalid(MailAddress::new("ab"));
        let address = MailAddress::new("a@b").unwrap();
        assert_eq!(address.value(), "a@b");
    }

    #[test]
    fn test_value_objects_compare_by_value() {
        assert_eq!(
            MailAddress::new("bob@example.com").unwrap(),
            MailAddress::new("bob@example.com").unwrap()
        );
        assert_ne!(
            UserName::new("bob_1").unwrap(),
            UserName::new("bob_2").unwrap()
        );
    }

    #[test]
    fn test_deserialization_validates() {
        let name: std::result::Result<UserName, _> = serde_json::from_str("\"bob\"");
        assert!(name.is_err());

        let name: UserName = serde_json::from_str("\"bob_1\"").unwrap();
        assert_eq!(name.value(), "bob_1");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"bob_1\"");
    }
}
