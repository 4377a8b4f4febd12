//! Value objects for the circle domain.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, Result};
use crate::validation;

/// Minimum number of characters in a [`CircleName`].
pub const CIRCLE_NAME_MIN_LEN: usize = 3;

/// Maximum number of characters in a [`CircleName`].
pub const CIRCLE_NAME_MAX_LEN: usize = 20;

/// Unique identifier for a circle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CircleId(String);

impl CircleId {
    /// Validates and wraps an existing circle id.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validation::non_empty("circle id", &id)?;
        Ok(Self(id))
    }

    /// Creates a fresh random circle id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the wrapped id.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CircleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CircleId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CircleId> for String {
    fn from(id: CircleId) -> Self {
        id.0
    }
}

impl AsRef<str> for CircleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Display name of a circle, 3 to 20 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CircleName(String);

impl CircleName {
    /// Validates and wraps a circle name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validation::char_length(
            "circle name",
            &name,
            CIRCLE_NAME_MIN_LEN,
            CIRCLE_NAME_MAX_LEN,
        )?;
        Ok(Self(name))
    }

    /// Returns the wrapped name.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CircleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CircleName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CircleName> for String {
    fn from(name: CircleName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_id_generate_creates_unique_ids() {
        assert_ne!(CircleId::generate(), CircleId::generate());
    }

    #[test]
    fn test_circle_id_rejects_empty() {
        assert!(matches!(
            CircleId::new(""),
            Err(DomainError::ArgumentInvalid { .. })
        ));
    }

    #[test]
    fn test_circle_name_length_bounds() {
        assert!(CircleName::new("ab").is_err());
        assert!(CircleName::new("a".repeat(21)).is_err());
        assert_eq!(CircleName::new("abc").unwrap().value(), "abc");
        assert!(CircleName::new("a".repeat(20)).is_ok());
    }

    #[test]
    fn test_circle_name_allows_plain_letters() {
        // Unlike user names, circle names have no character policy.
        assert!(CircleName::new("chess").is_ok());
    }
}
