//! Application error types.

use domain::{DomainError, RepositoryError};
use thiserror::Error;

/// Errors returned by application services.
///
/// Every variant is produced by translating a domain or repository error
/// at the service boundary; the original is kept as the source where it
/// carries diagnostics.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The addressed entity does not exist.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A unique name, mail address or id is already taken.
    #[error("{entity} already exists: {key}")]
    Duplicate { entity: &'static str, key: String },

    /// The command carried a value that fails validation.
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// A domain rule refused the change (full circle, repeated member).
    #[error("Rule violated: {0}")]
    Rule(DomainError),

    /// Anything the service does not know how to translate.
    #[error("Unexpected failure: {0}")]
    Unknown(#[source] RepositoryError),
}

impl ApplicationError {
    /// Builds a `Duplicate` error for the given entity label and key.
    pub fn duplicate(entity: &'static str, key: impl std::fmt::Display) -> Self {
        ApplicationError::Duplicate {
            entity,
            key: key.to_string(),
        }
    }

    /// Relabels a `NotFound` error, e.g. to report a missing owner rather
    /// than a missing user. Other variants pass through unchanged.
    pub fn for_entity(self, entity: &'static str) -> Self {
        match self {
            ApplicationError::NotFound { key, .. } => ApplicationError::NotFound { entity, key },
            other => other,
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, key } => ApplicationError::NotFound { entity, key },
            RepositoryError::Duplicate { entity, key } => {
                ApplicationError::Duplicate { entity, key }
            }
            other => ApplicationError::Unknown(other),
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ArgumentInvalid { .. } => ApplicationError::Argument(err.to_string()),
            DomainError::CircleFull { .. } | DomainError::AlreadyMember { .. } => {
                ApplicationError::Rule(err)
            }
        }
    }
}

/// Convenience type alias for application results.
pub type Result<T> = std::result::Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn repository_not_found_keeps_identity() {
        let err = ApplicationError::from(RepositoryError::not_found("user", "id 42"));
        assert!(matches!(
            &err,
            ApplicationError::NotFound { entity: "user", key } if key == "id 42"
        ));
    }

    #[test]
    fn unknown_repository_errors_are_wrapped_with_source() {
        let err = ApplicationError::from(RepositoryError::Backend("disk on fire".into()));

        assert!(matches!(err, ApplicationError::Unknown(_)));
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "Storage backend error: disk on fire");
    }

    #[test]
    fn decode_failures_are_unknown() {
        let err = ApplicationError::from(RepositoryError::Type {
            entity: "circle",
            reason: "bad name".to_string(),
        });
        assert!(matches!(err, ApplicationError::Unknown(_)));
    }

    #[test]
    fn domain_errors_split_into_argument_and_rule() {
        let invalid = DomainError::ArgumentInvalid {
            field: "user name",
            reason: "too short".to_string(),
        };
        assert!(matches!(
            ApplicationError::from(invalid),
            ApplicationError::Argument(msg) if msg == "Invalid user name: too short"
        ));

        let full = DomainError::CircleFull {
            circle_id: "c-1".to_string(),
            capacity: 30,
        };
        assert!(matches!(
            ApplicationError::from(full),
            ApplicationError::Rule(DomainError::CircleFull { .. })
        ));
    }

    #[test]
    fn for_entity_only_touches_not_found() {
        let err = ApplicationError::NotFound {
            entity: "user",
            key: "id 7".to_string(),
        }
        .for_entity("owner");
        assert_eq!(err.to_string(), "owner not found: id 7");

        let err = ApplicationError::Argument("bad".to_string()).for_entity("owner");
        assert!(matches!(err, ApplicationError::Argument(_)));
    }
}
