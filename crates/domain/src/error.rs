//! Domain error types.

use thiserror::Error;

/// Errors raised by value objects and aggregates.
///
/// Domain errors never reference storage; repository failures live in
/// [`crate::repository::RepositoryError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A value object or factory received an argument violating its invariant.
    #[error("Invalid {field}: {reason}")]
    ArgumentInvalid { field: &'static str, reason: String },

    /// Joining would push the circle past its capacity.
    #[error("Circle {circle_id} is full (capacity {capacity})")]
    CircleFull { circle_id: String, capacity: usize },

    /// The user already belongs to the circle, either as owner or member.
    #[error("User {user_id} already belongs to circle {circle_id}")]
    AlreadyMember { circle_id: String, user_id: String },
}

impl DomainError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::ArgumentInvalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
