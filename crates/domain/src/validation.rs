//! Shared checks used by value object constructors.

use crate::error::{DomainError, Result};

/// Checks that `value` has between `min` and `max` characters (inclusive).
///
/// Length is measured in `char`s so multi-byte names are not penalised.
pub(crate) fn char_length(field: &'static str, value: &str, min: usize, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len < min {
        return Err(DomainError::invalid(
            field,
            format!("must be at least {min} characters, got {len}"),
        ));
    }
    if len > max {
        return Err(DomainError::invalid(
            field,
            format!("must be at most {max} characters, got {len}"),
        ));
    }
    Ok(())
}

/// Checks that an identifier is not empty.
pub(crate) fn non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DomainError::invalid(field, "must not be empty"));
    }
    Ok(())
}
