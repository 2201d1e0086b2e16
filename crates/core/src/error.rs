//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. A missing
/// search result is **not** an error — absence is a normal outcome and is
/// represented as `Option::None` by the search crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank item name).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_carries_its_message() {
        let err = DomainError::validation("name cannot be empty");
        assert_eq!(err, DomainError::Validation("name cannot be empty".into()));
        assert_eq!(err.to_string(), "validation failed: name cannot be empty");
    }
}
