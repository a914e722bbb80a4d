//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation and
/// dangling references). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed currency code).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A definition referenced an entity that does not exist.
    #[error("unknown {kind}: {name}")]
    UnknownReference { kind: &'static str, name: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_reference(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownReference {
            kind,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_reference_renders_kind_and_name() {
        let err = DomainError::unknown_reference("product", "Pistol");
        assert_eq!(err.to_string(), "unknown product: Pistol");
    }

    #[test]
    fn validation_message_is_preserved() {
        let err = DomainError::validation("currency code must be 3 letters");
        assert_eq!(
            err,
            DomainError::Validation("currency code must be 3 letters".to_string())
        );
    }
}
