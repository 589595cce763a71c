//! Domain error taxonomy for the registration core.
//!
//! # Purpose
//! Centralizes the error kinds the request-handling layer maps to stable
//! status codes. None of these conditions are transient, so nothing here is
//! ever retried internally; store transport errors pass through transparently
//! so the caller can apply its own retry policy.
use crate::store::StoreError;
use rally_authz::AuthzError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Referenced event, registration, or user does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// Structurally valid request violates a domain rule. `example` may carry
    /// a well-formed request sample for the caller; it must survive to the
    /// boundary untouched.
    #[error("validation: {message}")]
    Validation {
        message: String,
        example: Option<serde_json::Value>,
    },
    /// Would violate the at-most-one-active-registration invariant or the
    /// active-event name uniqueness constraint.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Principal missing, or an ownership check failed where the caller is
    /// entitled to know why.
    #[error("authorization: {0}")]
    Authorization(String),
    /// Role-scoped policy rejection independent of resource ownership.
    #[error("forbidden: {0}")]
    Forbidden(String),
    /// Store transport failure, propagated unwrapped.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation {
            message: message.into(),
            example: None,
        }
    }

    pub fn validation_with_example(message: impl Into<String>, example: serde_json::Value) -> Self {
        CoreError::Validation {
            message: message.into(),
            example: Some(example),
        }
    }
}

impl From<AuthzError> for CoreError {
    fn from(err: AuthzError) -> Self {
        CoreError::Authorization(err.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_example_payload_is_preserved() {
        let example = serde_json::json!({ "name": "RustConf", "date": "2031-01-01T00:00:00Z" });
        let err = CoreError::validation_with_example("name must not be blank", example.clone());
        match err {
            CoreError::Validation {
                example: Some(payload),
                ..
            } => assert_eq!(payload, example),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn store_errors_pass_through_unwrapped() {
        let err: CoreError = StoreError::unexpected("socket closed").into();
        assert_eq!(err.to_string(), "socket closed");
    }

    #[test]
    fn missing_principal_maps_to_authorization() {
        let err: CoreError = AuthzError::MissingPrincipal.into();
        assert!(matches!(err, CoreError::Authorization(_)));
    }
}
