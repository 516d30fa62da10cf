//! Errors raised while registering, resolving or binding operations.

use thiserror::Error;

use super::OperationKind;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Operation registry errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("No {kind} with code '{code}' is registered")]
    NotFound { kind: OperationKind, code: String },

    #[error("Argument '{argument}' of '{operation}' is required")]
    MissingArgument { operation: String, argument: String },

    #[error("Argument '{argument}' of '{operation}' is invalid: {reason}")]
    InvalidArgument {
        operation: String,
        argument: String,
        reason: String,
    },

    #[error("A {kind} with code '{code}' is already registered")]
    DuplicateDefinition { kind: OperationKind, code: String },

    #[error("Default for argument '{argument}' of '{operation}' is invalid: {reason}")]
    InvalidDefault {
        operation: String,
        argument: String,
        reason: String,
    },
}

impl OperationError {
    pub fn not_found(kind: OperationKind, code: impl Into<String>) -> Self {
        OperationError::NotFound {
            kind,
            code: code.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            OperationError::NotFound { .. } => ErrorCode::OperationNotFound,
            OperationError::MissingArgument { .. } => ErrorCode::ValidationFailed,
            OperationError::InvalidArgument { .. } => ErrorCode::ValidationFailed,
            OperationError::DuplicateDefinition { .. } => ErrorCode::InternalError,
            OperationError::InvalidDefault { .. } => ErrorCode::InternalError,
        }
    }
}

impl From<OperationError> for DomainError {
    fn from(err: OperationError) -> Self {
        let code = err.code();
        let error = DomainError::new(code, err.to_string());
        match &err {
            OperationError::NotFound { code, .. } => error.with_detail("operation", code.clone()),
            OperationError::MissingArgument { argument, .. }
            | OperationError::InvalidArgument { argument, .. } => {
                error.with_detail("argument", argument.clone())
            }
            _ => error,
        }
    }
}
